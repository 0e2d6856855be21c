//! Toolbox actions
//!
//! Leaf handlers of the ADB toolbox. Each one prompts for whatever input it
//! needs, issues one device tool call (or a streaming session) and prints
//! the result.

mod apps;
mod debug;
mod device;
mod files;
mod system_info;

use crate::log_debug;
use crate::session::Session;
use crate::terminal::{show_header, wait_for_key, Prompt};

const MODULE: &str = "actions";

/// Every leaf action reachable from the toolbox submenus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafAction {
    // Device management
    ListDevices,
    SelectDevice,
    Reboot,
    RebootRecovery,
    RebootBootloader,
    DeviceState,
    BatteryInfo,
    // App management
    ListApps,
    ListSystemApps,
    ListThirdPartyApps,
    InstallApp,
    UninstallApp,
    ClearAppData,
    ForceStopApp,
    AppInfo,
    // File operations
    PushFile,
    PullFile,
    ListFiles,
    Shell,
    CurrentDir,
    CreateDir,
    DeletePath,
    // System information
    SystemProps,
    CpuInfo,
    MemoryInfo,
    StorageInfo,
    NetworkInfo,
    ScreenInfo,
    // Debug tools
    Logcat,
    ClearLogcat,
    BugReport,
    Screenshot,
    ScreenRecord,
    PerformanceMonitor,
    StressTest,
}

impl LeafAction {
    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            LeafAction::ListDevices => "List connected devices",
            LeafAction::SelectDevice => "Select device",
            LeafAction::Reboot => "Reboot device",
            LeafAction::RebootRecovery => "Reboot to recovery",
            LeafAction::RebootBootloader => "Reboot to bootloader",
            LeafAction::DeviceState => "Show device state",
            LeafAction::BatteryInfo => "Show battery info",
            LeafAction::ListApps => "List all apps",
            LeafAction::ListSystemApps => "List system apps",
            LeafAction::ListThirdPartyApps => "List third-party apps",
            LeafAction::InstallApp => "Install app",
            LeafAction::UninstallApp => "Uninstall app",
            LeafAction::ClearAppData => "Clear app data",
            LeafAction::ForceStopApp => "Force stop app",
            LeafAction::AppInfo => "Show app info",
            LeafAction::PushFile => "Push file to device",
            LeafAction::PullFile => "Pull file from device",
            LeafAction::ListFiles => "List device files",
            LeafAction::Shell => "Open shell",
            LeafAction::CurrentDir => "Show current directory",
            LeafAction::CreateDir => "Create directory",
            LeafAction::DeletePath => "Delete file/directory",
            LeafAction::SystemProps => "Show system properties",
            LeafAction::CpuInfo => "Show CPU info",
            LeafAction::MemoryInfo => "Show memory info",
            LeafAction::StorageInfo => "Show storage info",
            LeafAction::NetworkInfo => "Show network info",
            LeafAction::ScreenInfo => "Show screen info",
            LeafAction::Logcat => "View logs",
            LeafAction::ClearLogcat => "Clear logs",
            LeafAction::BugReport => "Bug report",
            LeafAction::Screenshot => "Screenshot",
            LeafAction::ScreenRecord => "Screen recording",
            LeafAction::PerformanceMonitor => "Performance monitor",
            LeafAction::StressTest => "Stress test",
        }
    }
}

/// Run one leaf action to completion
pub async fn run(session: &mut Session, prompt: &mut dyn Prompt, action: LeafAction) {
    log_debug!(MODULE, "Running action: {:?}", action);

    match action {
        LeafAction::ListDevices => device::list_devices(session, prompt).await,
        LeafAction::SelectDevice => device::select_device(session, prompt).await,
        LeafAction::Reboot => {
            run_and_show(session, prompt, "Rebooting device...", "reboot").await
        }
        LeafAction::RebootRecovery => {
            run_and_show(session, prompt, "Rebooting to recovery...", "reboot recovery").await
        }
        LeafAction::RebootBootloader => {
            run_and_show(session, prompt, "Rebooting to bootloader...", "reboot bootloader").await
        }
        LeafAction::DeviceState => device::device_state(session, prompt).await,
        LeafAction::BatteryInfo => {
            run_and_show(session, prompt, "Battery info...", "shell dumpsys battery").await
        }
        LeafAction::ListApps => apps::list_all(session, prompt).await,
        LeafAction::ListSystemApps => {
            apps::list_filtered(session, prompt, "System apps...", "shell pm list packages -s").await
        }
        LeafAction::ListThirdPartyApps => {
            apps::list_filtered(session, prompt, "Third-party apps...", "shell pm list packages -3")
                .await
        }
        LeafAction::InstallApp => apps::install(session, prompt).await,
        LeafAction::UninstallApp => {
            apps::package_command(session, prompt, "Uninstall app", "uninstall").await
        }
        LeafAction::ClearAppData => {
            apps::package_command(session, prompt, "Clear app data", "shell pm clear").await
        }
        LeafAction::ForceStopApp => {
            apps::package_command(session, prompt, "Force stop app", "shell am force-stop").await
        }
        LeafAction::AppInfo => apps::app_info(session, prompt).await,
        LeafAction::PushFile => files::push(session, prompt).await,
        LeafAction::PullFile => files::pull(session, prompt).await,
        LeafAction::ListFiles => files::list(session, prompt).await,
        LeafAction::Shell => files::shell(session, prompt).await,
        LeafAction::CurrentDir => {
            run_and_show(session, prompt, "Current directory", "shell pwd").await
        }
        LeafAction::CreateDir => files::create_dir(session, prompt).await,
        LeafAction::DeletePath => files::delete(session, prompt).await,
        LeafAction::SystemProps => system_info::props(session, prompt).await,
        LeafAction::CpuInfo => {
            run_and_show(session, prompt, "CPU info", "shell cat /proc/cpuinfo").await
        }
        LeafAction::MemoryInfo => {
            run_and_show(session, prompt, "Memory info", "shell cat /proc/meminfo").await
        }
        LeafAction::StorageInfo => {
            run_and_show(session, prompt, "Storage info", "shell df -h").await
        }
        LeafAction::NetworkInfo => {
            run_and_show(session, prompt, "Network info", "shell ifconfig || ip addr").await
        }
        LeafAction::ScreenInfo => system_info::screen(session, prompt).await,
        LeafAction::Logcat => debug::logcat(session, prompt).await,
        LeafAction::ClearLogcat => debug::clear_logcat(session, prompt).await,
        LeafAction::BugReport => debug::bug_report(session, prompt).await,
        LeafAction::Screenshot => debug::screenshot(session, prompt).await,
        LeafAction::ScreenRecord => debug::screen_record(session, prompt).await,
        LeafAction::PerformanceMonitor => debug::performance_monitor(session, prompt).await,
        LeafAction::StressTest => debug::stress_test(session, prompt).await,
    }
}

/// Show a screen, run one scoped command and print its output
async fn run_and_show(session: &Session, prompt: &mut dyn Prompt, title: &str, fragment: &str) {
    show_header(prompt, title);
    let result = session.adb.run(fragment, true).await;
    println!("{}", result);
    wait_for_key(prompt);
}

/// Wrap a host or device path in double quotes for the shell
fn quoted(path: &str) -> String {
    format!("\"{}\"", path)
}

/// Non-empty lines of a command output
fn non_empty_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().filter(|line| !line.is_empty())
}
