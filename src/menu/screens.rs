//! Screen table
//!
//! Every fixed menu screen as data: its title, numbered bindings and the
//! target of Escape. The state machine never matches on keys directly.

use super::{Action, Screen};
use crate::actions::LeafAction;
use crate::terminal::Key;

/// One numbered option
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub key: char,
    pub label: &'static str,
    pub action: Action,
}

/// Static description of a menu screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenDef {
    pub title: &'static str,
    pub bindings: &'static [Binding],
    pub escape: Action,
    pub escape_label: &'static str,
}

const fn leaf(key: char, action: LeafAction) -> Binding {
    Binding {
        key,
        label: action.label(),
        action: Action::Leaf(action),
    }
}

const fn goto(key: char, label: &'static str, screen: Screen) -> Binding {
    Binding {
        key,
        label,
        action: Action::Goto(screen),
    }
}

const BACK_TO_TOOLBOX: &str = "Back to toolbox";

const MAIN: ScreenDef = ScreenDef {
    title: "Firmware menu:",
    bindings: &[
        Binding {
            key: '1',
            label: "Acquire new firmware",
            action: Action::AcquireFirmware,
        },
        Binding {
            key: '2',
            label: "Use local firmware",
            action: Action::LocalFirmware,
        },
        goto('3', "ADB toolbox", Screen::AdbToolbox),
    ],
    escape: Action::Exit,
    escape_label: "Exit",
};

const ADB_TOOLBOX: ScreenDef = ScreenDef {
    title: "ADB toolbox:",
    bindings: &[
        goto('1', "Device management", Screen::DeviceManagement),
        goto('2', "App management", Screen::AppManagement),
        goto('3', "File operations", Screen::FileOperations),
        goto('4', "System information", Screen::SystemInfo),
        goto('5', "Debug tools", Screen::DebugTools),
        goto('6', "Back to main menu", Screen::Main),
    ],
    escape: Action::Goto(Screen::Main),
    escape_label: "Back",
};

const DEVICE_MANAGEMENT: ScreenDef = ScreenDef {
    title: "Device management:",
    bindings: &[
        leaf('1', LeafAction::ListDevices),
        leaf('2', LeafAction::SelectDevice),
        leaf('3', LeafAction::Reboot),
        leaf('4', LeafAction::RebootRecovery),
        leaf('5', LeafAction::RebootBootloader),
        leaf('6', LeafAction::DeviceState),
        leaf('7', LeafAction::BatteryInfo),
        goto('8', BACK_TO_TOOLBOX, Screen::AdbToolbox),
    ],
    escape: Action::Goto(Screen::AdbToolbox),
    escape_label: "Back",
};

const APP_MANAGEMENT: ScreenDef = ScreenDef {
    title: "App management:",
    bindings: &[
        leaf('1', LeafAction::ListApps),
        leaf('2', LeafAction::ListSystemApps),
        leaf('3', LeafAction::ListThirdPartyApps),
        leaf('4', LeafAction::InstallApp),
        leaf('5', LeafAction::UninstallApp),
        leaf('6', LeafAction::ClearAppData),
        leaf('7', LeafAction::ForceStopApp),
        leaf('8', LeafAction::AppInfo),
        goto('9', BACK_TO_TOOLBOX, Screen::AdbToolbox),
    ],
    escape: Action::Goto(Screen::AdbToolbox),
    escape_label: "Back",
};

const FILE_OPERATIONS: ScreenDef = ScreenDef {
    title: "File operations:",
    bindings: &[
        leaf('1', LeafAction::PushFile),
        leaf('2', LeafAction::PullFile),
        leaf('3', LeafAction::ListFiles),
        leaf('4', LeafAction::Shell),
        leaf('5', LeafAction::CurrentDir),
        leaf('6', LeafAction::CreateDir),
        leaf('7', LeafAction::DeletePath),
        goto('8', BACK_TO_TOOLBOX, Screen::AdbToolbox),
    ],
    escape: Action::Goto(Screen::AdbToolbox),
    escape_label: "Back",
};

const SYSTEM_INFO: ScreenDef = ScreenDef {
    title: "System information:",
    bindings: &[
        leaf('1', LeafAction::SystemProps),
        leaf('2', LeafAction::CpuInfo),
        leaf('3', LeafAction::MemoryInfo),
        leaf('4', LeafAction::StorageInfo),
        leaf('5', LeafAction::NetworkInfo),
        leaf('6', LeafAction::ScreenInfo),
        leaf('7', LeafAction::BatteryInfo),
        goto('8', BACK_TO_TOOLBOX, Screen::AdbToolbox),
    ],
    escape: Action::Goto(Screen::AdbToolbox),
    escape_label: "Back",
};

const DEBUG_TOOLS: ScreenDef = ScreenDef {
    title: "Debug tools:",
    bindings: &[
        leaf('1', LeafAction::Logcat),
        leaf('2', LeafAction::ClearLogcat),
        leaf('3', LeafAction::BugReport),
        leaf('4', LeafAction::Screenshot),
        leaf('5', LeafAction::ScreenRecord),
        leaf('6', LeafAction::PerformanceMonitor),
        leaf('7', LeafAction::StressTest),
        goto('8', BACK_TO_TOOLBOX, Screen::AdbToolbox),
    ],
    escape: Action::Goto(Screen::AdbToolbox),
    escape_label: "Back",
};

/// Table entry for a screen
pub fn definition(screen: Screen) -> &'static ScreenDef {
    match screen {
        Screen::Main => &MAIN,
        Screen::AdbToolbox => &ADB_TOOLBOX,
        Screen::DeviceManagement => &DEVICE_MANAGEMENT,
        Screen::AppManagement => &APP_MANAGEMENT,
        Screen::FileOperations => &FILE_OPERATIONS,
        Screen::SystemInfo => &SYSTEM_INFO,
        Screen::DebugTools => &DEBUG_TOOLS,
    }
}

/// Action bound to `key` on `screen`; unbound keys yield None
pub fn binding(screen: Screen, key: Key) -> Option<Action> {
    let def = definition(screen);
    match key {
        Key::Escape => Some(def.escape),
        Key::Char(c) => def.bindings.iter().find(|b| b.key == c).map(|b| b.action),
        Key::Enter | Key::Other => None,
    }
}
