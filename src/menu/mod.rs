//! Menu module
//!
//! Table-driven state machine over the fixed screens. Each tick renders the
//! current screen, blocks for one key and applies the bound action. The
//! machine ends when a firmware becomes active or the operator exits.

mod local;
mod screens;
mod wizard;

use crate::actions::{self, LeafAction};
use crate::session::Session;
use crate::terminal::{show_header, Prompt};
use crate::{log_debug, log_info};

use screens::{binding, definition, ScreenDef};

const MODULE: &str = "menu";

/// Fixed menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    AdbToolbox,
    DeviceManagement,
    AppManagement,
    FileOperations,
    SystemInfo,
    DebugTools,
}

/// What a key press does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Goto(Screen),
    Leaf(LeafAction),
    AcquireFirmware,
    LocalFirmware,
    Exit,
}

/// How the state machine ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session holds an active firmware ready to flash
    FirmwareReady,
    Exit,
}

fn render(prompt: &mut dyn Prompt, def: &ScreenDef) {
    show_header(prompt, def.title);
    for b in def.bindings {
        println!("{}. {}", b.key, b.label);
    }
    println!("ESC. {}", def.escape_label);
}

/// Block until a key with a binding on `screen` is pressed
fn next_action(prompt: &mut dyn Prompt, screen: Screen) -> Action {
    loop {
        if let Some(action) = binding(screen, prompt.read_key()) {
            return action;
        }
    }
}

/// Drive the menus until a firmware is ready or the operator exits
pub async fn run(session: &mut Session, prompt: &mut dyn Prompt) -> Outcome {
    let mut screen = Screen::Main;

    loop {
        render(prompt, definition(screen));
        let action = next_action(prompt, screen);
        log_debug!(MODULE, "{:?}: {:?}", screen, action);

        match action {
            Action::Goto(next) => screen = next,
            Action::Leaf(leaf) => actions::run(session, prompt, leaf).await,
            Action::AcquireFirmware => {
                if wizard::acquire_firmware(session, prompt).await {
                    return Outcome::FirmwareReady;
                }
                screen = Screen::Main;
            }
            Action::LocalFirmware => {
                if local::select_local_firmware(session, prompt).await {
                    return Outcome::FirmwareReady;
                }
                screen = Screen::Main;
            }
            Action::Exit => {
                log_info!(MODULE, "Operator exit");
                return Outcome::Exit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use super::*;
    use crate::adb::AdbClient;
    use crate::firmware::FirmwareSource;
    use crate::terminal::testing::ScriptedPrompt;
    use crate::terminal::Key;
    use crate::utils::{Pacing, MB};

    fn session(root: &Path) -> Session {
        Session::new(
            AdbClient::new("adb", Duration::from_secs(1)),
            root.to_path_buf(),
            Pacing::instant(),
        )
    }

    #[tokio::test]
    async fn test_escape_at_root_exits() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompt = ScriptedPrompt::new(&[Key::Escape], &[]);
        assert_eq!(run(&mut session(dir.path()), &mut prompt).await, Outcome::Exit);
        assert_eq!(prompt.clears, 1);
    }

    #[tokio::test]
    async fn test_toolbox_back_then_exit() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompt = ScriptedPrompt::new(&[Key::Char('3'), Key::Char('6'), Key::Escape], &[]);
        assert_eq!(run(&mut session(dir.path()), &mut prompt).await, Outcome::Exit);
        // main, toolbox, main
        assert_eq!(prompt.clears, 3);
    }

    #[tokio::test]
    async fn test_submenu_escape_returns_to_toolbox() {
        let dir = tempfile::tempdir().unwrap();
        // main -> toolbox -> debug tools -> (Esc) toolbox -> (Esc) main -> (Esc) exit
        let mut prompt = ScriptedPrompt::new(
            &[Key::Char('3'), Key::Char('5'), Key::Escape, Key::Escape, Key::Escape],
            &[],
        );
        assert_eq!(run(&mut session(dir.path()), &mut prompt).await, Outcome::Exit);
        assert_eq!(prompt.clears, 5);
    }

    #[tokio::test]
    async fn test_unbound_keys_do_not_redraw() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompt = ScriptedPrompt::new(
            &[Key::Char('x'), Key::Enter, Key::Other, Key::Char('0'), Key::Escape],
            &[],
        );
        assert_eq!(run(&mut session(dir.path()), &mut prompt).await, Outcome::Exit);
        assert_eq!(prompt.clears, 1);
    }

    #[tokio::test]
    async fn test_wizard_escape_returns_to_main() {
        let dir = tempfile::tempdir().unwrap();
        // 1 opens the wizard, Esc abandons it, Esc at main exits
        let mut prompt = ScriptedPrompt::new(&[Key::Char('1'), Key::Escape, Key::Escape], &[]);
        let mut session = session(dir.path());
        assert_eq!(run(&mut session, &mut prompt).await, Outcome::Exit);
        assert!(session.firmware.is_none());
    }

    #[tokio::test]
    async fn test_wizard_download_ends_with_firmware() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        // acquire, pixel, Pixel 8, first version, stable, then dismiss summary
        let mut prompt = ScriptedPrompt::chars("12211 ", &[]);

        assert_eq!(run(&mut session, &mut prompt).await, Outcome::FirmwareReady);

        let fw = session.firmware.unwrap();
        assert_eq!(fw.name, "shiba-stable-factory.zip");
        assert_eq!(fw.device, "Pixel 8");
        assert_eq!(fw.version.as_deref(), Some("Android 14 QPR3"));
        assert_eq!(fw.size_bytes, 2700 * MB);
        assert_eq!(fw.source, FirmwareSource::OfficialMirror);
        assert_eq!(fw.path, dir.path().join("pixel").join("Pixel8").join(&fw.name));
    }

    #[tokio::test]
    async fn test_missing_catalog_entry_returns_to_main() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        // samsung has no recorded firmware at all
        let mut prompt = ScriptedPrompt::chars("13111", &[]);

        assert_eq!(run(&mut session, &mut prompt).await, Outcome::Exit);
        assert!(session.firmware.is_none());
    }

    #[tokio::test]
    async fn test_local_selection_ends_with_firmware() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        let device = root.join("oneplus").join("OnePlus_12");
        std::fs::create_dir_all(&device).unwrap();
        std::fs::write(device.join("op12.bin"), b"bin").unwrap();

        let mut session = session(&root);
        let mut prompt = ScriptedPrompt::chars("2 ", &["1"]);

        assert_eq!(run(&mut session, &mut prompt).await, Outcome::FirmwareReady);
        let fw = session.firmware.unwrap();
        assert_eq!(fw.system, "oneplus");
        assert_eq!(fw.device, "OnePlus 12");
    }
}
