//! Terminal input and screen helpers
//!
//! All keyboard and line input goes through the [`Prompt`] trait so the menu
//! state machine can be driven by a script in tests.

use std::io::BufRead;

use console::{style, Term};

use crate::config;
use crate::log_warn;

const MODULE: &str = "terminal";

/// A key press, reduced to what the menus dispatch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Other,
}

impl From<console::Key> for Key {
    fn from(key: console::Key) -> Self {
        match key {
            console::Key::Char(c) => Key::Char(c),
            console::Key::Escape => Key::Escape,
            console::Key::Enter => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// Source of operator input
pub trait Prompt {
    /// Block until one key is pressed
    fn read_key(&mut self) -> Key;

    /// Print `label` and read one line, trimmed
    fn read_line(&mut self, label: &str) -> String;

    /// Clear the visible screen
    fn clear(&mut self);
}

/// Interactive prompt backed by the controlling terminal
///
/// When stdout is not a terminal, keys are read one line at a time from
/// stdin instead.
pub struct ConsolePrompt {
    term: Term,
    attended: bool,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        let term = Term::stdout();
        let attended = term.features().is_attended();
        if !attended {
            log_warn!(MODULE, "No terminal attached, reading keys line by line");
        }
        Self { term, attended }
    }
}

/// Read one key from a line of piped input
///
/// The first character of the line is the key; an empty line is Enter.
/// End of input reads as Escape so the menus unwind to the exit.
fn read_key_from(reader: &mut impl BufRead) -> Key {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Key::Escape,
        Ok(_) => match line.trim().chars().next() {
            None => Key::Enter,
            Some('\x1b') => Key::Escape,
            Some(c) => Key::Char(c),
        },
        Err(e) => {
            log_warn!(MODULE, "Input read failed, treating as Escape: {}", e);
            Key::Escape
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ConsolePrompt {
    fn read_key(&mut self) -> Key {
        if !self.attended {
            return read_key_from(&mut std::io::stdin().lock());
        }
        match self.term.read_key() {
            Ok(key) => key.into(),
            Err(e) => {
                // A closed terminal reads as Escape
                log_warn!(MODULE, "Key read failed, treating as Escape: {}", e);
                Key::Escape
            }
        }
    }

    fn read_line(&mut self, label: &str) -> String {
        if let Err(e) = self.term.write_str(label) {
            log_warn!(MODULE, "Failed to write prompt: {}", e);
        }
        match self.term.read_line() {
            Ok(line) => line.trim().to_string(),
            Err(e) => {
                log_warn!(MODULE, "Line read failed: {}", e);
                String::new()
            }
        }
    }

    fn clear(&mut self) {
        let _ = self.term.clear_screen();
    }
}

/// Print the application banner
pub fn banner() {
    for line in config::app::BANNER {
        println!("{}", line);
    }
}

/// Clear the screen, print the banner and a screen title
pub fn show_header(prompt: &mut dyn Prompt, title: &str) {
    prompt.clear();
    banner();
    println!("\n{}", title);
}

/// Wait for any key before returning to a menu
pub fn wait_for_key(prompt: &mut dyn Prompt) {
    println!("\nPress any key to continue...");
    let _ = prompt.read_key();
}

/// Print an error line in red
pub fn print_error(message: &str) {
    println!("{}", style(message).red());
}

/// Print a success line in green
pub fn print_success(message: &str) {
    println!("{}", style(message).green());
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;

    use super::{Key, Prompt};

    /// Prompt fed from fixed key and line queues
    ///
    /// Once the key queue is empty every read returns Escape, so a script
    /// that runs out always walks the menus back to the exit.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        pub keys: VecDeque<Key>,
        pub lines: VecDeque<String>,
        pub clears: usize,
    }

    impl ScriptedPrompt {
        pub fn new(keys: &[Key], lines: &[&str]) -> Self {
            Self {
                keys: keys.iter().copied().collect(),
                lines: lines.iter().map(|l| l.to_string()).collect(),
                clears: 0,
            }
        }

        /// Script made of character keys only
        pub fn chars(keys: &str, lines: &[&str]) -> Self {
            let keys: Vec<Key> = keys.chars().map(Key::Char).collect();
            Self::new(&keys, lines)
        }
    }

    impl Prompt for ScriptedPrompt {
        fn read_key(&mut self) -> Key {
            self.keys.pop_front().unwrap_or(Key::Escape)
        }

        fn read_line(&mut self, _label: &str) -> String {
            self.lines.pop_front().unwrap_or_default()
        }

        fn clear(&mut self) {
            self.clears += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedPrompt;
    use super::*;

    #[test]
    fn test_console_key_mapping() {
        assert_eq!(Key::from(console::Key::Char('3')), Key::Char('3'));
        assert_eq!(Key::from(console::Key::Escape), Key::Escape);
        assert_eq!(Key::from(console::Key::ArrowUp), Key::Other);
    }

    #[test]
    fn test_piped_keys_end_in_escape() {
        let mut input = std::io::Cursor::new("3\n\nx\n\x1b\n");
        assert_eq!(read_key_from(&mut input), Key::Char('3'));
        assert_eq!(read_key_from(&mut input), Key::Enter);
        assert_eq!(read_key_from(&mut input), Key::Char('x'));
        assert_eq!(read_key_from(&mut input), Key::Escape);
        // exhausted input keeps returning Escape instead of blocking
        assert_eq!(read_key_from(&mut input), Key::Escape);
        assert_eq!(read_key_from(&mut input), Key::Escape);
    }

    #[test]
    fn test_scripted_prompt_runs_out_to_escape() {
        let mut prompt = ScriptedPrompt::chars("1", &["line"]);
        assert_eq!(prompt.read_key(), Key::Char('1'));
        assert_eq!(prompt.read_key(), Key::Escape);
        assert_eq!(prompt.read_line("> "), "line");
        assert_eq!(prompt.read_line("> "), "");
    }
}
