//! Interactive session state machine.
//!
//! Drives the prompt/response loop: acquire a target path, offer to
//! create a missing file, then dispatch menu selections to `fileops`
//! until the user exits. This is the only layer that turns [`FileError`]
//! values into user-visible messages; no failure here terminates the
//! process.

use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::error::FileError;
use crate::fileops;
use crate::ExitReason;

/// Session states. Each `step_*` method consumes the current state and
/// returns the next one; the path chosen in `AwaitingPath` is carried
/// unchanged for the rest of the session.
#[derive(Debug)]
enum SessionState {
    /// Waiting for the target path on console input.
    AwaitingPath,
    /// Target does not exist; waiting for the create decision.
    AwaitingCreateDecision { path: PathBuf },
    /// Dispatching menu selections against the target.
    MenuLoop { path: PathBuf },
    /// No further input is read.
    Terminated(ExitReason),
}

/// Interactive editor session over a console.
pub struct Session<C: Console> {
    console: C,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Access the console, mainly to inspect captured output in tests.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run the session to completion and report why it ended.
    pub fn run(&mut self) -> ExitReason {
        let mut state = SessionState::AwaitingPath;
        loop {
            state = match state {
                SessionState::AwaitingPath => self.step_path(),
                SessionState::AwaitingCreateDecision { path } => self.step_create(path),
                SessionState::MenuLoop { path } => self.step_menu(path),
                SessionState::Terminated(reason) => return reason,
            };
        }
    }

    /// `AwaitingPath`: read the path, then branch on existence.
    fn step_path(&mut self) -> SessionState {
        self.console.write_line("Enter the file path:");
        let Some(line) = self.console.read_line() else {
            return SessionState::Terminated(ExitReason::InputClosed);
        };
        let path = PathBuf::from(line.trim());
        if fileops::exists(&path) {
            SessionState::MenuLoop { path }
        } else {
            self.console.write_line("The file does not exist.");
            SessionState::AwaitingCreateDecision { path }
        }
    }

    /// `AwaitingCreateDecision`: yes creates the file, anything else
    /// cancels the session.
    fn step_create(&mut self, path: PathBuf) -> SessionState {
        self.console.write_line("Create it? (yes/no):");
        let Some(answer) = self.console.read_line() else {
            return SessionState::Terminated(ExitReason::InputClosed);
        };
        if !is_affirmative(answer.trim()) {
            self.console.write_line("Operation cancelled.");
            return SessionState::Terminated(ExitReason::Cancelled);
        }
        match fileops::create(&path) {
            Ok(()) => {
                self.console
                    .write_line(&format!("File {} created.", path.display()));
                SessionState::MenuLoop { path }
            }
            Err(FileError::AlreadyExists(_)) => {
                // The file appeared after the existence check; it is
                // usable, so the menu proceeds against it.
                self.console.write_line("The file already exists.");
                SessionState::MenuLoop { path }
            }
            Err(e) => {
                self.console
                    .write_line(&format!("Could not create the file: {}", e));
                SessionState::Terminated(ExitReason::CreateFailed)
            }
        }
    }

    /// `MenuLoop`: one prompt/dispatch round. Every outcome except exit
    /// and closed input loops back here.
    fn step_menu(&mut self, path: PathBuf) -> SessionState {
        self.console.write_line("");
        self.console.write_line("Select an option:");
        self.console.write_line("1. Append a line to the file");
        self.console.write_line("2. Show the file contents");
        self.console.write_line("3. Show a specific line");
        self.console.write_line("4. Exit");
        let Some(choice) = self.console.read_line() else {
            return SessionState::Terminated(ExitReason::InputClosed);
        };
        let outcome = match choice.trim() {
            "1" => self.menu_append(&path),
            "2" => {
                self.menu_show_all(&path);
                Some(())
            }
            "3" => self.menu_show_line(&path),
            "4" => {
                self.console.write_line("Goodbye.");
                return SessionState::Terminated(ExitReason::Quit);
            }
            _ => {
                self.console.write_line("Invalid option, try again.");
                Some(())
            }
        };
        match outcome {
            Some(()) => SessionState::MenuLoop { path },
            None => SessionState::Terminated(ExitReason::InputClosed),
        }
    }

    /// Returns None when console input closed mid-prompt.
    fn menu_append(&mut self, path: &Path) -> Option<()> {
        self.console.write_line("Enter the text to append:");
        let text = self.console.read_line()?;
        match fileops::append_line(path, &text) {
            Ok(()) => self.console.write_line("Text appended to the file."),
            Err(e) => self
                .console
                .write_line(&format!("Could not append to the file: {}", e)),
        }
        Some(())
    }

    fn menu_show_all(&mut self, path: &Path) {
        match fileops::read_all(path) {
            Ok(lines) => {
                for line in &lines {
                    self.console.write_line(line);
                }
            }
            Err(e) => self
                .console
                .write_line(&format!("Could not read the file: {}", e)),
        }
    }

    /// Returns None when console input closed mid-prompt.
    fn menu_show_line(&mut self, path: &Path) -> Option<()> {
        self.console.write_line("Enter the line number:");
        let input = self.console.read_line()?;
        let Ok(n) = input.trim().parse::<i64>() else {
            self.console.write_line("That is not a valid line number.");
            return Some(());
        };
        match fileops::read_line(path, n) {
            Ok(Some(line)) => self.console.write_line(&line),
            Ok(None) => self.console.write_line(&format!("Line {} not found.", n)),
            Err(e) => self
                .console
                .write_line(&format!("Could not read the line: {}", e)),
        }
        Some(())
    }
}

/// Case-insensitive match against the affirmative tokens.
fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
