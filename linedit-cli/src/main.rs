//! linedit - edit a text file through a console menu.
//!
//! Asks for a target file path on standard input, offers to create the
//! file if it is missing, then loops over a four-option menu: append a
//! line, show the whole file, show a specific line, or exit.

use std::io::{self, BufRead, Write};

use clap::Parser;

use linedit_core::{Console, Session};

/// Line-oriented text file editor
#[derive(Parser, Debug)]
#[command(name = "linedit")]
#[command(version)]
#[command(about = "Edit a text file through a console menu")]
struct Args {}

/// Console over process standard input/output.
struct StdConsole {
    stdin: io::Stdin,
}

impl StdConsole {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, text: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(text.as_bytes());
        let _ = handle.write_all(b"\n");
        let _ = handle.flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }
}

fn main() {
    let _args = Args::parse();

    let mut session = Session::new(StdConsole::new());
    // Every failure surfaces as a console message; the process always
    // exits 0.
    session.run();
}
