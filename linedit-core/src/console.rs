//! Console I/O abstraction for the interactive session.
//!
//! The `Console` trait provides line-oriented I/O that works identically
//! for both testing (HeadlessConsole) and real terminals.

use std::collections::VecDeque;

/// Console interface for line-oriented prompt/response I/O.
pub trait Console {
    /// Write one line to console output.
    fn write_line(&mut self, text: &str);

    /// Read one line of input. Returns None when input is closed.
    fn read_line(&mut self) -> Option<String>;
}

/// Headless console for testing - captures output, provides queued input.
#[derive(Default)]
pub struct HeadlessConsole {
    output: Vec<String>,
    input: VecDeque<String>,
}

impl HeadlessConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-queued input lines.
    pub fn with_input<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: Vec::new(),
            input: input.into_iter().map(Into::into).collect(),
        }
    }

    /// Queue an input line.
    pub fn queue_line(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    /// Get all output lines.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Get output as a single newline-joined string.
    pub fn output_string(&self) -> String {
        self.output.join("\n")
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl Console for HeadlessConsole {
    fn write_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}
