//! Run state and the assembled status report.

use std::fmt;

/// Daemon state for one snapshot, decided once from the PID file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

impl RunState {
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }
}

/// Ordered lines of a status report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    lines: Vec<String>,
}

impl StatusReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append a pre-rendered multi-line block, one entry per line.
    pub fn push_block(&mut self, block: &str) {
        self.lines.extend(block.lines().map(str::to_string));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with newlines.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
