//! Menu text and selection parsing for the console loop.

use std::io::{self, Write};

const MENU_LINES: [&str; 5] = [
    "Menu:",
    "1. Add coin",
    "2. List coins",
    "3. Delete coin",
    "4. Exit",
];
pub const SELECTION_PROMPT: &str = "Select an option: ";

/// Menu option chosen in one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Add,
    List,
    Delete,
    Exit,
}

impl Selection {
    /// Maps a raw input line to a selection; surrounding whitespace is ignored.
    ///
    /// Returns `None` for anything other than `1`..`4`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Writes the menu followed by the selection prompt (no trailing newline).
pub fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    for line in MENU_LINES {
        writeln!(output, "{line}")?;
    }
    write!(output, "{SELECTION_PROMPT}")?;
    output.flush()
}
