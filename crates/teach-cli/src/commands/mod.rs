pub mod classify;
pub mod explain;
pub mod mcp;
pub mod preferences;

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use teach_classify::language_from_extension;

/// Inclusive, 1-indexed line range parsed from `START-END`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for LineRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || format!("invalid line range '{}': expected START-END, e.g. 10-20", s);

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start: usize = start.trim().parse().map_err(|_| invalid())?;
        let end: usize = end.trim().parse().map_err(|_| invalid())?;
        if start == 0 || end < start {
            return Err(invalid());
        }

        Ok(Self { start, end })
    }
}

impl LineRange {
    /// Lines in range; an end past EOF is clamped
    pub fn apply(&self, content: &str) -> String {
        content
            .split('\n')
            .skip(self.start - 1)
            .take(self.end - self.start + 1)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Read `file`, or all of stdin when no file is given
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file '{}'", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Language implied by a file's extension
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(language_from_extension)
}
