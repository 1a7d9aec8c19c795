//! Command-line parsing.

use crate::infrastructure::file_source::STDIN_REFERENCE;

pub const USAGE: &str = "Usage: rpgsheet-engine <command> <sheet>

Commands:
  calculate   Derive every calculated value for a sheet
  normalize   Re-sync nextLevelXp and clamp weapon percentages for storage

<sheet> is a path relative to SHEETS_DIR, an absolute path, or `-` for stdin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Calculate { sheet: String },
    Normalize { sheet: String },
}

impl Command {
    /// Parse arguments, program name excluded.
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut args = args.into_iter();
        let command = args.next();
        let sheet = args.next().unwrap_or_else(|| STDIN_REFERENCE.to_string());
        if let Some(extra) = args.next() {
            anyhow::bail!("Unexpected argument: {extra}\n\n{USAGE}");
        }

        match command.as_deref() {
            Some("calculate") => Ok(Self::Calculate { sheet }),
            Some("normalize") => Ok(Self::Normalize { sheet }),
            Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
            None => anyhow::bail!("{USAGE}"),
        }
    }
}
