//! RPG Sheet Engine library.
//!
//! Hosts the derivation engine from `rpgsheet-domain` behind a small CLI.
//!
//! ## Structure
//!
//! - `use_cases/` - Load a sheet, then calculate or normalize it
//! - `infrastructure/` - Configuration and sheet sources (ports + adapters)
//! - `cli` - Argument parsing

pub mod cli;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for JSON sheet fixtures.
#[cfg(test)]
pub mod test_fixtures;
