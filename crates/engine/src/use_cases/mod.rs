//! User story orchestration.

pub mod character_sheet;
