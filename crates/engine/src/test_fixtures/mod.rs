//! Test fixtures loader for JSON fixture files.
//!
//! Fixtures live in the crate's `test_data/` directory.

use std::path::PathBuf;

/// Directory holding the sheet fixtures.
pub fn sheets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join("sheets")
}

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture(path: &str) -> serde_json::Value {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// Level 7 sheet with an in-sync XP threshold and damaged armor.
pub fn ragna() -> serde_json::Value {
    load_fixture("sheets/ragna.json")
}
