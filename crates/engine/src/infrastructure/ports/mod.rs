//! Port traits for infrastructure boundaries.
//!
//! The derivation engine itself needs no ports. The only one here is where raw
//! sheets come from, so the host can swap files for a database without touching
//! the use cases.

mod error;

pub use error::RepoError;

use async_trait::async_trait;

/// Source of raw, untyped character sheets.
///
/// Implementations return the stored JSON as-is; shape checking belongs to the
/// domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn load(&self, reference: &str) -> Result<serde_json::Value, RepoError>;
}
