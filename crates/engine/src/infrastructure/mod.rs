//! External dependency implementations (ports + adapters).

pub mod config;
pub mod file_source;
pub mod ports;
