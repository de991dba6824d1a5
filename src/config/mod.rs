//! Configuration module for famfin
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FamfinPaths;
pub use settings::Settings;
