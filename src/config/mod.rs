//! Configuration module for streamkeep
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::StreamkeepPaths;
pub use settings::Settings;
