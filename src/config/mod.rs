//! Configuration module for daily-limit
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - Settings persistence (rates and default limits)

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::Settings;
