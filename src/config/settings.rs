//! User settings for daily-limit
//!
//! Preferences only: conversion rates and default daily limits. Records are
//! never written here.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::models::{Amount, CurrencyRates, EURO_RATE, USD_RATE};

/// User settings for daily-limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Roubles per US dollar
    #[serde(default = "default_usd_rate")]
    pub usd_rate: f64,

    /// Roubles per euro
    #[serde(default = "default_eur_rate")]
    pub eur_rate: f64,

    /// Daily cash limit used when none is given on the command line
    #[serde(default = "default_cash_limit")]
    pub cash_limit: Amount,

    /// Daily calorie limit used when none is given on the command line
    #[serde(default = "default_calories_limit")]
    pub calories_limit: Amount,
}

fn default_usd_rate() -> f64 {
    USD_RATE
}

fn default_eur_rate() -> f64 {
    EURO_RATE
}

fn default_cash_limit() -> Amount {
    Amount::new(1000.0)
}

fn default_calories_limit() -> Amount {
    Amount::new(2000.0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            usd_rate: default_usd_rate(),
            eur_rate: default_eur_rate(),
            cash_limit: default_cash_limit(),
            calories_limit: default_calories_limit(),
        }
    }
}

impl Settings {
    /// Conversion rates for the cash calculator
    pub fn rates(&self) -> CurrencyRates {
        CurrencyRates::new(self.usd_rate, self.eur_rate)
    }

    /// Load settings from `path`, or fall back to defaults if it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, TrackerError> {
        if !path.exists() {
            warn!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), TrackerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| TrackerError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Rates must be positive for conversion to make sense
    pub fn validate(&self) -> Result<(), TrackerError> {
        for (name, rate) in [("usd_rate", self.usd_rate), ("eur_rate", self.eur_rate)] {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(TrackerError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }
}
