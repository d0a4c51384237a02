//! Currencies accepted by the cash calculator
//!
//! Rates are expressed as units of the base currency (roubles) per one unit
//! of the foreign currency, so converting a base amount means dividing by the
//! rate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Default rouble price of one US dollar
pub const USD_RATE: f64 = 73.31;

/// Default rouble price of one euro
pub const EURO_RATE: f64 = 88.94;

/// A recognized currency code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Base currency
    Rub,
    Usd,
    Eur,
}

impl Currency {
    /// All recognized currencies
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    /// Look up a currency by its lowercase code
    ///
    /// Codes are case-sensitive: only `rub`, `usd` and `eur` are recognized.
    pub fn from_code(code: &str) -> Result<Self, TrackerError> {
        match code {
            "rub" => Ok(Self::Rub),
            "usd" => Ok(Self::Usd),
            "eur" => Ok(Self::Eur),
            other => Err(TrackerError::UnknownCurrency(other.to_string())),
        }
    }

    /// The code accepted by [`Currency::from_code`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rub => "rub",
            Self::Usd => "usd",
            Self::Eur => "eur",
        }
    }

    /// Label appended after a converted amount
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rub => "руб",
            Self::Usd => "USD",
            Self::Eur => "Euro",
        }
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Conversion rates for the foreign currencies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    pub usd: f64,
    pub eur: f64,
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self {
            usd: USD_RATE,
            eur: EURO_RATE,
        }
    }
}

impl CurrencyRates {
    pub fn new(usd: f64, eur: f64) -> Self {
        Self { usd, eur }
    }

    /// Base units per one unit of `currency` (1 for the base currency)
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Rub => 1.0,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("rub").unwrap(), Currency::Rub);
        assert_eq!(Currency::from_code("usd").unwrap(), Currency::Usd);
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let err = Currency::from_code("USD").unwrap_err();
        assert!(err.is_unknown_currency());
        assert!(Currency::from_code("gbp").is_err());
        assert!(Currency::from_code("").is_err());
    }

    #[test]
    fn test_code_round_trip() {
        for currency in Currency::ALL {
            assert_eq!(Currency::from_code(currency.code()).unwrap(), currency);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Currency::Rub.label(), "руб");
        assert_eq!(Currency::Usd.label(), "USD");
        assert_eq!(Currency::Eur.label(), "Euro");
    }

    #[test]
    fn test_default_rates() {
        let rates = CurrencyRates::default();
        assert_eq!(rates.rate(Currency::Rub), 1.0);
        assert_eq!(rates.rate(Currency::Usd), USD_RATE);
        assert_eq!(rates.rate(Currency::Eur), EURO_RATE);
    }
}
