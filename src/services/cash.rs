//! Cash calculator
//!
//! A [`Calculator`] whose amounts are money in the base currency, reporting
//! what is left for today in any recognized currency.

use crate::clock::{Clock, SystemClock};
use crate::error::TrackerResult;
use crate::models::{Amount, Currency, CurrencyRates, Record};
use crate::services::calculator::Calculator;
use crate::services::remaining::{CashMessage, RemainingFormatter};

/// Daily money budget
#[derive(Debug, Clone)]
pub struct CashCalculator<C: Clock = SystemClock> {
    calculator: Calculator<C>,
    rates: CurrencyRates,
}

impl CashCalculator<SystemClock> {
    /// Create a cash calculator with the default rates and the system clock
    pub fn new(limit: impl Into<Amount>) -> Self {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> CashCalculator<C> {
    pub fn with_clock(limit: impl Into<Amount>, clock: C) -> Self {
        Self {
            calculator: Calculator::with_clock(limit, clock),
            rates: CurrencyRates::default(),
        }
    }

    /// Replace the conversion rates
    pub fn with_rates(mut self, rates: CurrencyRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn rates(&self) -> CurrencyRates {
        self.rates
    }

    pub fn calculator(&self) -> &Calculator<C> {
        &self.calculator
    }

    pub fn add_record(&mut self, record: Record) {
        self.calculator.add_record(record);
    }

    /// Describe today's remaining money (or debt) in `currency`
    ///
    /// `currency` must be one of `rub`, `usd`, `eur`; anything else fails
    /// with [`TrackerError::UnknownCurrency`](crate::error::TrackerError).
    pub fn get_today_cash_remained(&self, currency: &str) -> TrackerResult<String> {
        let currency = Currency::from_code(currency)?;
        Ok(self.today_cash_remained(currency))
    }

    /// Same as [`CashCalculator::get_today_cash_remained`] for an already
    /// parsed currency
    pub fn today_cash_remained(&self, currency: Currency) -> String {
        CashMessage::new(currency, self.rates).remained_message(self.calculator.get_today_left())
    }
}
