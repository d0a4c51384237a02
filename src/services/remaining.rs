//! Remaining-budget messages
//!
//! The calculators share one accounting core; what differs is how the
//! remaining allowance is turned into text. Each variant implements
//! [`RemainingFormatter`].

use crate::models::{Amount, Currency, CurrencyRates};

/// Cash message when exactly nothing is left
pub const CASH_NONE_LEFT: &str = "Денег нет, держись";

/// Cash message prefix when money is left
pub const CASH_LEFT: &str = "На сегодня осталось";

/// Cash message prefix when the limit is exceeded
pub const CASH_DEBT: &str = "Денег нет, держись: твой долг -";

/// Calories message when nothing is left
pub const CALORIES_STOP: &str = "Хватит есть!";

/// Renders the remaining daily allowance as a message
pub trait RemainingFormatter {
    fn remained_message(&self, today_left: Amount) -> String;
}

/// Cash message in a chosen currency
#[derive(Debug, Clone, Copy)]
pub struct CashMessage {
    pub currency: Currency,
    pub rates: CurrencyRates,
}

impl CashMessage {
    pub fn new(currency: Currency, rates: CurrencyRates) -> Self {
        Self { currency, rates }
    }
}

impl RemainingFormatter for CashMessage {
    /// A zero balance renders as the bare "no money" text with no amount.
    fn remained_message(&self, today_left: Amount) -> String {
        let mut msg = if today_left.is_zero() {
            CASH_NONE_LEFT.to_string()
        } else if today_left.is_positive() {
            CASH_LEFT.to_string()
        } else {
            CASH_DEBT.to_string()
        };

        let left = today_left.abs();
        if !left.is_zero() {
            let money = left / self.rates.rate(self.currency);
            msg.push_str(&format!(" {:.2} {}", money.value(), self.currency.label()));
        }

        msg
    }
}

/// Calories message
#[derive(Debug, Clone, Copy, Default)]
pub struct CaloriesMessage;

impl RemainingFormatter for CaloriesMessage {
    fn remained_message(&self, calories_left: Amount) -> String {
        if calories_left.value() <= 0.0 {
            return CALORIES_STOP.to_string();
        }

        format!(
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {} кКал",
            calories_left
        )
    }
}
