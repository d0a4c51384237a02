//! Calories calculator

use crate::clock::{Clock, SystemClock};
use crate::models::{Amount, Record};
use crate::services::calculator::Calculator;
use crate::services::remaining::{CaloriesMessage, RemainingFormatter};

/// Daily calorie budget
#[derive(Debug, Clone)]
pub struct CaloriesCalculator<C: Clock = SystemClock> {
    calculator: Calculator<C>,
}

impl CaloriesCalculator<SystemClock> {
    pub fn new(limit: impl Into<Amount>) -> Self {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> CaloriesCalculator<C> {
    pub fn with_clock(limit: impl Into<Amount>, clock: C) -> Self {
        Self {
            calculator: Calculator::with_clock(limit, clock),
        }
    }

    pub fn calculator(&self) -> &Calculator<C> {
        &self.calculator
    }

    pub fn add_record(&mut self, record: Record) {
        self.calculator.add_record(record);
    }

    /// How many more calories may be eaten today
    pub fn get_calories_remained(&self) -> String {
        CaloriesMessage.remained_message(self.calculator.get_today_left())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::services::remaining::CALORIES_STOP;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn calories(limit: i32) -> CaloriesCalculator<FixedClock> {
        CaloriesCalculator::with_clock(limit, FixedClock::new(today()))
    }

    #[test]
    fn test_calories_left() {
        let mut calc = calories(2000);
        calc.add_record(Record::new(1186, "cake", today()));
        calc.add_record(Record::new(84, "yogurt", NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()));

        assert_eq!(
            calc.get_calories_remained(),
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 814 кКал"
        );
    }

    #[test]
    fn test_stop_when_exactly_at_limit() {
        let mut calc = calories(1000);
        calc.add_record(Record::new(1000, "everything", today()));
        assert_eq!(calc.get_calories_remained(), CALORIES_STOP);
    }

    #[test]
    fn test_stop_when_over_limit() {
        let mut calc = calories(1000);
        calc.add_record(Record::new(600, "breakfast", today()));
        calc.add_record(Record::new(600, "lunch", today()));
        assert_eq!(calc.get_calories_remained(), CALORIES_STOP);
        assert_eq!(calc.calculator().get_today_left(), Amount::new(-200.0));
    }

    #[test]
    fn test_empty_calculator_reports_full_limit() {
        let calc = calories(1500);
        assert!(calc.get_calories_remained().ends_with("не более 1500 кКал"));
    }
}
