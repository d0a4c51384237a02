//! CLI command for the cash calculator

use std::io::Write;

use clap::Args;

use super::records::RecordArgs;
use crate::config::Settings;
use crate::display::FixedWidthFormatter;
use crate::error::TrackerResult;
use crate::models::{Amount, Currency};
use crate::services::CashCalculator;

/// Arguments for `daily-limit cash`
#[derive(Args, Debug)]
pub struct CashArgs {
    /// Daily limit in roubles (defaults to the configured cash limit)
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Currency to report in: rub, usd or eur
    #[arg(short, long, default_value = "rub")]
    pub currency: String,

    #[command(flatten)]
    pub records: RecordArgs,
}

/// Handle the cash command, writing the report to `out`
pub fn handle_cash_command<W: Write>(
    settings: &Settings,
    args: CashArgs,
    out: &mut W,
) -> TrackerResult<()> {
    // Reject an unknown currency before doing any work.
    let currency = Currency::from_code(&args.currency)?;

    let limit = match &args.limit {
        Some(text) => Amount::parse(text)?,
        None => settings.cash_limit,
    };

    let clock = args.records.clock()?;
    let records = args.records.load(&clock)?;

    let mut cash = CashCalculator::with_clock(limit, clock).with_rates(settings.rates());
    for record in records {
        cash.add_record(record);
    }

    if args.records.show {
        cash.calculator()
            .write_all_records(out, &FixedWidthFormatter)?;
    }

    writeln!(out, "{}", cash.today_cash_remained(currency))?;
    writeln!(out, "За неделю: {}", cash.calculator().get_week_stats())?;

    Ok(())
}
