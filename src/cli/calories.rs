//! CLI command for the calories calculator

use std::io::Write;

use clap::Args;

use super::records::RecordArgs;
use crate::config::Settings;
use crate::display::FixedWidthFormatter;
use crate::error::TrackerResult;
use crate::models::Amount;
use crate::services::CaloriesCalculator;

/// Arguments for `daily-limit calories`
#[derive(Args, Debug)]
pub struct CaloriesArgs {
    /// Daily calorie limit (defaults to the configured calories limit)
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    #[command(flatten)]
    pub records: RecordArgs,
}

/// Handle the calories command, writing the report to `out`
pub fn handle_calories_command<W: Write>(
    settings: &Settings,
    args: CaloriesArgs,
    out: &mut W,
) -> TrackerResult<()> {
    let limit = match &args.limit {
        Some(text) => Amount::parse(text)?,
        None => settings.calories_limit,
    };

    let clock = args.records.clock()?;
    let records = args.records.load(&clock)?;

    let mut calories = CaloriesCalculator::with_clock(limit, clock);
    for record in records {
        calories.add_record(record);
    }

    if args.records.show {
        calories
            .calculator()
            .write_all_records(out, &FixedWidthFormatter)?;
    }

    writeln!(out, "{}", calories.get_calories_remained())?;
    writeln!(out, "За неделю: {}", calories.calculator().get_week_stats())?;

    Ok(())
}
