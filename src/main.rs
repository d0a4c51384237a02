use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daily_limit::cli::{handle_calories_command, handle_cash_command, CaloriesArgs, CashArgs};
use daily_limit::config::{ConfigPaths, Settings};

#[derive(Parser)]
#[command(
    name = "daily-limit",
    version,
    about = "Daily budget calculator for money and calories",
    long_about = "Tracks dated records against a daily limit and reports what is \
                  left for today, in roubles, dollars, euros or calories, along \
                  with the total for the trailing week."
)]
struct Cli {
    /// Settings file (defaults to config.json in the config directory)
    #[arg(long, global = true, env = "DAILY_LIMIT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report today's remaining money
    Cash(CashArgs),

    /// Report today's remaining calories
    #[command(alias = "cal")]
    Calories(CaloriesArgs),

    /// Show the settings file location and values
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings_path = match cli.config {
        Some(path) => path,
        None => ConfigPaths::new()?.settings_file(),
    };
    let settings = Settings::load_or_default(&settings_path)?;

    let mut stdout = io::stdout();

    match cli.command {
        Some(Commands::Cash(args)) => {
            handle_cash_command(&settings, args, &mut stdout)?;
        }
        Some(Commands::Calories(args)) => {
            handle_calories_command(&settings, args, &mut stdout)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&settings_path)?;
                println!("Settings written to: {}", settings_path.display());
                println!();
            }
            println!("daily-limit Configuration");
            println!("=========================");
            println!("Settings file: {}", settings_path.display());
            println!();
            println!("Settings:");
            println!("  USD rate:       {}", settings.usd_rate);
            println!("  EUR rate:       {}", settings.eur_rate);
            println!("  Cash limit:     {}", settings.cash_limit);
            println!("  Calories limit: {}", settings.calories_limit);
        }
        None => {
            println!("daily-limit - Daily budget calculator for money and calories");
            println!();
            println!("Run 'daily-limit --help' for usage information.");
        }
    }

    Ok(())
}
