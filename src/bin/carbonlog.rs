//! carbonlog: log activity emissions and report per-category totals.

use std::path::PathBuf;
use std::process::ExitCode;

use carbonlog::{
    config::TrackerConfig,
    factors::FactorTable,
    form::{self, Submission},
    ledger::sqlite::SqliteLedger,
    tracker::{Tracker, TrackerError},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carbonlog")]
#[command(
    about = "Convert activity amounts to CO2 emissions and keep a running ledger",
    long_about = None
)]
struct Cli {
    /// SQLite database path (overrides CARBONLOG_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate an emission and append it to the ledger
    Log {
        /// Category, e.g. transport
        category: String,
        /// Activity within the category, e.g. Car
        activity: String,
        /// Quantity in the activity's unit (km, kWh, kg)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show total emissions per category
    Totals {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every logged record
    History {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List categories, or the activities and factors of one category
    Factors {
        /// Category to expand
        category: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Input and lookup failures exit with 2; storage failures come back as `Err`.
fn run(cli: Cli) -> Result<ExitCode, TrackerError> {
    let cfg = TrackerConfig::from_env().with_db_override(cli.db);
    let open = || Tracker::new(SqliteLedger::new(&cfg.db_path));

    match cli.command {
        Commands::Log {
            category,
            activity,
            amount,
        } => {
            let submission = match Submission::parse(&category, &activity, &amount) {
                Ok(s) => s,
                Err(err) => {
                    eprintln!("Input Error: {}", err.user_message());
                    return Ok(ExitCode::from(2));
                }
            };
            let mut tracker = open()?;
            match tracker.calculate_and_log(
                &submission.category,
                &submission.activity,
                submission.amount,
            ) {
                Ok(logged) => {
                    println!("{}", form::format_emission(logged.emission));
                    Ok(ExitCode::SUCCESS)
                }
                Err(TrackerError::Calc(err)) => {
                    log::debug!("lookup failed: {err}");
                    eprintln!("Calculation Error: {}", form::NOT_FOUND_MESSAGE);
                    Ok(ExitCode::from(2))
                }
                Err(err) => Err(err),
            }
        }
        Commands::Totals { json } => {
            let totals = open()?.totals()?;
            if json {
                return Ok(print_json(&totals));
            }
            println!("{}", form::format_totals(&totals).trim_end());
            Ok(ExitCode::SUCCESS)
        }
        Commands::History { json } => {
            let records = open()?.history()?;
            if json {
                return Ok(print_json(&records));
            }
            for rec in &records {
                println!(
                    "#{:<5} {:<12} {:<12} {:>10.2} -> {:.2} kg CO₂",
                    rec.id, rec.category, rec.activity, rec.amount, rec.emission
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Factors { category } => {
            Ok(print_factors(FactorTable::standard(), category.as_deref()))
        }
    }
}

fn print_factors(table: &FactorTable, category: Option<&str>) -> ExitCode {
    let Some(category) = category else {
        for c in table.categories() {
            println!("{c}");
        }
        return ExitCode::SUCCESS;
    };

    let Some(activities) = table.activities(category) else {
        eprintln!("Unknown category: {category}");
        return ExitCode::from(2);
    };
    for activity in activities {
        if let Some(factor) = table.factor(category, activity) {
            println!("{activity}: {factor} kg CO₂/unit");
        }
    }
    ExitCode::SUCCESS
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
