//! `roomstatus` CLI — evaluate a room's status from calendar event JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Full display state from events on stdin, evaluated at the current time
//! cat events.json | roomstatus evaluate
//!
//! # Pin the instant and timezone for reproducible output
//! roomstatus evaluate -i events.json --at 1773654300 --timezone UTC --pretty
//!
//! # Today's visible window as text lines
//! roomstatus upcoming -i events.json --at 1773654300
//!
//! # Exit-code gate for scripts: 0 when free, 2 when occupied
//! roomstatus check -i events.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use status_engine::{
    decode_records, resolve_display, CalendarEvent, DisplayConfiguration, TimeFormatter,
};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "roomstatus",
    version,
    about = "Room status evaluation from calendar event data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Inputs shared by every subcommand.
#[derive(Args)]
struct EvalArgs {
    /// Events JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Display configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Evaluation instant as epoch seconds (defaults to the system clock)
    #[arg(long)]
    at: Option<i64>,

    /// IANA timezone of the display
    #[arg(long, default_value = "Europe/Copenhagen")]
    timezone: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full display state as JSON
    Evaluate {
        #[command(flatten)]
        args: EvalArgs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print today's visible events as text lines
    Upcoming {
        #[command(flatten)]
        args: EvalArgs,
    },
    /// Print "free" or "occupied"; exit 0 when free, 2 when occupied
    Check {
        #[command(flatten)]
        args: EvalArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate { args, pretty } => {
            let (events, config, now, formatter) = prepare(&args)?;
            let display = resolve_display(&events, &config, now, &formatter)?;
            let json = if pretty {
                serde_json::to_string_pretty(&display)?
            } else {
                serde_json::to_string(&display)?
            };
            println!("{}", json);
        }
        Commands::Upcoming { args } => {
            let (events, config, now, formatter) = prepare(&args)?;
            let display = resolve_display(&events, &config, now, &formatter)?;
            if display.entries.is_empty() {
                println!("No upcoming events today.");
            } else {
                for entry in &display.entries {
                    println!(
                        "{}  {}",
                        entry.meta,
                        entry.title.as_deref().unwrap_or("(untitled)")
                    );
                }
            }
        }
        Commands::Check { args } => {
            let (events, _, now, formatter) = prepare(&args)?;
            let state = status_engine::evaluate(&events, now, &formatter)?;
            if state.is_free {
                println!("free");
            } else {
                println!("occupied");
                process::exit(2);
            }
        }
    }

    Ok(())
}

/// Resolve the shared inputs: event list, display config, instant, formatter.
fn prepare(args: &EvalArgs) -> Result<(Vec<CalendarEvent>, DisplayConfiguration, i64, TimeFormatter)> {
    let events = load_events(args.input.as_deref())?;
    let config = load_config(args.config.as_deref())?;

    let tz: chrono_tz::Tz = args
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: {}", args.timezone))?;

    // The only place the clock is read; the engine itself never does.
    let now = args.at.unwrap_or_else(|| chrono::Utc::now().timestamp());

    Ok((events, config, now, TimeFormatter::new(tz)))
}

/// Read and leniently decode the event list, reporting dropped records.
fn load_events(path: Option<&str>) -> Result<Vec<CalendarEvent>> {
    let json = read_input(path)?;
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&json).context("Events input is not a JSON array")?;
    let total = records.len();

    let events = decode_records(records);
    if events.len() < total {
        eprintln!(
            "note: dropped {} malformed event record(s)",
            total - events.len()
        );
    }

    Ok(events)
}

fn load_config(path: Option<&str>) -> Result<DisplayConfiguration> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Invalid display configuration: {}", path))
        }
        None => Ok(DisplayConfiguration::default()),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
