//! `slots` CLI: find meeting slots in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve the request in a scheduling document (stdin → stdout)
//! cat day.json | slots query
//!
//! # Read from a file, report which optional attendees were kept
//! slots query -i day.json --explain
//!
//! # Only invite optional attendees if all of them fit
//! slots query -i day.json --strategy all-or-nothing
//!
//! # Free slots of at least 30 minutes shared by alice and bob
//! slots free -i day.json --attendees alice,bob --duration 30
//!
//! # Busy intervals of alice
//! slots busy -i day.json --attendees alice
//! ```
//!
//! Logging goes to stderr. Use `-v` (repeatable) or `RUST_LOG` to raise it.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use slot_engine::validate::validate_events;
use slot_engine::{
    busy_times, find_free_slots, Event, MeetingQuery, Resolution, ScheduleDocument, Strategy,
    TimeRange,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find meeting slots for mandatory and optional attendees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the meeting request of a scheduling document
    Query {
        /// Input document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Override the document's optional-attendee strategy
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
        /// Override the largest optional list searched exhaustively
        #[arg(long)]
        max_optional: Option<usize>,
        /// Also report which optional attendees the slots accommodate
        #[arg(long)]
        explain: bool,
    },
    /// Free slots shared by a group of attendees
    Free {
        /// Input document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated attendee identifiers
        #[arg(long, default_value = "")]
        attendees: String,
        /// Minimum slot length in minutes
        #[arg(long)]
        duration: i32,
    },
    /// Busy intervals of a group of attendees
    Busy {
        /// Input document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated attendee identifiers
        #[arg(long, default_value = "")]
        attendees: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Optimize,
    AllOrNothing,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Optimize => Strategy::Optimize,
            StrategyArg::AllOrNothing => Strategy::AllOrNothing,
        }
    }
}

/// A slot as printed: bounds plus its length.
#[derive(Serialize)]
struct SlotOutput {
    start: i32,
    end: i32,
    duration: i32,
}

impl From<&TimeRange> for SlotOutput {
    fn from(range: &TimeRange) -> Self {
        SlotOutput {
            start: range.start(),
            end: range.end(),
            duration: range.duration(),
        }
    }
}

#[derive(Serialize)]
struct ExplainOutput {
    slots: Vec<SlotOutput>,
    attendees: Vec<String>,
    optional_kept: Vec<String>,
    optional_dropped: Vec<String>,
}

impl From<Resolution> for ExplainOutput {
    fn from(resolution: Resolution) -> Self {
        ExplainOutput {
            slots: slot_output(&resolution.slots),
            attendees: resolution.attendees,
            optional_kept: resolution.optional_kept,
            optional_dropped: resolution.optional_dropped,
        }
    }
}

/// Documents for `free` and `busy` only need events.
#[derive(Deserialize)]
struct EventsDocument {
    #[serde(default)]
    events: Vec<Event>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            strategy,
            max_optional,
            explain,
        } => {
            let json = read_input(input.as_deref())?;
            let mut document =
                ScheduleDocument::from_json(&json).context("Invalid scheduling document")?;
            if let Some(strategy) = strategy {
                document.options.strategy = strategy.into();
            }
            if let Some(limit) = max_optional {
                document.options.max_optional_search = limit;
            }
            debug!(options = ?document.options, "resolved query options");

            let query = MeetingQuery::new(document.options);
            let resolution = query.resolve(&document.events, &document.request);
            info!(
                slots = resolution.slots.len(),
                kept = resolution.optional_kept.len(),
                dropped = resolution.optional_dropped.len(),
                "meeting request resolved"
            );

            let rendered = if explain {
                to_json(&ExplainOutput::from(resolution))?
            } else {
                to_json(&slot_output(&resolution.slots))?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Free {
            input,
            output,
            attendees,
            duration,
        } => {
            if duration <= 0 {
                anyhow::bail!("--duration must be positive, got {}", duration);
            }
            let events = read_events(input.as_deref())?;
            let targets = parse_attendees(&attendees);
            let slots = find_free_slots(&events, &targets, duration);
            info!(attendees = targets.len(), slots = slots.len(), "free slots computed");
            write_output(output.as_deref(), &to_json(&slot_output(&slots))?)?;
        }
        Commands::Busy {
            input,
            output,
            attendees,
        } => {
            let events = read_events(input.as_deref())?;
            let targets = parse_attendees(&attendees);
            let mut busy = busy_times(&events, &targets);
            busy.sort();
            write_output(output.as_deref(), &to_json(&slot_output(&busy))?)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `-v` flags win over `RUST_LOG`; without
/// either, only warnings are shown.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Split a comma-separated attendee list, dropping blanks.
///
/// - `"alice,bob"` produces `["alice", "bob"]`
/// - `" alice , "` produces `["alice"]`
/// - `""` produces no attendees
fn parse_attendees(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn slot_output(ranges: &[TimeRange]) -> Vec<SlotOutput> {
    ranges.iter().map(SlotOutput::from).collect()
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = read_input(path)?;
    let document: EventsDocument =
        serde_json::from_str(&json).context("Invalid events document")?;
    validate_events(&document.events).context("Invalid events document")?;
    Ok(document.events)
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
