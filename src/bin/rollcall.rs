//! rollcall - Sortable participant list viewer.
//!
//! Supports two modes:
//! - Interactive (default): browse the tables and sort them by their headers
//! - Print: apply header clicks in order and print one table as text
//!
//! Usage:
//!   rollcall participants.json                         # interactive viewer
//!   rollcall participants.json --print                 # print the first table
//!   rollcall participants.json --print -t 2 -s Name    # table 2, sorted by Name
//!   rollcall participants.json --print -s 1 -s 1       # column 1, descending

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use rollcall::loader::load_tables;
use rollcall::model::ParticipantTable;
use rollcall::sort::{Collator, Strength};
use rollcall::tui::{App, AppState, ParticipantTableState};
use rollcall::view::{build_participant_view, render_text};

/// Poll interval of the interactive viewer.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Sortable participant list viewer.
#[derive(Parser)]
#[command(name = "rollcall", about = "Sortable participant list viewer", version)]
struct Args {
    /// JSON document with one table, an array of tables, or {"tables": [...]}.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print a table as text instead of opening the viewer.
    #[arg(short, long)]
    print: bool,

    /// Table to print, starting at 1 (print mode only).
    #[arg(short, long, value_name = "N")]
    table: Option<usize>,

    /// Column header to click before printing: a column index, a header
    /// title, or `checked_in`. Repeat to click several times
    /// (print mode only).
    #[arg(short, long = "sort", value_name = "COLUMN")]
    sort: Vec<String>,

    /// Collation strength for text columns: primary (letters only),
    /// secondary (plus accents) or tertiary (plus case).
    #[arg(long, value_enum, default_value_t = Strength::Tertiary, value_name = "LEVEL")]
    strength: Strength,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,

    /// Write logs to this file. The interactive viewer only logs when set.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Initializes the tracing subscriber with the appropriate log level.
///
/// Logs go to `log_file` when given, otherwise to stderr in print mode.
/// The interactive viewer owns the terminal, so without a log file nothing
/// is installed.
fn init_logging(
    verbose: u8,
    quiet: bool,
    log_file: Option<&Path>,
    interactive: bool,
) -> Result<(), String> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("rollcall={}", level).parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("cannot open log file '{}': {}", path.display(), e))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if !interactive => builder.with_writer(std::io::stderr).init(),
        None => {}
    }
    Ok(())
}

/// Applies the requested header clicks to one table and renders it as text.
fn print_table(
    tables: Vec<ParticipantTable>,
    number: usize,
    clicks: &[String],
    collator: Collator,
) -> Result<String, String> {
    let count = tables.len();
    let table = number
        .checked_sub(1)
        .and_then(|index| tables.into_iter().nth(index))
        .ok_or_else(|| format!("table {} not found ({} tables loaded)", number, count))?;

    let mut state = ParticipantTableState::new(table, count != 1, collator);
    for click in clicks {
        let selector = state.resolve_selector(click);
        state
            .sort_by(selector)
            .map_err(|e| format!("cannot sort by '{}': {}", click, e))?;
    }

    Ok(render_text(&build_participant_view(&state)))
}

fn main() {
    let args = Args::parse();

    if !args.print && (args.table.is_some() || !args.sort.is_empty()) {
        eprintln!("Error: --table and --sort can only be used with --print");
        eprintln!("Usage: rollcall FILE                     # interactive viewer");
        eprintln!("       rollcall FILE --print [-t N] [-s COLUMN]...");
        std::process::exit(1);
    }

    if let Err(e) = init_logging(args.verbose, args.quiet, args.log_file.as_deref(), !args.print)
    {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let tables = match load_tables(&args.file) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!(
                "Error loading participant tables from '{}': {}",
                args.file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let collator = Collator::new(args.strength);

    if args.print {
        match print_table(tables, args.table.unwrap_or(1), &args.sort, collator) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let state = AppState::new(tables, args.file.display().to_string(), collator);
    if let Err(e) = App::new(state).run(TICK_RATE) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
