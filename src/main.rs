//! tabprobe - inspect and compare columns of delimited text files

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tabprobe::actions::{self, Action};
use tabprobe::config::{Config, Direction, DEFAULT_DELIMITER, DEFAULT_ENCODING};
use tabprobe::error::ProbeError;

/// Inspect and compare columns of semicolon-delimited text files
#[derive(Parser, Debug)]
#[command(name = "tabprobe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Delimited file to read
    file: PathBuf,

    /// Text encoding of the file
    #[arg(long, default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Field delimiter
    #[arg(long, default_value_t = char::from(DEFAULT_DELIMITER))]
    delimiter: char,
}

#[derive(Args, Debug)]
struct ColumnArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Column to inspect
    column: String,
}

#[derive(Args, Debug)]
struct EmptyArgs {
    #[command(flatten)]
    target: ColumnArgs,

    /// List the rows with an empty cell
    #[arg(long)]
    rows: bool,

    /// Print these key columns of each row instead of the whole row (comma-separated)
    #[arg(long, value_delimiter = ',')]
    rowid: Vec<String>,

    /// List at most this many rows
    #[arg(long)]
    max: Option<usize>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    #[command(flatten)]
    target: ColumnArgs,

    /// File to compare against
    #[arg(long)]
    file2: PathBuf,

    /// Text encoding of the second file (defaults to --encoding)
    #[arg(long)]
    encoding2: Option<String>,

    /// Which relationship counts as a difference: <, > or =
    #[arg(long, default_value = "=")]
    direction: Direction,

    /// Print full rows instead of values
    #[arg(long)]
    rows: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print column names, one per line
    Headers(InputArgs),
    /// Print non-empty count and fraction per column
    Fillstats(InputArgs),
    /// Print every non-empty value of a column, in file order
    Column(ColumnArgs),
    /// Print the value distribution of a column
    Values {
        #[command(flatten)]
        target: ColumnArgs,

        /// Only show values occurring at least this often
        #[arg(long, default_value_t = 1)]
        min: usize,

        /// Print the rows carrying each value
        #[arg(long)]
        rows: bool,
    },
    /// Count rows with an empty cell in a column
    Empty(EmptyArgs),
    /// List rows with an empty cell in a column
    Emptyrows(EmptyArgs),
    /// Print values present in one file's column but not the other's
    Compare(CompareArgs),
    /// Print per-value count differences, or per-row mismatches with --rows
    Counts {
        #[command(flatten)]
        compare: CompareArgs,

        /// Key columns identifying the same row in both files (comma-separated)
        #[arg(long, value_delimiter = ',')]
        rowid: Vec<String>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ProbeError>() {
            Some(err @ ProbeError::ColumnNotFound { .. }) => {
                println!("{}", err);
                ExitCode::from(1)
            }
            _ => {
                println!("Error: {:#}", e);
                ExitCode::from(2)
            }
        },
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tabprobe=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let (action, config) = resolve(cli.command)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    actions::run(&action, &config, &mut out)?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn base_config(input: InputArgs) -> Result<Config> {
    if !input.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character: {}", input.delimiter);
    }
    Ok(Config::new(input.file)
        .with_encoding(input.encoding)
        .with_delimiter(input.delimiter as u8))
}

fn empty_config(args: EmptyArgs) -> Result<(String, Config)> {
    let mut config = base_config(args.target.input)?
        .with_show_rows(args.rows)
        .with_row_id(args.rowid);
    if let Some(max) = args.max {
        config = config.with_max_rows(max);
    }
    Ok((args.target.column, config))
}

fn compare_config(args: CompareArgs) -> Result<(String, Config)> {
    let mut config = base_config(args.target.input)?
        .with_file2(args.file2)
        .with_direction(args.direction)
        .with_show_rows(args.rows);
    if let Some(encoding2) = args.encoding2 {
        config = config.with_encoding2(encoding2);
    }
    Ok((args.target.column, config))
}

fn resolve(command: Command) -> Result<(Action, Config)> {
    Ok(match command {
        Command::Headers(input) => (Action::Headers, base_config(input)?),
        Command::Fillstats(input) => (Action::FillStats, base_config(input)?),
        Command::Column(target) => (Action::Column(target.column), base_config(target.input)?),
        Command::Values { target, min, rows } => {
            let config = base_config(target.input)?
                .with_min_count(min)
                .with_show_rows(rows);
            (Action::Values(target.column), config)
        }
        Command::Empty(args) => {
            let (column, config) = empty_config(args)?;
            (Action::Empty(column), config)
        }
        Command::Emptyrows(args) => {
            let (column, config) = empty_config(args)?;
            (Action::EmptyRows(column), config)
        }
        Command::Compare(args) => {
            let (column, config) = compare_config(args)?;
            (Action::Compare(column), config)
        }
        Command::Counts { compare, rowid } => {
            let (column, config) = compare_config(compare)?;
            (Action::Counts(column), config.with_row_id(rowid))
        }
    })
}
