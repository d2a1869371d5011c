//! CLI tool for lockstep - loads a source directory, reorders it, and
//! prints the grid or exports the table
//!
//! Usage:
//!   lockstep_cli <dir>                               # Print the grid
//!   lockstep_cli <dir> --sort months --descending    # Sort every column by `months`
//!   lockstep_cli <dir> --swap 0:0:2 --format rows -o out.json
//!
//! Sorting happens before swaps, so swaps adjust the sorted arrangement.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lockstep::export::{export_table, ExportShape};
use lockstep::grid::GridView;
use lockstep::sources::{self, SourceConfig};
use lockstep::{Coordinate, Publication, PublicationKind, ReorderEngine, ReorderError};

#[derive(Debug, Parser)]
#[command(name = "lockstep_cli", version, about = "Reorder an aligned label grid")]
struct Cli {
    /// Directory holding the source files
    dir: PathBuf,

    /// JSON manifest overriding the default source layout
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Sort every column by the order of this column
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    descending: bool,

    /// Swap two rows of one column, as COLUMN:ROW:ROW (0-based, repeatable)
    #[arg(long = "swap", value_name = "COLUMN:ROW:ROW")]
    swaps: Vec<SwapSpec>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Format::Grid)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned text grid
    Grid,
    /// Column-major JSON
    Columns,
    /// Row-major JSON, one record per row
    Rows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SwapSpec {
    column: usize,
    from: usize,
    to: usize,
}

impl FromStr for SwapSpec {
    type Err = ReorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<usize> = s
            .split(':')
            .map(|part| part.trim().parse::<usize>())
            .collect::<Result<_, _>>()
            .map_err(|e| ReorderError::Parse(format!("swap `{s}`: {e}")))?;
        match parts.as_slice() {
            &[column, from, to] => Ok(Self { column, from, to }),
            _ => Err(ReorderError::Parse(format!(
                "swap `{s}` must be COLUMN:ROW:ROW"
            ))),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> lockstep::Result<()> {
    let config = match &cli.manifest {
        Some(path) => SourceConfig::load(path)?,
        None => SourceConfig::default(),
    };
    let (table, lookups) = sources::load_dir(&cli.dir, &config)?;

    let resolver = lookups.resolver(&config);
    let mut engine = ReorderEngine::with_resolver(table, resolver);
    engine.subscribe(|p: &Publication| {
        if p.kind == PublicationKind::Commit {
            info!(revision = p.revision, "table committed");
        }
    });

    if let Some(column) = &cli.sort {
        engine.sort_by(column, !cli.descending)?;
    }
    for swap in &cli.swaps {
        engine.on_drag_start(Coordinate::new(swap.column, swap.from))?;
        engine.on_drag_hover(Coordinate::new(swap.column, swap.to))?;
        engine.on_drag_end()?;
    }

    let snapshot = engine.snapshot();
    let text = match cli.format {
        Format::Grid => GridView::build(
            &snapshot,
            engine.drag_state(),
            engine.sort_key(),
            &lookups,
            &config,
        )
        .render_text(),
        Format::Columns => export_table(&snapshot, ExportShape::ColumnMajor)?,
        Format::Rows => export_table(&snapshot, ExportShape::RowMajor)?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &text)?;
            info!(path = %path.display(), "written");
        }
        None => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "lockstep_cli failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
