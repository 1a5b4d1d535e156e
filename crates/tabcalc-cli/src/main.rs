//! tabcalc CLI - resolve a formula table and print the result

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tabcalc::prelude::*;

#[derive(Parser)]
#[command(name = "tabcalc")]
#[command(
    author,
    version,
    about = "Resolve a table of integers and cell formulas"
)]
struct Cli {
    /// Input table file
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Strip whitespace around fields
    #[arg(long)]
    trim: bool,

    /// Order in which formulas are resolved
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Worklist)]
    strategy: StrategyArg,

    /// Increase logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Chase unresolved operands with a pending stack
    Worklist,
    /// Order formulas by their dependency graph first
    Topological,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Worklist => Strategy::Worklist,
            StrategyArg::Topological => Strategy::Topological,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let delimiter = delimiter_byte(cli.delimiter)?;
    let read_options = CsvReadOptions {
        delimiter,
        trim: cli.trim,
    };
    let write_options = CsvWriteOptions {
        delimiter,
        ..Default::default()
    };

    let mut table = CsvReader::read_file(&cli.input, &read_options)
        .with_context(|| format!("Failed to read '{}'", cli.input.display()))?;

    let stats = table
        .calculate_with_options(&CalculationOptions {
            strategy: cli.strategy.into(),
        })
        .context("Failed to resolve formulas")?;
    info!(
        "Resolved {} of {} formulas (max depth {})",
        stats.cells_calculated, stats.formula_count, stats.max_depth
    );

    write_table(&table, cli.output.as_deref(), &write_options)
}

/// Install the logger; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }
    Ok(delimiter as u8)
}

fn write_table(table: &Table, output: Option<&Path>, options: &CsvWriteOptions) -> Result<()> {
    if let Some(output_path) = output {
        CsvWriter::write_file(table, output_path, options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            table.rows().len(),
            output_path.display()
        );
    } else {
        let text =
            CsvWriter::write_to_string(table, options).context("Failed to render the table")?;
        io::stdout()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "tabcalc", "in.csv", "-o", "out.csv", "-d", ";", "--trim", "-s", "topological", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.delimiter, ';');
        assert!(cli.trim);
        assert_eq!(Strategy::from(cli.strategy), Strategy::Topological);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tabcalc", "in.csv"]).unwrap();
        assert_eq!(cli.output, None);
        assert_eq!(delimiter_byte(cli.delimiter).unwrap(), b',');
        assert_eq!(Strategy::from(cli.strategy), Strategy::Worklist);
    }

    #[test]
    fn test_non_ascii_delimiter() {
        assert!(delimiter_byte('§').is_err());
    }
}
