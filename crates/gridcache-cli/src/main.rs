//! gridcache CLI - cell reference, range and clipboard text tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridcache_clipboard::{grid_to_string, string_to_grid};
use gridcache_core::{to_srefs, Cell, Grid, Range, Ref};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridcache")]
#[command(author, version, about = "Cell reference, range and clipboard text tool")]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the row and column of a cell reference
    Ref {
        /// Cell reference (e.g. AB12)
        sref: String,
    },

    /// Expand references and ranges into individual cells
    Expand {
        /// References or ranges (e.g. A1 B2:C3)
        #[arg(required = true)]
        references: Vec<String>,
    },

    /// List the one-cell strips bordering a range
    Borders {
        /// Range to border (e.g. B2:C3)
        range: String,

        /// Bounding range the strips must stay inside
        #[arg(short, long)]
        within: String,
    },

    /// Convert `SREF=value` lines into clipboard text
    Copy {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Convert clipboard text into `SREF<TAB>value` lines
    Paste {
        /// Top-left cell to paste at
        #[arg(short, long, default_value = "A1")]
        anchor: String,

        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Commands::Ref { sref } => show_ref(&sref)?,
        Commands::Expand { references } => expand(&references)?,
        Commands::Borders { range, within } => borders(&range, &within)?,
        Commands::Copy { input } => copy(&read_input(input.as_deref())?)?,
        Commands::Paste { anchor, input } => paste(&anchor, &read_input(input.as_deref())?)?,
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;
    if !output.is_empty() && !output.ends_with('\n') {
        writeln!(stdout).context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG`
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    tracing::debug!(bytes = text.len(), "read input");
    Ok(text)
}

fn show_ref(sref: &str) -> Result<String> {
    let r = Ref::parse(sref).with_context(|| format!("'{}' is not a cell reference", sref))?;
    Ok(format!("row\t{}\ncolumn\t{}\n", r.r, r.c))
}

fn expand(references: &[String]) -> Result<String> {
    let mut out = String::new();
    for sref in to_srefs(references) {
        out.push_str(&sref.context("Failed to expand references")?);
        out.push('\n');
    }
    Ok(out)
}

fn borders(range: &str, within: &str) -> Result<String> {
    let range = Range::parse(range).with_context(|| format!("'{}' is not a range", range))?;
    let dimension =
        Range::parse(within).with_context(|| format!("'{}' is not a range", within))?;

    let mut out = String::new();
    for border in range.border_ranges(&dimension) {
        out.push_str(&border.to_srng());
        out.push('\n');
    }
    Ok(out)
}

fn copy(input: &str) -> Result<String> {
    let mut grid = Grid::new();

    for (line_no, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (sref, value) = line
            .split_once('=')
            .with_context(|| format!("Line {}: expected SREF=value", line_no + 1))?;
        let r = Ref::parse(sref.trim())
            .with_context(|| format!("Line {}: '{}' is not a cell reference", line_no + 1, sref))?;
        grid.insert(r.to_sref(), Cell::value(value));
    }

    grid_to_string(&grid).context("Failed to serialize grid")
}

fn paste(anchor: &str, input: &str) -> Result<String> {
    let anchor = Ref::parse(anchor).with_context(|| format!("'{}' is not a cell reference", anchor))?;
    // Clipboard text commonly ends with a newline that is not a row of its own
    let text = input.strip_suffix('\n').unwrap_or(input);
    let grid = string_to_grid(anchor, text).context("Failed to parse clipboard text")?;

    let mut cells = grid
        .iter()
        .map(|(sref, cell)| Ok((Ref::parse(sref)?, cell.display_text())))
        .collect::<gridcache_core::Result<Vec<_>>>()?;
    cells.sort_by_key(|(r, _)| *r);

    let mut out = String::new();
    for (r, value) in cells {
        out.push_str(&format!("{}\t{}\n", r, value));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["gridcache", "-v", "borders", "B2:C3", "--within", "A1:D4"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Borders { ref range, ref within } if range == "B2:C3" && within == "A1:D4"
        ));

        let cli = Cli::try_parse_from(["gridcache", "paste"]).unwrap();
        assert!(matches!(cli.command, Commands::Paste { ref anchor, input: None } if anchor == "A1"));

        assert!(Cli::try_parse_from(["gridcache", "expand"]).is_err());
    }

    #[test]
    fn test_show_ref() {
        assert_eq!(show_ref("AB12").unwrap(), "row\t12\ncolumn\t28\n");
        assert!(show_ref("12AB").is_err());
    }

    #[test]
    fn test_expand() {
        let refs = vec!["A1:B2".to_string(), "C3".to_string()];
        assert_eq!(expand(&refs).unwrap(), "A1\nB1\nA2\nB2\nC3\n");
        assert!(expand(&["A1:".to_string()]).is_err());
    }

    #[test]
    fn test_borders() {
        assert_eq!(
            borders("B2:C3", "A1:D4").unwrap(),
            "B1:C1\nB4:C4\nA2:A3\nD2:D3\n"
        );
        assert_eq!(borders("A1:A1", "A1:A1").unwrap(), "");
    }

    #[test]
    fn test_copy() {
        let input = "B2=x\n\nC3=a=b\n";
        assert_eq!(copy(input).unwrap(), "x\t\n\ta=b");
        assert!(copy("nonsense").is_err());
        assert_eq!(copy("").unwrap(), "");
    }

    #[test]
    fn test_paste() {
        assert_eq!(
            paste("B2", "1\t2\n3\n").unwrap(),
            "B2\t1\nC2\t2\nB3\t3\n"
        );
        assert!(paste("2B", "x").is_err());
        assert!(paste("A4294967295", "x\ny").is_err());
    }
}
