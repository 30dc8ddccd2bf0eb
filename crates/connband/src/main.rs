//! connband — resolve cellular channel codes to frequency bands.
//!
//! ## Usage
//!
//! ```bash
//! # LTE EARFCN (default generation)
//! connband lookup 1850 6300
//!
//! # NR-ARFCN, JSON output
//! connband lookup --rat nr --format json 643334 2104166
//!
//! # Reject codes that cannot exist in the chosen scheme
//! connband lookup --rat lte --strict 2104166
//!
//! # Turn off strict mode enabled in the config file
//! connband --config connband.toml lookup --no-strict 2104166
//!
//! # Dump a table
//! connband table --rat nr
//! ```

mod config;
mod output;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connband_core::{BandTable, Rat, resolve, resolve_strict};

use crate::config::{Config, OutputFormat};
use crate::output::{LookupRow, write_lookup, write_table};

/// Cellular band lookup.
#[derive(Parser, Debug)]
#[command(name = "connband", about = "Resolve LTE/NR channel codes to 3GPP bands")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve channel codes to bands.
    Lookup {
        /// Generation of the codes: lte (EARFCN) or nr (NR-ARFCN).
        #[arg(long)]
        rat: Option<Rat>,

        #[command(flatten)]
        strict: StrictArgs,

        /// Output format: text or json.
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Channel codes to resolve.
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i64>,
    },
    /// Print a band table in lookup order.
    Table {
        #[arg(long)]
        rat: Option<Rat>,

        #[arg(long)]
        format: Option<OutputFormat>,
    },
}

// `--strict` / `--no-strict`: the last one given wins. With neither, the
// config value stands.
#[derive(Args, Debug)]
struct StrictArgs {
    /// Reject codes outside the generation's channel domain.
    #[arg(long, overrides_with = "no_strict")]
    strict: bool,

    /// Accept any code even if the config enables strict mode.
    #[arg(long = "no-strict", overrides_with = "strict")]
    no_strict: bool,
}

impl StrictArgs {
    fn apply(&self, configured: bool) -> bool {
        match (self.strict, self.no_strict) {
            (true, _) => true,
            (_, true) => false,
            _ => configured,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    // ── Logging ─────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        config = ?cli.config,
        rat = %config.lookup.rat,
        strict = config.lookup.strict,
        format = %config.format,
        "configuration resolved"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Lookup {
            rat,
            strict,
            format,
            codes,
        } => {
            let rat = rat.unwrap_or(config.lookup.rat);
            let strict = strict.apply(config.lookup.strict);
            let format = format.unwrap_or(config.format);
            let table = BandTable::for_rat(rat);

            let rows: Vec<LookupRow> = codes
                .iter()
                .map(|&code| {
                    let outcome = if strict {
                        resolve_strict(code, table)
                    } else {
                        Ok(resolve(code, table))
                    };
                    match &outcome {
                        Ok(Some(band)) => tracing::debug!(code, %band, "resolved"),
                        Ok(None) => tracing::info!(code, %rat, "no band for channel code"),
                        Err(e) => tracing::warn!(code, error = %e, "rejected channel code"),
                    }
                    LookupRow::new(code, rat, &outcome)
                })
                .collect();

            write_lookup(&mut out, &rows, format).context("writing results")?;
            out.flush()?;

            let rejected = rows.iter().filter(|r| r.is_error()).count();
            if rejected > 0 {
                anyhow::bail!(
                    "{rejected} channel code(s) outside the {rat} {} domain",
                    rat.channel_name()
                );
            }
        }
        Command::Table { rat, format } => {
            let rat = rat.unwrap_or(config.lookup.rat);
            let format = format.unwrap_or(config.format);
            write_table(&mut out, BandTable::for_rat(rat), format).context("writing table")?;
            out.flush()?;
        }
    }

    Ok(())
}
