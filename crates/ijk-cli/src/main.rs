//! ijk - curve evaluation and arc-length reparameterization
//!
//! Loads a single curve segment from a JSON or YAML file and evaluates,
//! tabulates or resamples it.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "ijk")]
#[command(author, version, about = "Curve evaluation and arc-length reparameterization")]
#[command(long_about = "
Evaluates cubic curve segments described in JSON or YAML files.

Curve file:
  kind: hermite | hermite_handles | catmull_rom | bicubic_catmull_rom
  points: [[x, y], ...]          # 2 to 4 components per point
  row_params: [u0, u1, u2, u3]   # bicubic_catmull_rom only

Examples:
  ijk eval curve.json -u 0 -u 0.5 -u 1
  ijk reparam curve.yaml -n 32 --normalize
  ijk reparam curve.yaml -n 32 --json
  ijk lookup curve.json -s 0.25 -s 0.75 --normalize
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the curve at parameters
    #[command(visible_alias = "e")]
    Eval(EvalArgs),

    /// Print the arc-length table
    #[command(visible_alias = "r")]
    Reparam(ReparamArgs),

    /// Resample the curve by arc length
    #[command(visible_alias = "l")]
    Lookup(LookupArgs),
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Curve file (.json, .yaml, .yml)
    input: PathBuf,

    /// Curve parameter (repeatable, not clamped)
    #[arg(short, long = "param", required = true, allow_negative_numbers = true)]
    u: Vec<f64>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ReparamArgs {
    /// Curve file (.json, .yaml, .yml)
    input: PathBuf,

    /// Number of divisions
    #[arg(short = 'n', long, default_value = "16")]
    divisions: usize,

    /// Normalize arc length to [0, 1]
    #[arg(long)]
    normalize: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct LookupArgs {
    /// Curve file (.json, .yaml, .yml)
    input: PathBuf,

    /// Arc length to resample at (repeatable)
    #[arg(short = 's', long = "arc-length", required = true, allow_negative_numbers = true)]
    arc_length: Vec<f64>,

    /// Number of table divisions
    #[arg(short = 'n', long, default_value = "64")]
    divisions: usize,

    /// Treat arc lengths as fractions of the total
    #[arg(long)]
    normalize: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Eval(args) => commands::eval::run(args, cli.verbose),
        Commands::Reparam(args) => commands::reparam::run(args, cli.verbose),
        Commands::Lookup(args) => commands::lookup::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eval() {
        let cli = Cli::try_parse_from(["ijk", "eval", "c.json", "-u", "0", "-u", "-0.5", "--json"]).unwrap();
        match cli.command {
            Commands::Eval(args) => {
                assert_eq!(args.input, PathBuf::from("c.json"));
                assert_eq!(args.u, vec![0.0, -0.5]);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_reparam_defaults() {
        let cli = Cli::try_parse_from(["ijk", "-v", "reparam", "c.yaml"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Reparam(args) => {
                assert_eq!(args.divisions, 16);
                assert!(!args.normalize);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_lookup_alias() {
        let cli = Cli::try_parse_from(["ijk", "l", "c.json", "-s", "1.5", "--normalize", "-n", "8"]).unwrap();
        match cli.command {
            Commands::Lookup(args) => {
                assert_eq!(args.arc_length, vec![1.5]);
                assert_eq!(args.divisions, 8);
                assert!(args.normalize);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_params() {
        assert!(Cli::try_parse_from(["ijk", "eval", "c.json"]).is_err());
        assert!(Cli::try_parse_from(["ijk", "lookup", "c.json"]).is_err());
        assert!(Cli::try_parse_from(["ijk", "reparam", "c.json", "-n", "many"]).is_err());
    }
}
