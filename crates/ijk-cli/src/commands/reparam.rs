//! Arc-length table command.

use super::{format_point, load_curve, AnySegment};
use crate::ReparamArgs;
use anyhow::Result;
use tracing::{info, trace};

/// Prints the parameter / arc-length / position table.
pub fn run(args: ReparamArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), divisions = args.divisions, "reparam::run");
    let curve = load_curve(&args.input)?;
    let seg = AnySegment::from_curve(&curve)?;
    let table = seg.reparam(args.divisions, args.normalize)?;
    info!(kind = table.kind, total = table.total_length, "table built");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    if verbose {
        println!("{} ({}, {}D)", args.input.display(), table.kind, seg.dim());
    }
    println!("Total length: {:.6}", table.total_length);
    println!("{:>5}  {:>10}  {:>10}  point", "i", "u", "s");
    for (i, ((u, s), p)) in table
        .params
        .iter()
        .zip(&table.arc_lengths)
        .zip(&table.samples)
        .enumerate()
    {
        println!("{:>5}  {:>10.6}  {:>10.6}  {}", i, u, s, format_point(p));
    }
    Ok(())
}
