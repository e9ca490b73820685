//! Arc-length resampling command.

use super::{format_point, load_curve, AnySegment};
use crate::LookupArgs;
use anyhow::Result;
use serde::Serialize;
use tracing::{info, trace};

#[derive(Serialize)]
struct Hit {
    s: f64,
    u: f64,
    point: Vec<f64>,
}

/// Maps each arc length to a curve parameter and point.
pub fn run(args: LookupArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), count = args.arc_length.len(), "lookup::run");
    let curve = load_curve(&args.input)?;
    let seg = AnySegment::from_curve(&curve)?;
    let hits = seg.lookup(args.divisions, args.normalize, &args.arc_length)?;
    info!(kind = ?curve.kind, hits = hits.len(), "resampled");

    let hits: Vec<Hit> = args
        .arc_length
        .iter()
        .zip(hits)
        .map(|(&s, (u, point))| Hit { s, u, point })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if verbose {
        let unit = if args.normalize { "fraction" } else { "length" };
        println!("{} ({:?}, arc {})", args.input.display(), curve.kind, unit);
    }
    for h in &hits {
        println!("{:.6}  u={:.6}  {}", h.s, h.u, format_point(&h.point));
    }
    Ok(())
}
