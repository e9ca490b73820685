//! Curve evaluation command.

use super::{format_point, load_curve, AnySegment};
use crate::EvalArgs;
use anyhow::Result;
use serde::Serialize;
use tracing::{info, trace};

#[derive(Serialize)]
struct EvalPoint {
    u: f64,
    point: Vec<f64>,
}

/// Evaluates the curve at every requested parameter.
pub fn run(args: EvalArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), count = args.u.len(), "eval::run");
    let curve = load_curve(&args.input)?;
    let seg = AnySegment::from_curve(&curve)?;
    info!(kind = ?curve.kind, dim = seg.dim(), "evaluating");

    let points: Vec<EvalPoint> = args
        .u
        .iter()
        .map(|&u| EvalPoint { u, point: seg.eval(u) })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    if verbose {
        println!("{} ({:?}, {}D)", args.input.display(), curve.kind, seg.dim());
    }
    for p in &points {
        println!("{:.6}  {}", p.u, format_point(&p.point));
    }
    Ok(())
}
