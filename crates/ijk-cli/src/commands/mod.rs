//! CLI command implementations and curve file loading.

pub mod eval;
pub mod lookup;
pub mod reparam;

use anyhow::{bail, ensure, Context, Result};
use ijk_math::{ReparamTable, Segment, Vector};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// Segment kind as spelled in curve files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// `v0, dv0, v1, dv1`
    Hermite,
    /// `v0, c0, v1, c1`
    HermiteHandles,
    /// `prev, v0, v1, next`
    CatmullRom,
    /// 16 points, row-major, plus `row_params`
    BicubicCatmullRom,
}

impl CurveKind {
    fn point_count(self) -> usize {
        match self {
            CurveKind::BicubicCatmullRom => 16,
            _ => 4,
        }
    }
}

/// On-disk curve description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    /// Segment kind
    pub kind: CurveKind,
    /// Control points, all of the same dimension
    pub points: Vec<Vec<f64>>,
    /// Per-row parameters for bi-cubic segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_params: Option<[f64; 4]>,
}

/// Reads a curve file; `.yaml`/`.yml` parse as YAML, anything else as JSON.
pub fn load_curve(path: &Path) -> Result<CurveFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let curve: CurveFile = match ext.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML curve: {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON curve: {}", path.display()))?,
    };
    debug!(path = %path.display(), kind = ?curve.kind, points = curve.points.len(), "loaded curve");
    Ok(curve)
}

/// A segment of runtime-chosen dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnySegment {
    /// 2D segment
    D2(Segment<f64, 2>),
    /// 3D segment
    D3(Segment<f64, 3>),
    /// 4D segment
    D4(Segment<f64, 4>),
}

/// Owned table in plain `Vec` form, ready for printing or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    /// Segment kind
    pub kind: &'static str,
    /// Chord length before normalization
    pub total_length: f64,
    /// Whether `arc_lengths` is normalized
    pub normalized: bool,
    /// Parameter per entry
    pub params: Vec<f64>,
    /// Accumulated arc length per entry
    pub arc_lengths: Vec<f64>,
    /// Curve point per entry
    pub samples: Vec<Vec<f64>>,
}

impl<const N: usize> From<(&'static str, ReparamTable<f64, N>)> for TableReport {
    fn from((kind, t): (&'static str, ReparamTable<f64, N>)) -> Self {
        Self {
            kind,
            total_length: t.total_length,
            normalized: t.normalized,
            samples: t.samples.iter().map(|p| p.0.to_vec()).collect(),
            params: t.params,
            arc_lengths: t.arc_lengths,
        }
    }
}

macro_rules! with_segment {
    ($seg:expr, $s:ident => $body:expr) => {
        match $seg {
            AnySegment::D2($s) => $body,
            AnySegment::D3($s) => $body,
            AnySegment::D4($s) => $body,
        }
    };
}

impl AnySegment {
    /// Builds a segment from a curve file, checking point counts and
    /// dimensions.
    pub fn from_curve(curve: &CurveFile) -> Result<Self> {
        let want = curve.kind.point_count();
        ensure!(
            curve.points.len() == want,
            "{:?} needs {} points, got {}",
            curve.kind,
            want,
            curve.points.len()
        );
        let dim = curve.points[0].len();
        if let Some(i) = curve.points.iter().position(|p| p.len() != dim) {
            bail!("Point {} has {} components, expected {}", i, curve.points[i].len(), dim);
        }
        trace!(dim, kind = ?curve.kind, "building segment");
        Ok(match dim {
            2 => AnySegment::D2(build(curve)?),
            3 => AnySegment::D3(build(curve)?),
            4 => AnySegment::D4(build(curve)?),
            _ => bail!("Points must have 2 to 4 components, got {}", dim),
        })
    }

    /// Dimension of the segment's points.
    pub fn dim(&self) -> usize {
        match self {
            AnySegment::D2(_) => 2,
            AnySegment::D3(_) => 3,
            AnySegment::D4(_) => 4,
        }
    }

    /// Point at `u` as a `Vec`.
    pub fn eval(&self, u: f64) -> Vec<f64> {
        with_segment!(self, s => s.eval(u).0.to_vec())
    }

    /// Arc-length table.
    pub fn reparam(&self, divisions: usize, normalize: bool) -> Result<TableReport> {
        with_segment!(self, s => {
            let table = s.reparam(divisions, normalize)?;
            Ok(TableReport::from((s.kind(), table)))
        })
    }

    /// Parameter and point at arc length `s` along a table built with
    /// `divisions` and `normalize`.
    pub fn lookup(&self, divisions: usize, normalize: bool, arc_lengths: &[f64]) -> Result<Vec<(f64, Vec<f64>)>> {
        with_segment!(self, seg => {
            let table = seg.reparam(divisions, normalize)?;
            arc_lengths
                .iter()
                .map(|&s| -> Result<(f64, Vec<f64>)> {
                    let u = table.param_at_arc_length(s)?;
                    Ok((u, seg.eval(u).0.to_vec()))
                })
                .collect()
        })
    }
}

fn build<const N: usize>(curve: &CurveFile) -> Result<Segment<f64, N>> {
    let mut pts = Vec::with_capacity(curve.points.len());
    for p in &curve.points {
        let arr: [f64; N] = p
            .as_slice()
            .try_into()
            .with_context(|| format!("Expected {} components, got {}", N, p.len()))?;
        pts.push(Vector(arr));
    }
    Ok(match curve.kind {
        CurveKind::Hermite => Segment::Hermite { v0: pts[0], dv0: pts[1], v1: pts[2], dv1: pts[3] },
        CurveKind::HermiteHandles => {
            Segment::HermiteHandles { v0: pts[0], c0: pts[1], v1: pts[2], c1: pts[3] }
        }
        CurveKind::CatmullRom => Segment::CatmullRom { prev: pts[0], v0: pts[1], v1: pts[2], next: pts[3] },
        CurveKind::BicubicCatmullRom => {
            let row_params = curve
                .row_params
                .context("bicubic_catmull_rom needs row_params")?;
            let grid = std::array::from_fn(|r| std::array::from_fn(|c| pts[r * 4 + c]));
            Segment::BicubicCatmullRom { grid, row_params }
        }
    })
}

/// Formats a point as `x y z`.
pub fn format_point(p: &[f64]) -> String {
    p.iter().map(|c| format!("{c:.6}")).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    fn line() -> CurveFile {
        CurveFile {
            kind: CurveKind::Hermite,
            points: vec![vec![0.0, 0.0], vec![4.0, 0.0], vec![4.0, 0.0], vec![4.0, 0.0]],
            row_params: None,
        }
    }

    #[test]
    fn test_load_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("curve.json");
        std::fs::write(&json, r#"{"kind": "catmull_rom", "points": [[0,0,0],[1,0,0],[2,1,0],[3,1,0]]}"#).unwrap();
        let c = load_curve(&json).unwrap();
        assert_eq!(c.kind, CurveKind::CatmullRom);
        assert_eq!(c.points[2], vec![2.0, 1.0, 0.0]);

        let yaml = dir.path().join("curve.YML");
        let mut f = std::fs::File::create(&yaml).unwrap();
        writeln!(f, "kind: hermite_handles").unwrap();
        writeln!(f, "points: [[0, 0], [1, 1], [3, 0], [2, 1]]").unwrap();
        drop(f);
        let c = load_curve(&yaml).unwrap();
        assert_eq!(c.kind, CurveKind::HermiteHandles);
        assert_eq!(AnySegment::from_curve(&c).unwrap().dim(), 2);
    }

    #[test]
    fn test_load_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{").unwrap();
        let err = load_curve(&bad).unwrap_err();
        assert!(format!("{err}").contains("bad.json"));
        assert!(load_curve(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_from_curve_validation() {
        let mut c = line();
        c.points.pop();
        assert!(AnySegment::from_curve(&c).is_err());

        let mut c = line();
        c.points[1].push(1.0);
        assert!(AnySegment::from_curve(&c).is_err());

        let c = CurveFile {
            kind: CurveKind::Hermite,
            points: vec![vec![0.0]; 4],
            row_params: None,
        };
        assert!(AnySegment::from_curve(&c).is_err());

        let c = CurveFile {
            kind: CurveKind::BicubicCatmullRom,
            points: vec![vec![0.0, 0.0, 0.0, 0.0]; 16],
            row_params: None,
        };
        assert!(AnySegment::from_curve(&c).is_err());
        let c = CurveFile { row_params: Some([0.5; 4]), ..c };
        assert_eq!(AnySegment::from_curve(&c).unwrap().dim(), 4);
    }

    #[test]
    fn test_reparam_and_lookup() {
        let seg = AnySegment::from_curve(&line()).unwrap();
        assert_eq!(seg.eval(0.5), vec![2.0, 0.0]);

        let table = seg.reparam(8, true).unwrap();
        assert_eq!(table.kind, "hermite");
        assert_eq!(table.params.len(), 9);
        assert_abs_diff_eq!(table.total_length, 4.0, epsilon = 1e-12);
        assert_eq!(table.arc_lengths[8], 1.0);

        let hits = seg.lookup(8, false, &[1.0, 3.0]).unwrap();
        assert_abs_diff_eq!(hits[0].0, 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(hits[1].1[0], 3.0, epsilon = 1e-9);

        assert!(seg.reparam(0, false).is_err());
    }

    #[test]
    fn test_table_report_json() {
        let seg = AnySegment::from_curve(&line()).unwrap();
        let report = seg.reparam(2, false).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "hermite");
        assert_eq!(json["samples"].as_array().unwrap().len(), 3);
    }
}
