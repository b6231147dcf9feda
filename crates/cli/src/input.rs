//! Point list readers: CSV (columns `x`, `y`) via polars, JSON `[[x, y], …]` via serde_json.

use anyhow::{bail, Context, Result};
use hull2d::Point;
use polars::prelude::*;
use std::path::Path;

/// Read raw coordinates in file order; the format follows the extension.
pub fn read_coords(path: &Path) -> Result<Vec<[f64; 2]>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        other => bail!(
            "unsupported input extension {:?} for {} (expected .csv or .json)",
            other,
            path.display()
        ),
    }
}

fn read_csv(path: &Path) -> Result<Vec<[f64; 2]>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x, y from {}", path.display()))?;
    tracing::info!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => bail!("row {row}: missing coordinate"),
        })
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<[f64; 2]>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn to_f64_points(coords: &[[f64; 2]]) -> Vec<Point<f64>> {
    coords.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

/// Integer points; every coordinate must be integral and fit in `i32`.
pub fn to_i32_points(coords: &[[f64; 2]]) -> Result<Vec<Point<i32>>> {
    coords
        .iter()
        .enumerate()
        .map(|(row, &[x, y])| Ok(Point::new(as_i32(x, row)?, as_i32(y, row)?)))
        .collect()
}

fn as_i32(v: f64, row: usize) -> Result<i32> {
    if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
        bail!("row {row}: {v} is not an i32 coordinate");
    }
    Ok(v as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn json_points_roundtrip_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0, 0], [1.5, 0], [1, 1]]").unwrap();
        let coords = read_coords(&path).unwrap();
        assert_eq!(coords, vec![[0.0, 0.0], [1.5, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn csv_points_by_column_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "id,y,x\n0,0,0\n1,0,1\n2,1,1\n").unwrap();
        let coords = read_coords(&path).unwrap();
        assert_eq!(coords, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn integer_conversion_rejects_fractions() {
        assert_eq!(
            to_i32_points(&[[3.0, -4.0]]).unwrap(),
            vec![Point::new(3, -4)]
        );
        let extremes = [[i32::MIN as f64, i32::MAX as f64]];
        assert_eq!(
            to_i32_points(&extremes).unwrap(),
            vec![Point::new(i32::MIN, i32::MAX)]
        );
        assert!(to_i32_points(&[[0.5, 0.0]]).is_err());
        assert!(to_i32_points(&[[0.0, 1e12]]).is_err());
    }

    #[test]
    fn unknown_extension_is_an_error() {
        assert!(read_coords(Path::new("points.off")).is_err());
    }
}
