//! Point files: CSV (`x,y[,id]`, via polars) or JSON (`[{"x":..,"y":..,"id":..}]`).
//!
//! Missing ids are assigned sequentially from 1, the same way a session would.

use anyhow::{anyhow, bail, Context, Result};
use chainhull::Point;
use polars::prelude::*;
use serde::Deserialize;
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(e) if e.eq_ignore_ascii_case("csv") => Ok(Format::Csv),
        Some(e) if e.eq_ignore_ascii_case("json") => Ok(Format::Json),
        _ => bail!("{}: expected a .csv or .json file", path.display()),
    }
}

#[derive(Deserialize)]
struct PointRecord {
    x: f64,
    y: f64,
    #[serde(default)]
    id: Option<u32>,
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let points = match format_of(path)? {
        Format::Csv => read_csv(path),
        Format::Json => read_json(path),
    };
    points.with_context(|| format!("reading points from {}", path.display()))
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let written = match format_of(path)? {
        Format::Csv => write_csv(path, points),
        Format::Json => write_json(path, points),
    };
    written.with_context(|| format!("writing points to {}", path.display()))
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let records: Vec<PointRecord> = serde_json::from_slice(&fs::read(path)?)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, r)| Point::new(r.x, r.y, r.id.unwrap_or(i as u32 + 1)))
        .collect())
}

fn write_json(path: &Path, points: &[Point]) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(points)?)?;
    Ok(())
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;
    let xs = float_column(&df, "x")?;
    let ys = float_column(&df, "y")?;
    let ids: Option<Vec<Option<u32>>> = match df.column("id") {
        Ok(col) => Some(col.cast(&DataType::UInt32)?.u32()?.into_iter().collect()),
        Err(_) => None,
    };
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(i, (x, y))| {
            let id = match &ids {
                Some(ids) => ids[i].ok_or_else(|| anyhow!("row {i}: missing id"))?,
                None => i as u32 + 1,
            };
            Ok(Point::new(x, y, id))
        })
        .collect()
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(i, v)| v.ok_or_else(|| anyhow!("row {i}: missing `{name}`")))
        .collect()
}

fn write_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let ids: Vec<u32> = points.iter().map(|p| p.id).collect();
    let mut df = df!("x" => xs, "y" => ys, "id" => ids)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}
