//! CSV/JSON plumbing between the outside world and a `Session`.

use anyhow::{bail, Context, Result};
use earclip::session::Session;
use polars::prelude::*;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// One scripted input event, as found in a replay JSON file.
///
/// Externally tagged: `{"add": [x, y]}`, `"triangulate"`, `"clear"`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptCommand {
    Add([f64; 2]),
    Triangulate,
    Clear,
}

/// Apply a scripted command to the session.
pub fn apply(session: &mut Session, cmd: ScriptCommand) -> Result<()> {
    match cmd {
        ScriptCommand::Add([x, y]) => session.add_vertex(x, y),
        ScriptCommand::Triangulate => session
            .triangulate()
            .context("triangulate command failed")?,
        ScriptCommand::Clear => session.clear(),
    }
    Ok(())
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptCommand>> {
    serde_json::from_str(text).context("parsing command script")
}

/// Read an outline from a CSV with `x` and `y` float columns, in row order.
pub fn read_points_csv(path: &str) -> Result<Vec<(f64, f64)>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?;
    let df = lf.collect().with_context(|| format!("reading {path}"))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(xs.len());
    for (x, y) in xs.into_iter().zip(ys.into_iter()) {
        match (x, y) {
            (Some(x), Some(y)) => points.push((x, y)),
            _ => bail!("{path} has a null coordinate"),
        }
    }
    Ok(points)
}

/// Write an outline as a CSV with `x` and `y` columns.
pub fn write_points_csv(path: &str, points: &[(f64, f64)]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    ensure_parent(path)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {path}"))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

/// Snapshot of the session state as rendering collaborators see it.
pub fn state_json(session: &Session) -> Value {
    let vertices: Vec<[f64; 2]> = session.vertices().iter().map(|p| [p.x, p.y]).collect();
    let triangles: Vec<[[f64; 2]; 3]> = session
        .triangles()
        .iter()
        .map(|t| [[t.a.x, t.a.y], [t.b.x, t.b.y], [t.c.x, t.c.y]])
        .collect();
    json!({
        "vertices": vertices,
        "triangles": triangles,
    })
}

pub fn write_state_json(path: &str, session: &Session) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(&state_json(session))?)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}

fn ensure_parent(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
