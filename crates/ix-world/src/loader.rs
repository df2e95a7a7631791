//! Map loading.
//!
//! # CSV format
//!
//! One row per spawn point or junction.  Extents are only read for
//! junctions and may be left empty for spawn points.
//!
//! ```csv
//! kind,x,y,z,yaw,extent_x,extent_y,extent_z
//! spawn,22.0,1.75,0.3,180,,,
//! spawn,-1.75,22.0,0.3,270,,,
//! junction,0,0,0,0,8,8,1
//! ```
//!
//! Spawn points keep file order; that order is what `--spawn-indices` and
//! `--dest-indices` refer to.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ix_core::{Location, Transform};

use crate::map::{Junction, RoadMap};
use crate::{WorldError, WorldResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MapRecord {
    kind:     String,
    x:        f64,
    y:        f64,
    z:        f64,
    #[serde(default)]
    yaw:      Option<f64>,
    #[serde(default)]
    extent_x: Option<f64>,
    #[serde(default)]
    extent_y: Option<f64>,
    #[serde(default)]
    extent_z: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Resolve `name` to a map.
///
/// `Crossroads` (any case) is built in; anything else is treated as a path
/// to a CSV map file whose stem becomes the map name.
pub fn load_map(name: &str) -> WorldResult<RoadMap> {
    if name.eq_ignore_ascii_case("crossroads") {
        return Ok(RoadMap::crossroads());
    }
    let path = Path::new(name);
    if !path.is_file() {
        return Err(WorldError::UnknownMap(name.to_owned()));
    }
    load_map_csv(path)
}

/// Load a map from a CSV file.
pub fn load_map_csv(path: &Path) -> WorldResult<RoadMap> {
    let file = std::fs::File::open(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    load_map_reader(file, &name)
}

/// Like [`load_map_csv`] but accepts any `Read` source.
pub fn load_map_reader<R: Read>(reader: R, name: &str) -> WorldResult<RoadMap> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut spawn_points = Vec::new();
    let mut junctions = Vec::new();

    for (line, result) in csv_reader.deserialize::<MapRecord>().enumerate() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        let location = Location::new(row.x, row.y, row.z);
        if !location.is_finite() {
            return Err(WorldError::Parse(format!("row {}: non-finite coordinates", line + 1)));
        }
        match row.kind.to_ascii_lowercase().as_str() {
            "spawn" => spawn_points.push(Transform::new(location, row.yaw.unwrap_or(0.0))),
            "junction" => junctions.push(Junction {
                center: location,
                extent: Location::new(
                    row.extent_x.unwrap_or(0.0),
                    row.extent_y.unwrap_or(0.0),
                    row.extent_z.unwrap_or(0.0),
                ),
            }),
            other => {
                return Err(WorldError::Parse(format!(
                    "row {}: invalid kind {other:?}: expected \"spawn\" or \"junction\"",
                    line + 1
                )));
            }
        }
    }

    log::debug!(
        "map {name}: loaded {} spawn points, {} junctions",
        spawn_points.len(),
        junctions.len()
    );
    Ok(RoadMap::new(name, spawn_points, junctions))
}
