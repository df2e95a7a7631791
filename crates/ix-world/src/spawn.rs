//! Scenario setup: which spawn points, which destinations, which centre.

use ix_core::{Location, SimRng, Transform, VehicleId};

use crate::{RoadMap, World, WorldError, WorldResult};

/// Parse a comma-separated index list such as `"3, 7,12"`.
///
/// Empty items are skipped, so a trailing comma is harmless.
pub fn parse_indices(raw: &str) -> WorldResult<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>().map_err(|_| {
                WorldError::Parse(format!("could not parse indices from {raw:?}: {s:?} is not an index"))
            })
        })
        .collect()
}

/// Spawn `count` vehicles.
///
/// With `indices`, vehicle `i` spawns at spawn point `indices[i]`.  Without,
/// spawn points are shuffled with `rng` and the first `count` are used.
/// Returns each vehicle's id and spawn transform, in spawn order.
pub fn spawn_vehicles<W: World>(
    world:   &mut W,
    count:   usize,
    indices: Option<&[usize]>,
    rng:     &mut SimRng,
) -> WorldResult<Vec<(VehicleId, Transform)>> {
    let available = world.map().spawn_points().len();
    if available < count {
        return Err(WorldError::NotEnoughSpawnPoints { needed: count, available });
    }

    let chosen: Vec<Transform> = match indices {
        Some(indices) => {
            if indices.len() < count {
                return Err(WorldError::TooFewSpawnIndices { needed: count, given: indices.len() });
            }
            indices[..count]
                .iter()
                .map(|&i| world.map().spawn_point(i))
                .collect::<WorldResult<_>>()?
        }
        None => {
            let mut points = world.map().spawn_points().to_vec();
            rng.shuffle(&mut points);
            points.truncate(count);
            points
        }
    };

    chosen
        .into_iter()
        .map(|at| {
            let id = world.spawn_vehicle(at)?;
            log::info!("spawned vehicle {id} at {}", at.location);
            Ok((id, at))
        })
        .collect()
}

/// Destination for each of `count` vehicles.
///
/// Vehicle `i` heads for spawn point `dest_indices[i]` when given, otherwise
/// for the map's last spawn point.
pub fn resolve_destinations(
    map:          &RoadMap,
    count:        usize,
    dest_indices: Option<&[usize]>,
) -> WorldResult<Vec<Location>> {
    let fallback = map
        .spawn_points()
        .last()
        .ok_or(WorldError::NoSpawnPoints)?
        .location;

    (0..count)
        .map(|i| match dest_indices.and_then(|d| d.get(i)) {
            Some(&idx) => Ok(map.spawn_point(idx)?.location),
            None => Ok(fallback),
        })
        .collect()
}

/// Pick the intersection centre.
///
/// In order of preference: explicit `x`/`y` (with `z` defaulting to the
/// first spawn point's height); the mean of the chosen spawn points; the
/// first spawn point.
pub fn resolve_center(
    map:           &RoadMap,
    x:             Option<f64>,
    y:             Option<f64>,
    z:             Option<f64>,
    spawn_indices: Option<&[usize]>,
) -> WorldResult<Location> {
    let first = map.spawn_points().first().ok_or(WorldError::NoSpawnPoints)?.location;

    if let (Some(x), Some(y)) = (x, y) {
        return Ok(Location::new(x, y, z.unwrap_or(first.z)));
    }

    match spawn_indices {
        Some(indices) if !indices.is_empty() => {
            let points = indices
                .iter()
                .map(|&i| map.spawn_point(i).map(|t| t.location))
                .collect::<WorldResult<Vec<_>>>()?;
            Ok(Location::mean(points))
        }
        _ => Ok(first),
    }
}
