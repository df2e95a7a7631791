//! World-subsystem error type.

use thiserror::Error;

use ix_core::{Location, VehicleId};

/// Errors produced by `ix-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown map {0:?}: not a built-in map name or a readable file")]
    UnknownMap(String),

    #[error("map parse error: {0}")]
    Parse(String),

    #[error("map has no spawn points")]
    NoSpawnPoints,

    #[error("not enough spawn points for {needed} vehicles (map has {available})")]
    NotEnoughSpawnPoints { needed: usize, available: usize },

    #[error("spawn index {index} out of range (map has {available} spawn points)")]
    SpawnIndexOutOfRange { index: usize, available: usize },

    #[error("{needed} vehicles requested but only {given} spawn indices given")]
    TooFewSpawnIndices { needed: usize, given: usize },

    #[error("spawn point {0} is occupied")]
    SpawnCollision(Location),

    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
