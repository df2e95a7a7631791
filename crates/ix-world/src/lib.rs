//! `ix-world`: the simulator side of the workspace.
//!
//! Everything here stands between the admission logic and a driving
//! simulator.  The [`World`] trait is the integration seam: map queries,
//! spawning, synchronous stepping, pose queries, and actuator input.
//! [`KinematicWorld`] implements it with straight-line unicycle kinematics so
//! the command-line tool runs without an external simulator.
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`map`]         | `RoadMap`, `Junction`, the built-in `Crossroads` map     |
//! | [`loader`]      | `load_map`, CSV map files                                 |
//! | [`world`]       | `World` trait                                             |
//! | [`kinematic`]   | `KinematicWorld`, `KinematicParams`                       |
//! | [`spawn`]       | index parsing, spawning, destination and centre choice    |
//! | [`error`]       | `WorldError`, `WorldResult<T>`                            |

pub mod error;
pub mod kinematic;
pub mod loader;
pub mod map;
pub mod spawn;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use kinematic::{KinematicParams, KinematicWorld};
pub use loader::{load_map, load_map_csv, load_map_reader};
pub use map::{Junction, RoadMap};
pub use spawn::{parse_indices, resolve_center, resolve_destinations, spawn_vehicles};
pub use world::World;
