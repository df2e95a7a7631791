//! `ix-agent`: vehicle agent adapter and driving-helper trait.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`control`]  | `ControlCommand`, `Pose`                                       |
//! | [`helper`]   | `DrivingHelper` trait: the external autonomous-driving seam   |
//! | [`pursuit`]  | `PursuitHelper`: a minimal helper for the stand-in world      |
//! | [`agent`]    | `VehicleAgent<H>`: brake on deny, delegate on grant           |
//!
//! # Design notes
//!
//! The adapter holds no state of its own.  Everything about *how* to drive
//! (route, speed control, steering) belongs to the helper, which in a real
//! deployment is the simulator's own autonomous-driving agent.

pub mod agent;
pub mod control;
pub mod helper;
pub mod pursuit;


pub use agent::VehicleAgent;
pub use control::{ControlCommand, Pose};
pub use helper::DrivingHelper;
pub use pursuit::PursuitHelper;
