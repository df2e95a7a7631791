//! `ix-sim`: the synchronous driver loop.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Step    : world.tick(); read simulated time.
//!   ② Prune   : agents whose vehicle vanished are forgotten by the policy.
//!   ③ Admit   : AdmissionPolicy::tick with every agent's position;
//!               transitions → observer.on_event.
//!   ④ Control : per agent, ascending VehicleId:
//!                 no permission → full brake
//!                 permission    → driving helper
//!   ⑤ Report  : drained completed records → observer.on_vehicle_completed.
//! until more than duration_secs have passed since the first tick
//! ```
//!
//! Everything is single-threaded; the policy is mutated only in ③.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ix_admission::{AdmissionPolicy, IntersectionConfig};
//! use ix_core::SimConfig;
//! use ix_sim::{NoopObserver, SimBuilder};
//!
//! let policy = AdmissionPolicy::new(&IntersectionConfig::default())?;
//! let mut sim = SimBuilder::new(SimConfig::default(), world, policy)
//!     .agents(agents)
//!     .build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{ObserverError, SimError, SimResult};
pub use observer::{NoopObserver, ObserverResult, SimObserver};
pub use sim::{Sim, SimReport};
