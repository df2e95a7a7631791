//! Simulation time model.
//!
//! # Design
//!
//! The simulator advances in fixed steps.  Time is represented as a
//! monotonically increasing `Tick` counter; the mapping to simulated seconds
//! is held in `SimClock`:
//!
//!   elapsed_secs = tick * delta_secs
//!
//! Deriving seconds from an integer tick (rather than accumulating a float)
//! means every vehicle observed on the same tick sees a bit-identical
//! timestamp, which the FCFS tie-break relies on.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Fixed-step clock.  Owned by whichever world implementation does the
/// stepping.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds per tick.
    pub delta_secs: f64,
    /// The current tick: advanced by `SimClock::advance()` each step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(delta_secs: f64) -> Self {
        Self {
            delta_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.secs_at(self.current_tick)
    }

    /// Simulated seconds at an arbitrary tick.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.delta_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration.
///
/// Populated from command-line flags by the application crate and passed to
/// the world and the driver loop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Fixed simulated seconds per tick (synchronous mode).  Default: 0.05.
    pub delta_secs: f64,

    /// Stop once this many simulated seconds have elapsed since the first
    /// tick.  Default: 120.
    pub duration_secs: f64,

    /// Master RNG seed.  The same seed always produces the same spawn order.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            delta_secs:    0.05,
            duration_secs: 120.0,
            seed:          42,
        }
    }
}

impl SimConfig {
    /// Reject non-positive or non-finite step sizes and durations.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.delta_secs.is_finite() && self.delta_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "delta must be a positive number of seconds, got {}",
                self.delta_secs
            )));
        }
        if !(self.duration_secs.is_finite() && self.duration_secs >= 0.0) {
            return Err(CoreError::Config(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }

    /// `true` once more than `duration_secs` have passed between `start`
    /// and `now`.
    #[inline]
    pub fn is_expired(&self, start: f64, now: f64) -> bool {
        now - start > self.duration_secs
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.delta_secs)
    }
}
