//! The `Sim` struct and its tick loop.

use ix_admission::AdmissionPolicy;
use ix_agent::{ControlCommand, DrivingHelper, Pose, VehicleAgent};
use ix_core::{Location, SimConfig, VehicleId};
use ix_world::World;

use crate::{SimError, SimObserver, SimResult};

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    pub ticks:      u64,
    pub start_time: f64,
    pub end_time:   f64,
    /// Vehicles that completed the full lifecycle.
    pub completed:  usize,
}

/// The driver loop.
///
/// Each tick, in order:
///
/// 1. **Step** the world once; read the new simulated time.
/// 2. **Prune** agents whose vehicle no longer exists; the policy forgets
///    them (releasing the token if they held it).
/// 3. **Observe** every agent's position and feed the whole tick to
///    [`AdmissionPolicy::tick`].  Transitions go to the observer.
/// 4. **Control**: each agent, in ascending vehicle id, brakes or drives
///    according to its permission; the command is applied to the world.
/// 5. **Report** vehicles that completed their crossing.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<W: World, H: DrivingHelper> {
    pub(crate) config:     SimConfig,
    pub(crate) world:      W,
    pub(crate) policy:     AdmissionPolicy,
    /// Sorted by vehicle id.
    pub(crate) agents:     Vec<VehicleAgent<H>>,
    /// Simulated time of the first tick.
    pub(crate) start_time: Option<f64>,
    /// Simulated time of the latest tick.
    pub(crate) sim_time:   f64,
    pub(crate) ticks:      u64,
}

impl<W: World, H: DrivingHelper> Sim<W, H> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until more than `config.duration_secs` of simulated time have
    /// passed since the first tick.
    ///
    /// Observer errors and world errors abort the run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        log::info!(
            "sim: starting with {} vehicles, {:.3}s step, {:.1}s limit",
            self.agents.len(),
            self.config.delta_secs,
            self.config.duration_secs,
        );

        loop {
            let now = self.process_tick(observer)?;
            let start = self.start_time.unwrap_or(now);
            if self.config.is_expired(start, now) {
                break;
            }
        }
        observer.on_sim_end(self.sim_time).map_err(SimError::Observer)?;

        let report = self.report();
        log::info!(
            "sim: stopped after {} ticks, {} of {} vehicles crossed",
            report.ticks,
            report.completed,
            self.agents.len(),
        );
        Ok(report)
    }

    /// Run exactly `n` ticks regardless of the duration limit.
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }

    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable world access between ticks (e.g. to destroy a vehicle).
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn agents(&self) -> &[VehicleAgent<H>] {
        &self.agents
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulated time of the latest tick (0 before the first).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Returns the tick's simulated time.
    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<f64> {
        // ── Phase 1: step ─────────────────────────────────────────────────
        let now = self.world.tick();
        self.start_time.get_or_insert(now);
        self.sim_time = now;
        self.ticks += 1;
        observer.on_tick_start(now).map_err(SimError::Observer)?;

        // ── Phase 2: prune vehicles that left the world ───────────────────
        let world = &self.world;
        let (alive, gone): (Vec<_>, Vec<_>) = std::mem::take(&mut self.agents)
            .into_iter()
            .partition(|a| world.is_alive(a.vehicle()));
        self.agents = alive;
        for agent in gone {
            let id = agent.vehicle();
            let record = self.policy.forget(id);
            log::warn!("t={now:.2} sim: vehicle {id} left the world");
            observer
                .on_vehicle_removed(id, record.as_ref())
                .map_err(SimError::Observer)?;
        }

        // ── Phase 3: observe + admission ──────────────────────────────────
        //
        // `poses[i]` belongs to `self.agents[i]`; a live vehicle the world
        // cannot place is simply not observed this tick.
        let poses: Vec<Option<Pose>> = self
            .agents
            .iter()
            .map(|a| self.world.pose(a.vehicle()))
            .collect();
        let observations: Vec<(VehicleId, Location)> = self
            .agents
            .iter()
            .zip(&poses)
            .filter_map(|(a, p)| p.map(|p| (a.vehicle(), p.location)))
            .collect();

        let events = self.policy.tick(now, &observations);
        for event in &events {
            observer.on_event(event).map_err(SimError::Observer)?;
        }

        // ── Phase 4: control ──────────────────────────────────────────────
        for (agent, pose) in self.agents.iter_mut().zip(&poses) {
            let id = agent.vehicle();
            let command = match pose {
                Some(pose) => agent.update(self.policy.query_permission(id), pose),
                None => {
                    log::warn!("t={now:.2} sim: no pose for vehicle {id}; braking");
                    ControlCommand::full_brake()
                }
            };
            self.world.apply_control(id, command)?;
        }

        // ── Phase 5: completed crossings ──────────────────────────────────
        for record in self.policy.drain_completed() {
            observer
                .on_vehicle_completed(&record)
                .map_err(SimError::Observer)?;
        }

        observer
            .on_tick_end(now, &self.policy)
            .map_err(SimError::Observer)?;
        Ok(now)
    }

    fn report(&self) -> SimReport {
        SimReport {
            ticks:      self.ticks,
            start_time: self.start_time.unwrap_or(0.0),
            end_time:   self.sim_time,
            completed:  self.policy.records().filter(|r| r.is_complete()).count(),
        }
    }
}
