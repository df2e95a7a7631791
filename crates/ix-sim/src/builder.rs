//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use ix_admission::AdmissionPolicy;
use ix_agent::{DrivingHelper, VehicleAgent};
use ix_core::SimConfig;
use ix_world::World;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<W, H>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: step size, duration, seed
/// - `W: World`: with the vehicles already spawned
/// - [`AdmissionPolicy`]: built from the intersection geometry
///
/// # Example
///
/// ```rust,ignore
/// let spawned = spawn_vehicles(&mut world, 3, Some(&[0, 1, 2]), &mut rng)?;
/// let mut builder = SimBuilder::new(config, world, policy);
/// for ((id, _), dest) in spawned.into_iter().zip(destinations) {
///     builder = builder.agent(VehicleAgent::new(id, PursuitHelper::default(), dest));
/// }
/// let mut sim = builder.build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<W: World, H: DrivingHelper> {
    config: SimConfig,
    world:  W,
    policy: AdmissionPolicy,
    agents: Vec<VehicleAgent<H>>,
}

impl<W: World, H: DrivingHelper> SimBuilder<W, H> {
    pub fn new(config: SimConfig, world: W, policy: AdmissionPolicy) -> Self {
        Self {
            config,
            world,
            policy,
            agents: Vec::new(),
        }
    }

    /// Add one agent.
    pub fn agent(mut self, agent: VehicleAgent<H>) -> Self {
        self.agents.push(agent);
        self
    }

    /// Add several agents.
    pub fn agents(mut self, agents: impl IntoIterator<Item = VehicleAgent<H>>) -> Self {
        self.agents.extend(agents);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Fails if the config is invalid, an agent's vehicle does not exist in
    /// the world, or two agents share a vehicle.
    pub fn build(mut self) -> SimResult<Sim<W, H>> {
        self.config.validate()?;

        let mut seen = HashSet::with_capacity(self.agents.len());
        for agent in &self.agents {
            let id = agent.vehicle();
            if !self.world.is_alive(id) {
                return Err(SimError::UnknownVehicle(id));
            }
            if !seen.insert(id) {
                return Err(SimError::DuplicateAgent(id));
            }
        }

        // Ascending id keeps control application order deterministic.
        self.agents.sort_by_key(|a| a.vehicle());

        Ok(Sim {
            config:     self.config,
            world:      self.world,
            policy:     self.policy,
            agents:     self.agents,
            start_time: None,
            sim_time:   0.0,
            ticks:      0,
        })
    }
}
