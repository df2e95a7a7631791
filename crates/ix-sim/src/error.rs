use ix_core::{CoreError, VehicleId};
use ix_world::WorldError;
use thiserror::Error;

/// Error type returned by [`SimObserver`][crate::SimObserver] hooks.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("agent bound to vehicle {0}, which does not exist in the world")]
    UnknownVehicle(VehicleId),

    #[error("more than one agent bound to vehicle {0}")]
    DuplicateAgent(VehicleId),

    #[error("observer failed: {0}")]
    Observer(#[source] ObserverError),
}

pub type SimResult<T> = Result<T, SimError>;
