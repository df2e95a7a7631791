//! `ArrivalQueue`: vehicles waiting for the crossing token, in FCFS order.
//!
//! # Ordering
//!
//! Entries are keyed by `(arrival_time, vehicle_id)`.  Arrival time is an
//! `f64` ordered with [`f64::total_cmp`]; ties (vehicles registering on the
//! same tick) fall back to ascending `VehicleId`, so the order is identical
//! across runs regardless of the order observations were fed in.
//!
//! A vehicle stays in the queue from arrival until it exits the box, so the
//! head is the current token holder while one exists.  `BTreeSet` gives
//! O(log n) insert/remove and O(log n) head lookup; n is the number of
//! vehicles near one junction, so the constant hardly matters.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use ix_core::VehicleId;

/// Sort key of one queued vehicle.
#[derive(Copy, Clone, Debug)]
pub struct ArrivalKey {
    pub arrival_time: f64,
    pub vehicle:      VehicleId,
}

impl ArrivalKey {
    #[inline]
    pub fn new(arrival_time: f64, vehicle: VehicleId) -> Self {
        Self { arrival_time, vehicle }
    }
}

impl PartialEq for ArrivalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ArrivalKey {}

impl PartialOrd for ArrivalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArrivalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.arrival_time
            .total_cmp(&other.arrival_time)
            .then(self.vehicle.cmp(&other.vehicle))
    }
}

/// FCFS-ordered set of vehicles that have arrived but not yet exited.
#[derive(Default, Debug)]
pub struct ArrivalQueue {
    inner: BTreeSet<ArrivalKey>,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `vehicle` with the given arrival time.
    ///
    /// Returns `false` if the exact key was already present.
    pub fn push(&mut self, arrival_time: f64, vehicle: VehicleId) -> bool {
        self.inner.insert(ArrivalKey::new(arrival_time, vehicle))
    }

    /// Remove the entry for `vehicle`.  Returns `true` if it was queued.
    pub fn remove(&mut self, arrival_time: f64, vehicle: VehicleId) -> bool {
        self.inner.remove(&ArrivalKey::new(arrival_time, vehicle))
    }

    /// The earliest-arrived vehicle, or `None` if the queue is empty.
    pub fn head(&self) -> Option<VehicleId> {
        self.inner.first().map(|k| k.vehicle)
    }

    /// Vehicles in FCFS order.
    pub fn iter(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.inner.iter().map(|k| k.vehicle)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
