//! The `AdmissionPolicy` state machine.

use std::collections::BTreeMap;

use ix_core::{Location, VehicleId};

use crate::{
    AdmissionEvent, AdmissionResult, ArrivalQueue, EventKind, IntersectionBox,
    IntersectionConfig, Occupancy, VehicleRecord, VehicleState,
};

/// First-come-first-served admission to a single intersection box.
///
/// One instance owns all intersection state: vehicle records, the arrival
/// queue, and the crossing token.  The driver loop feeds it positions every
/// tick and reads permissions back; nothing else mutates it.
///
/// # Two entry points
///
/// - [`on_tick`][Self::on_tick] processes one vehicle.  Callers that use it
///   must feed vehicles in ascending id within a tick for equal-time
///   arrivals to be ordered correctly.
/// - [`tick`][Self::tick] processes a whole tick: it registers every arrival
///   and box transition first, then grants the token, so the outcome does
///   not depend on observation order.
#[derive(Debug)]
pub struct AdmissionPolicy {
    intersection: IntersectionBox,
    records:      BTreeMap<VehicleId, VehicleRecord>,
    queue:        ArrivalQueue,
    occupancy:    Occupancy,
}

impl AdmissionPolicy {
    pub fn new(config: &IntersectionConfig) -> AdmissionResult<Self> {
        Ok(Self::with_intersection(IntersectionBox::new(config)?))
    }

    pub fn with_intersection(intersection: IntersectionBox) -> Self {
        Self {
            intersection,
            records:   BTreeMap::new(),
            queue:     ArrivalQueue::new(),
            occupancy: Occupancy::Free,
        }
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Advance one vehicle's state machine with its position at `sim_time`.
    ///
    /// Returns the transitions that happened, in order (a vehicle can arrive
    /// and be granted permission in the same call).
    pub fn on_tick(
        &mut self,
        vehicle:  VehicleId,
        position: Location,
        sim_time: f64,
    ) -> Vec<AdmissionEvent> {
        let mut events = Vec::new();
        self.observe(vehicle, position, sim_time, &mut events);
        if self.queue.head() == Some(vehicle) {
            self.grant_head(sim_time, &mut events);
        }
        self.settle(vehicle);
        events
    }

    /// Advance every observed vehicle for one tick.
    ///
    /// Observations are processed in ascending vehicle id; all arrivals and
    /// box transitions are applied before the token is granted.
    pub fn tick(
        &mut self,
        sim_time:     f64,
        observations: &[(VehicleId, Location)],
    ) -> Vec<AdmissionEvent> {
        let mut sorted: Vec<(VehicleId, Location)> = observations.to_vec();
        sorted.sort_by_key(|&(id, _)| id);

        let mut events = Vec::new();
        for &(vehicle, position) in &sorted {
            self.observe(vehicle, position, sim_time, &mut events);
        }
        self.grant_head(sim_time, &mut events);
        for &(vehicle, _) in &sorted {
            self.settle(vehicle);
        }
        events
    }

    /// Stop tracking a vehicle that no longer exists in the world.
    ///
    /// Its queue slot is dropped and, if it held the token, the token is
    /// released.  Returns the record, if the vehicle was tracked.
    pub fn forget(&mut self, vehicle: VehicleId) -> Option<VehicleRecord> {
        let record = self.records.remove(&vehicle)?;
        self.queue.remove(record.arrival_time, vehicle);
        if self.occupancy.holder() == Some(vehicle) {
            log::warn!(
                "admission: vehicle {vehicle} removed while holding the token ({}); releasing",
                record.state,
            );
            self.occupancy = Occupancy::Free;
        }
        Some(record)
    }

    /// Records of vehicles that exited since the last call, each returned
    /// exactly once, in ascending vehicle id.
    pub fn drain_completed(&mut self) -> Vec<VehicleRecord> {
        self.records
            .values_mut()
            .filter(|r| r.is_complete() && !r.exported)
            .map(|r| {
                r.exported = true;
                r.clone()
            })
            .collect()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` iff `vehicle` is `Permitted` or `InBox`.
    pub fn query_permission(&self, vehicle: VehicleId) -> bool {
        self.records
            .get(&vehicle)
            .is_some_and(|r| r.state.has_permission())
    }

    pub fn record(&self, vehicle: VehicleId) -> Option<&VehicleRecord> {
        self.records.get(&vehicle)
    }

    /// All tracked records in ascending vehicle id.
    pub fn records(&self) -> impl Iterator<Item = &VehicleRecord> + '_ {
        self.records.values()
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Vehicles queued or holding the token, in FCFS order.
    pub fn queue(&self) -> &ArrivalQueue {
        &self.queue
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn in_box_count(&self) -> usize {
        self.records
            .values()
            .filter(|r| r.state == VehicleState::InBox)
            .count()
    }

    pub fn intersection(&self) -> &IntersectionBox {
        &self.intersection
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Registration and box transitions for one observation.
    fn observe(
        &mut self,
        vehicle:  VehicleId,
        position: Location,
        sim_time: f64,
        events:   &mut Vec<AdmissionEvent>,
    ) {
        if !position.is_finite() || !sim_time.is_finite() {
            log::warn!("admission: ignoring non-finite observation for vehicle {vehicle} at t={sim_time}");
            return;
        }

        let in_box = self.intersection.contains(position);
        let Some(record) = self.records.get_mut(&vehicle) else {
            if self.intersection.in_approach_zone(position) {
                self.records
                    .insert(vehicle, VehicleRecord::new(vehicle, position, sim_time));
                self.queue.push(sim_time, vehicle);
                log::debug!("t={sim_time:.2} admission: vehicle {vehicle} arrived at {position}");
                events.push(AdmissionEvent { vehicle, kind: EventKind::Arrival, sim_time });
            }
            return;
        };

        record.position = position;
        match record.state {
            VehicleState::Permitted if in_box => {
                debug_assert_eq!(self.occupancy, Occupancy::Reserved(vehicle));
                record.state = VehicleState::InBox;
                record.entry_time = Some(sim_time);
                self.occupancy = Occupancy::Occupied(vehicle);
                log::debug!("t={sim_time:.2} admission: vehicle {vehicle} entered the box");
                events.push(AdmissionEvent { vehicle, kind: EventKind::Entry, sim_time });
            }
            VehicleState::InBox if !in_box => {
                debug_assert_eq!(self.occupancy, Occupancy::Occupied(vehicle));
                record.state = VehicleState::Exited;
                record.exit_time = Some(sim_time);
                self.occupancy = Occupancy::Free;
                self.queue.remove(record.arrival_time, vehicle);
                log::debug!("t={sim_time:.2} admission: vehicle {vehicle} exited the box");
                events.push(AdmissionEvent { vehicle, kind: EventKind::Exit, sim_time });
            }
            _ => {}
        }
    }

    /// Grant the token to the queue head if it is free.
    fn grant_head(&mut self, sim_time: f64, events: &mut Vec<AdmissionEvent>) {
        if !self.occupancy.is_free() {
            return;
        }
        let Some(head) = self.queue.head() else {
            return;
        };
        let Some(record) = self.records.get_mut(&head) else {
            return;
        };
        if !record.state.is_queued() {
            return;
        }

        record.state = VehicleState::Permitted;
        record.permission_time = Some(sim_time);
        self.occupancy = Occupancy::Reserved(head);
        log::info!(
            "t={sim_time:.2} admission: permission granted to vehicle {head} (arrived t={:.2}, {} queued behind)",
            record.arrival_time,
            self.queue.len() - 1,
        );
        events.push(AdmissionEvent { vehicle: head, kind: EventKind::Permission, sim_time });
    }

    /// A vehicle left `Approaching` without the token is now waiting.
    fn settle(&mut self, vehicle: VehicleId) {
        if let Some(record) = self.records.get_mut(&vehicle) {
            if record.state == VehicleState::Approaching {
                record.state = VehicleState::Waiting;
            }
        }
    }
}
