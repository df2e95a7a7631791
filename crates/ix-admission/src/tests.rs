//! Unit tests for ix-admission.

use ix_core::{Location, VehicleId};

use crate::{AdmissionEvent, AdmissionPolicy, EventKind, IntersectionConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Box of half-extent 8 m around the origin, 25 m approach radius.
fn policy() -> AdmissionPolicy {
    AdmissionPolicy::new(&IntersectionConfig::default()).unwrap()
}

const FAR:      Location = Location::new(100.0, 0.0, 0.0);
const NEAR:     Location = Location::new(20.0, 0.0, 0.0);
const INSIDE:   Location = Location::new(0.0, 0.0, 0.0);
const BEYOND:   Location = Location::new(-20.0, 0.0, 0.0);

fn v(n: u32) -> VehicleId {
    VehicleId(n)
}

fn kinds(events: &[AdmissionEvent]) -> Vec<(u32, EventKind)> {
    events.iter().map(|e| (e.vehicle.0, e.kind)).collect()
}

fn permissions(events: &[AdmissionEvent]) -> Vec<u32> {
    events
        .iter()
        .filter(|e| e.kind == EventKind::Permission)
        .map(|e| e.vehicle.0)
        .collect()
}

// ── IntersectionBox ───────────────────────────────────────────────────────────

#[cfg(test)]
mod intersection {
    use super::*;
    use crate::IntersectionBox;

    #[test]
    fn box_edges_are_inclusive() {
        let b = IntersectionBox::new(&IntersectionConfig::default()).unwrap();
        assert!(b.contains(Location::new(8.0, -8.0, 0.0)));
        assert!(!b.contains(Location::new(8.01, 0.0, 0.0)));
    }

    #[test]
    fn box_ignores_height() {
        let b = IntersectionBox::new(&IntersectionConfig::default()).unwrap();
        assert!(b.contains(Location::new(1.0, 1.0, 50.0)));
    }

    #[test]
    fn approach_zone_is_a_sphere() {
        let b = IntersectionBox::new(&IntersectionConfig::default()).unwrap();
        assert!(b.in_approach_zone(Location::new(15.0, 20.0, 0.0)));
        assert!(!b.in_approach_zone(Location::new(15.0, 20.0, 1.0)));
    }

    #[test]
    fn centre_is_respected() {
        let cfg = IntersectionConfig {
            center: Location::new(-47.0, 12.0, 0.3),
            ..IntersectionConfig::default()
        };
        let b = IntersectionBox::new(&cfg).unwrap();
        assert!(b.contains(Location::new(-50.0, 10.0, 0.0)));
        assert!(!b.contains(INSIDE));
    }

    #[test]
    fn rejects_non_positive_geometry() {
        let cfg = IntersectionConfig { box_half_extent: 0.0, ..IntersectionConfig::default() };
        assert!(IntersectionBox::new(&cfg).is_err());
        let cfg = IntersectionConfig { approach_radius: -1.0, ..IntersectionConfig::default() };
        assert!(IntersectionBox::new(&cfg).is_err());
        let cfg = IntersectionConfig {
            center: Location::new(f64::NAN, 0.0, 0.0),
            ..IntersectionConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}

// ── ArrivalQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;
    use crate::ArrivalQueue;

    #[test]
    fn orders_by_time_then_id() {
        let mut q = ArrivalQueue::new();
        q.push(1.0, v(5));
        q.push(0.5, v(9));
        q.push(1.0, v(2));
        assert_eq!(q.iter().collect::<Vec<_>>(), vec![v(9), v(2), v(5)]);
        assert_eq!(q.head(), Some(v(9)));
    }

    #[test]
    fn remove_needs_matching_time() {
        let mut q = ArrivalQueue::new();
        q.push(1.0, v(1));
        assert!(!q.remove(2.0, v(1)));
        assert!(q.remove(1.0, v(1)));
        assert!(q.is_empty());
        assert_eq!(q.head(), None);
    }

    #[test]
    fn duplicate_push_is_rejected() {
        let mut q = ArrivalQueue::new();
        assert!(q.push(1.0, v(1)));
        assert!(!q.push(1.0, v(1)));
        assert_eq!(q.len(), 1);
    }
}

// ── Registration ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod registration {
    use super::*;
    use crate::VehicleState;

    #[test]
    fn outside_radius_is_not_tracked() {
        let mut p = policy();
        assert!(p.on_tick(v(1), FAR, 0.0).is_empty());
        assert!(p.record(v(1)).is_none());
        assert!(!p.query_permission(v(1)));
    }

    #[test]
    fn first_arrival_is_granted_immediately() {
        let mut p = policy();
        let events = p.on_tick(v(1), NEAR, 0.5);
        assert_eq!(kinds(&events), vec![(1, EventKind::Arrival), (1, EventKind::Permission)]);

        let r = p.record(v(1)).unwrap();
        assert_eq!(r.state, VehicleState::Permitted);
        assert_eq!(r.arrival_time, 0.5);
        assert_eq!(r.permission_time, Some(0.5));
        assert!(p.query_permission(v(1)));
    }

    #[test]
    fn later_arrival_waits() {
        let mut p = policy();
        p.on_tick(v(1), NEAR, 0.0);
        let events = p.on_tick(v(2), NEAR, 0.1);
        assert_eq!(kinds(&events), vec![(2, EventKind::Arrival)]);
        assert_eq!(p.record(v(2)).unwrap().state, VehicleState::Waiting);
        assert!(!p.query_permission(v(2)));
    }

    #[test]
    fn arrival_time_is_not_overwritten() {
        let mut p = policy();
        p.on_tick(v(1), NEAR, 0.0);
        p.on_tick(v(2), NEAR, 0.0);
        p.on_tick(v(2), Location::new(15.0, 0.0, 0.0), 3.0);
        assert_eq!(p.record(v(2)).unwrap().arrival_time, 0.0);
        assert_eq!(p.record(v(2)).unwrap().position, Location::new(15.0, 0.0, 0.0));
    }

    #[test]
    fn non_finite_observation_is_ignored() {
        let mut p = policy();
        p.on_tick(v(1), NEAR, 0.0);
        p.on_tick(v(1), INSIDE, 0.1);
        let events = p.on_tick(v(1), Location::new(f64::NAN, 0.0, 0.0), 0.2);
        assert!(events.is_empty());
        assert_eq!(p.record(v(1)).unwrap().state, VehicleState::InBox);
    }
}

// ── FCFS ordering ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod fcfs {
    use super::*;

    /// A(1) and B(2) arrive at 1.0, C(3) arrives at 0.5 → C, A, B.
    #[test]
    fn equal_arrivals_break_ties_by_id() {
        let (a, b, c) = (v(1), v(2), v(3));
        let mut p = policy();
        let mut order = vec![];

        order.extend(permissions(&p.tick(0.5, &[(c, NEAR)])));
        order.extend(permissions(&p.tick(1.0, &[(b, NEAR), (a, NEAR), (c, INSIDE)])));
        order.extend(permissions(&p.tick(1.5, &[(a, NEAR), (b, NEAR), (c, BEYOND)])));
        order.extend(permissions(&p.tick(2.0, &[(a, INSIDE), (b, NEAR)])));
        order.extend(permissions(&p.tick(2.5, &[(a, BEYOND), (b, NEAR)])));

        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn batch_result_ignores_observation_order() {
        let run = |obs: &[(VehicleId, Location)]| {
            let mut p = policy();
            permissions(&p.tick(0.0, obs))
        };
        let forward = run(&[(v(4), NEAR), (v(7), NEAR), (v(9), NEAR)]);
        let reverse = run(&[(v(9), NEAR), (v(7), NEAR), (v(4), NEAR)]);
        assert_eq!(forward, vec![4]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn on_tick_in_ascending_id_matches_batch() {
        let mut p = policy();
        p.on_tick(v(1), NEAR, 1.0);
        p.on_tick(v(2), NEAR, 1.0);
        assert!(p.query_permission(v(1)));
        assert!(!p.query_permission(v(2)));
    }

    #[test]
    fn permission_times_follow_arrival_order() {
        let mut p = policy();
        // Five vehicles arriving on staggered ticks, each crossing in turn.
        let mut t = 0.0;
        for id in 1..=5 {
            p.tick(t, &[(v(id), NEAR)]);
            t += 0.1;
        }
        for id in 1..=5 {
            p.tick(t, &[(v(id), INSIDE)]);
            t += 0.1;
            p.tick(t, &[(v(id), BEYOND)]);
            t += 0.1;
        }

        let recs: Vec<_> = p.records().collect();
        assert_eq!(recs.len(), 5);
        for pair in recs.windows(2) {
            assert!(pair[0].arrival_time <= pair[1].arrival_time);
            assert!(pair[0].permission_time.unwrap() <= pair[1].permission_time.unwrap());
        }
        for r in recs {
            let (perm, entry, exit) = (
                r.permission_time.unwrap(),
                r.entry_time.unwrap(),
                r.exit_time.unwrap(),
            );
            assert!(r.arrival_time <= perm && perm <= entry && entry <= exit);
        }
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use super::*;
    use crate::{Occupancy, VehicleState};

    #[test]
    fn entry_requires_permission() {
        let mut p = policy();
        p.on_tick(v(1), NEAR, 0.0);
        p.on_tick(v(2), NEAR, 0.0);
        // Vehicle 2 rolls into the box without permission; it stays queued.
        let events = p.on_tick(v(2), INSIDE, 0.1);
        assert!(events.is_empty());
        assert_eq!(p.record(v(2)).unwrap().state, VehicleState::Waiting);
        assert_eq!(p.in_box_count(), 0);
    }

    #[test]
    fn token_reserved_then_occupied_then_freed() {
        let mut p = policy();
        p.on_tick(v(1), NEAR, 0.0);
        assert_eq!(p.occupancy(), Occupancy::Reserved(v(1)));
        p.on_tick(v(1), INSIDE, 1.0);
        assert_eq!(p.occupancy(), Occupancy::Occupied(v(1)));
        assert_eq!(p.occupancy().occupant(), Some(v(1)));
        p.on_tick(v(1), BEYOND, 2.0);
        assert!(p.occupancy().is_free());
        assert_eq!(p.queue_len(), 0);
        assert!(!p.query_permission(v(1)));
    }

    #[test]
    fn exit_unblocks_exactly_the_next_vehicle() {
        let mut p = policy();
        p.tick(0.0, &[(v(1), NEAR), (v(2), NEAR), (v(3), NEAR)]);
        p.tick(1.0, &[(v(1), INSIDE), (v(2), NEAR), (v(3), NEAR)]);
        let events = p.tick(2.0, &[(v(1), BEYOND), (v(2), NEAR), (v(3), NEAR)]);

        assert_eq!(kinds(&events), vec![(1, EventKind::Exit), (2, EventKind::Permission)]);
        assert!(p.query_permission(v(2)));
        assert!(!p.query_permission(v(3)));
        assert_eq!(p.record(v(3)).unwrap().state, VehicleState::Waiting);
    }

    #[test]
    fn at_most_one_vehicle_in_box() {
        // Vehicles start on different arms and creep 1 m per tick toward the
        // centre only while permitted, mimicking brake-on-deny.
        let mut p = policy();
        let mut pos: Vec<(VehicleId, f64)> = (1..=4).map(|i| (v(i), 30.0 + i as f64)).collect();
        let mut max_in_box = 0;
        for step in 0..400 {
            let t = step as f64 * 0.05;
            let obs: Vec<_> = pos
                .iter()
                .map(|&(id, d)| (id, Location::new(d, 0.0, 0.0)))
                .collect();
            p.tick(t, &obs);
            max_in_box = max_in_box.max(p.in_box_count());
            for (id, d) in pos.iter_mut() {
                if p.query_permission(*id) || *d > 25.5 {
                    *d -= 1.0;
                }
            }
        }
        assert_eq!(max_in_box, 1);
        assert!(p.records().all(|r| r.state == VehicleState::Exited));
    }

    /// Documented limitation: a permitted vehicle that stalls before the box
    /// keeps the token and blocks every later vehicle.
    #[test]
    fn stalled_vehicle_blocks_forever() {
        let mut p = policy();
        p.tick(0.0, &[(v(1), NEAR), (v(2), NEAR)]);
        for step in 1..10_000 {
            let t = step as f64 * 0.05;
            let events = p.tick(t, &[(v(1), NEAR), (v(2), NEAR)]);
            assert!(events.is_empty());
        }
        assert_eq!(p.occupancy(), Occupancy::Reserved(v(1)));
        assert!(!p.query_permission(v(2)));
    }
}

// ── Completion and removal ────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;
    use crate::{Occupancy, VehicleState};

    #[test]
    fn drain_completed_returns_each_record_once() {
        let mut p = policy();
        p.on_tick(v(1), NEAR, 0.0);
        assert!(p.drain_completed().is_empty());
        p.on_tick(v(1), INSIDE, 1.0);
        p.on_tick(v(1), BEYOND, 2.0);

        let done = p.drain_completed();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].vehicle_id, v(1));
        assert_eq!(done[0].exit_time, Some(2.0));
        assert!(p.drain_completed().is_empty());
        assert!(p.record(v(1)).unwrap().is_exported());
    }

    #[test]
    fn exited_vehicle_is_not_requeued() {
        let mut p = policy();
        p.on_tick(v(1), NEAR, 0.0);
        p.on_tick(v(1), INSIDE, 1.0);
        p.on_tick(v(1), BEYOND, 2.0);
        assert!(p.on_tick(v(1), NEAR, 3.0).is_empty());
        assert_eq!(p.record(v(1)).unwrap().state, VehicleState::Exited);
    }

    #[test]
    fn forget_releases_the_token() {
        let mut p = policy();
        p.tick(0.0, &[(v(1), NEAR), (v(2), NEAR)]);
        let gone = p.forget(v(1)).unwrap();
        assert_eq!(gone.state, VehicleState::Permitted);
        assert!(p.occupancy().is_free());

        let events = p.tick(0.1, &[(v(2), NEAR)]);
        assert_eq!(permissions(&events), vec![2]);
        assert_eq!(p.occupancy(), Occupancy::Reserved(v(2)));
    }

    #[test]
    fn forget_waiting_vehicle_keeps_holder() {
        let mut p = policy();
        p.tick(0.0, &[(v(1), NEAR), (v(2), NEAR)]);
        p.forget(v(2));
        assert_eq!(p.occupancy(), Occupancy::Reserved(v(1)));
        assert_eq!(p.queue_len(), 1);
        assert!(p.forget(v(99)).is_none());
    }
}
