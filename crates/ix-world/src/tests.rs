//! Unit tests for ix-world.

use ix_agent::ControlCommand;
use ix_core::{Location, SimConfig, SimRng, Transform};

use crate::{KinematicWorld, RoadMap, World, WorldError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn world() -> KinematicWorld {
    let config = SimConfig { delta_secs: 0.1, ..SimConfig::default() };
    KinematicWorld::new(RoadMap::crossroads(), &config)
}

// ── Map ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod map {
    use super::*;

    #[test]
    fn crossroads_layout() {
        let m = RoadMap::crossroads();
        assert_eq!(m.name(), "Crossroads");
        assert_eq!(m.spawn_points().len(), 8);
        assert_eq!(m.junctions().len(), 1);
        // Approach points sit within the default 25 m approach radius.
        for sp in &m.spawn_points()[..4] {
            assert!(sp.location.distance(Location::new(0.0, 0.0, 0.3)) < 25.0);
        }
    }

    #[test]
    fn approach_mean_is_the_centre() {
        let m = RoadMap::crossroads();
        let mean = Location::mean(m.spawn_points()[..4].iter().map(|t| t.location));
        assert!(mean.distance_2d(Location::default()) < 1e-9);
    }

    #[test]
    fn spawn_point_out_of_range() {
        let m = RoadMap::crossroads();
        assert!(matches!(
            m.spawn_point(8),
            Err(WorldError::SpawnIndexOutOfRange { index: 8, available: 8 })
        ));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{load_map, load_map_reader};

    const MAP_CSV: &str = "\
kind,x,y,z,yaw,extent_x,extent_y,extent_z\n\
spawn,10.0,2.0,0.5,180,,,\n\
junction,0,0,0,0,8,8,1\n\
spawn, -10.0 , -2.0, 0.5, 0,,,\n\
";

    #[test]
    fn parses_spawns_and_junctions() {
        let m = load_map_reader(Cursor::new(MAP_CSV), "test").unwrap();
        assert_eq!(m.name(), "test");
        assert_eq!(m.spawn_points().len(), 2);
        assert_eq!(m.spawn_points()[1], Transform::new(Location::new(-10.0, -2.0, 0.5), 0.0));
        assert_eq!(m.junctions()[0].extent, Location::new(8.0, 8.0, 1.0));
    }

    #[test]
    fn rejects_unknown_kind() {
        let csv = "kind,x,y,z,yaw,extent_x,extent_y,extent_z\nlamp,0,0,0,0,,,\n";
        let err = load_map_reader(Cursor::new(csv), "bad").unwrap_err();
        assert!(matches!(err, WorldError::Parse(_)), "got {err}");
    }

    #[test]
    fn rejects_malformed_number() {
        let csv = "kind,x,y,z,yaw,extent_x,extent_y,extent_z\nspawn,abc,0,0,0,,,\n";
        assert!(load_map_reader(Cursor::new(csv), "bad").is_err());
    }

    #[test]
    fn builtin_name_is_case_insensitive() {
        assert_eq!(load_map("crossroads").unwrap(), RoadMap::crossroads());
        assert_eq!(load_map("CROSSROADS").unwrap(), RoadMap::crossroads());
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(matches!(load_map("Town05"), Err(WorldError::UnknownMap(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plaza.csv");
        std::fs::write(&path, MAP_CSV).unwrap();
        let m = load_map(path.to_str().unwrap()).unwrap();
        assert_eq!(m.name(), "plaza");
        assert_eq!(m.spawn_points().len(), 2);
    }
}

// ── KinematicWorld ────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinematic {
    use super::*;

    #[test]
    fn spawn_assigns_distinct_ids() {
        let mut w = world();
        let a = w.spawn_vehicle(RoadMap::crossroads().spawn_points()[0]).unwrap();
        let b = w.spawn_vehicle(RoadMap::crossroads().spawn_points()[1]).unwrap();
        assert_ne!(a, b);
        assert_eq!(w.vehicle_count(), 2);
        assert!(w.is_alive(a));
    }

    #[test]
    fn spawn_on_occupied_point_fails() {
        let mut w = world();
        let sp = RoadMap::crossroads().spawn_points()[0];
        w.spawn_vehicle(sp).unwrap();
        assert!(matches!(w.spawn_vehicle(sp), Err(WorldError::SpawnCollision(_))));
    }

    #[test]
    fn braked_vehicle_stays_put() {
        let mut w = world();
        let sp = RoadMap::crossroads().spawn_points()[0];
        let id = w.spawn_vehicle(sp).unwrap();
        for _ in 0..50 {
            w.tick();
        }
        assert_eq!(w.location(id), Some(sp.location));
    }

    #[test]
    fn throttle_moves_along_heading() {
        let mut w = world();
        // Spawn 2 faces east (+x).
        let sp = RoadMap::crossroads().spawn_points()[2];
        let id = w.spawn_vehicle(sp).unwrap();
        w.apply_control(id, ControlCommand::new(1.0, 0.0, 0.0)).unwrap();
        for _ in 0..10 {
            w.tick();
        }
        let pose = w.pose(id).unwrap();
        assert!(pose.location.x > sp.location.x);
        assert!((pose.location.y - sp.location.y).abs() < 1e-9);
        assert!((pose.speed_mps - 3.0).abs() < 1e-9);
    }

    #[test]
    fn tick_reports_elapsed_seconds() {
        let mut w = world();
        assert!((w.tick() - 0.1).abs() < 1e-12);
        assert!((w.tick() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn destroy_removes_vehicle() {
        let mut w = world();
        let id = w.spawn_vehicle(RoadMap::crossroads().spawn_points()[0]).unwrap();
        assert!(w.destroy(id));
        assert!(!w.is_alive(id));
        assert!(!w.destroy(id));
        assert!(matches!(
            w.apply_control(id, ControlCommand::full_brake()),
            Err(WorldError::VehicleNotFound(_))
        ));
    }
}

// ── Scenario setup ────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn {
    use super::*;
    use crate::{parse_indices, resolve_center, resolve_destinations, spawn_vehicles};

    #[test]
    fn parse_indices_tolerates_spaces_and_trailing_comma() {
        assert_eq!(parse_indices("3, 7,12,").unwrap(), vec![3, 7, 12]);
        assert!(parse_indices("").unwrap().is_empty());
        assert!(parse_indices("1,x").is_err());
    }

    #[test]
    fn spawn_by_index_keeps_order() {
        let mut w = world();
        let spawned = spawn_vehicles(&mut w, 2, Some(&[3, 1, 0]), &mut SimRng::new(0)).unwrap();
        let m = RoadMap::crossroads();
        assert_eq!(spawned.len(), 2);
        assert_eq!(spawned[0].1, m.spawn_points()[3]);
        assert_eq!(spawned[1].1, m.spawn_points()[1]);
    }

    #[test]
    fn spawn_shuffled_is_seeded() {
        let a = spawn_vehicles(&mut world(), 4, None, &mut SimRng::new(9)).unwrap();
        let b = spawn_vehicles(&mut world(), 4, None, &mut SimRng::new(9)).unwrap();
        let pa: Vec<_> = a.iter().map(|(_, t)| t.location).collect();
        let pb: Vec<_> = b.iter().map(|(_, t)| t.location).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn too_many_vehicles() {
        let err = spawn_vehicles(&mut world(), 9, None, &mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, WorldError::NotEnoughSpawnPoints { needed: 9, available: 8 }));
    }

    #[test]
    fn too_few_indices() {
        let err = spawn_vehicles(&mut world(), 3, Some(&[0, 1]), &mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, WorldError::TooFewSpawnIndices { needed: 3, given: 2 }));
    }

    #[test]
    fn destinations_fall_back_to_last_spawn_point() {
        let m = RoadMap::crossroads();
        let d = resolve_destinations(&m, 3, Some(&[4])).unwrap();
        assert_eq!(d[0], m.spawn_points()[4].location);
        assert_eq!(d[1], m.spawn_points()[7].location);
        assert_eq!(d[2], m.spawn_points()[7].location);
    }

    #[test]
    fn centre_prefers_explicit_coordinates() {
        let m = RoadMap::crossroads();
        let c = resolve_center(&m, Some(5.0), Some(6.0), None, Some(&[0, 1])).unwrap();
        assert_eq!(c, Location::new(5.0, 6.0, m.spawn_points()[0].location.z));
        let c = resolve_center(&m, Some(5.0), Some(6.0), Some(2.0), None).unwrap();
        assert_eq!(c.z, 2.0);
    }

    #[test]
    fn centre_needs_both_x_and_y() {
        let m = RoadMap::crossroads();
        let c = resolve_center(&m, Some(5.0), None, None, None).unwrap();
        assert_eq!(c, m.spawn_points()[0].location);
    }

    #[test]
    fn centre_from_spawn_mean() {
        let m = RoadMap::crossroads();
        let c = resolve_center(&m, None, None, None, Some(&[0, 1, 2, 3])).unwrap();
        assert!(c.distance_2d(Location::default()) < 1e-9);
    }

    #[test]
    fn empty_map_has_no_centre() {
        let m = RoadMap::new("empty", vec![], vec![]);
        assert!(matches!(resolve_center(&m, None, None, None, None), Err(WorldError::NoSpawnPoints)));
        assert!(matches!(resolve_destinations(&m, 1, None), Err(WorldError::NoSpawnPoints)));
    }
}
