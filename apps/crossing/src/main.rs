//! crossing: first-come-first-served admission of a handful of simulated
//! vehicles to a single intersection.
//!
//! Spawns the vehicles, drives them with a stand-in autopilot, lets the
//! admission policy hand out one crossing at a time, and logs every
//! transition to CSV.  Set `RUST_LOG=info` (or `debug`) for progress.

mod cli;

use std::time::Instant;

use anyhow::{Context, Result};

use ix_admission::{AdmissionPolicy, IntersectionConfig};
use ix_agent::{PursuitHelper, VehicleAgent};
use ix_core::{SimConfig, SimRng};
use ix_output::{CsvWriter, EventLogObserver};
use ix_sim::SimBuilder;
use ix_world::{KinematicWorld, RoadMap, load_map, resolve_center, resolve_destinations, spawn_vehicles};

use cli::Args;

// ── Listings ──────────────────────────────────────────────────────────────────

fn list_spawns(map: &RoadMap) {
    for (idx, sp) in map.spawn_points().iter().enumerate() {
        let l = sp.location;
        println!("{idx}: ({:.2}, {:.2}, {:.2})", l.x, l.y, l.z);
    }
}

fn list_junctions(map: &RoadMap) {
    for (idx, j) in map.junctions().iter().enumerate() {
        let (c, e) = (j.center, j.extent);
        println!(
            "{idx}: center=({:.2}, {:.2}, {:.2}) extent=({:.2}, {:.2}, {:.2})",
            c.x, c.y, c.z, e.x, e.y, e.z,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::from_matches(&cli::app().get_matches())?;
    let map = load_map(&args.map).with_context(|| format!("loading map {:?}", args.map))?;

    if args.list_spawns {
        list_spawns(&map);
        return Ok(());
    }
    if args.list_junctions {
        list_junctions(&map);
        return Ok(());
    }

    // 1. Sim config.
    let config = SimConfig {
        delta_secs:    args.delta,
        duration_secs: args.duration,
        seed:          args.seed,
    };
    config.validate()?;

    // 2. World and vehicles.
    let mut world = KinematicWorld::new(map.clone(), &config);
    let mut rng = SimRng::new(config.seed);
    let spawn_indices = args.spawn_indices.as_deref();
    let spawned = spawn_vehicles(&mut world, args.vehicles, spawn_indices, &mut rng)
        .context("spawning vehicles")?;
    let destinations = resolve_destinations(&map, spawned.len(), args.dest_indices.as_deref())
        .context("resolving destinations")?;

    let agents = spawned
        .iter()
        .zip(destinations)
        .map(|(&(id, _), dest)| VehicleAgent::new(id, PursuitHelper::new(args.speed_kmh), dest));

    // 3. Intersection.
    let center = resolve_center(&map, args.center_x, args.center_y, args.center_z, spawn_indices)
        .context("resolving intersection centre")?;
    let policy = AdmissionPolicy::new(&IntersectionConfig {
        center,
        box_half_extent: args.box_half,
        approach_radius: args.approach,
    })?;
    log::info!(
        "intersection at {center}: box half-extent {:.1} m, approach radius {:.1} m",
        args.box_half,
        args.approach,
    );

    // 4. Build sim.
    let mut sim = SimBuilder::new(config, world, policy).agents(agents).build()?;

    // 5. Output.
    let mut writer = CsvWriter::new(&args.logfile)
        .with_context(|| format!("opening {}", args.logfile.display()))?;
    if let Some(path) = &args.summary {
        writer = writer
            .with_summary(path)
            .with_context(|| format!("opening {}", path.display()))?;
    }
    let mut obs = EventLogObserver::new(writer);

    // 6. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 7. Summary.
    println!(
        "Simulated {:.2} s in {} ticks ({:.3} s wall clock)",
        report.end_time - report.start_time,
        report.ticks,
        elapsed.as_secs_f64(),
    );
    println!(
        "  {} : {} event rows",
        args.logfile.display(),
        obs.writer().rows_written(),
    );
    println!();

    println!("{:<8} {:<10} {:>9} {:>11} {:>9} {:>9}", "Vehicle", "State", "Arrival", "Permission", "Entry", "Exit");
    println!("{}", "-".repeat(61));
    let fmt = |t: Option<f64>| t.map_or_else(|| "-".to_owned(), |t| format!("{t:.2}"));
    for r in sim.policy().records() {
        println!(
            "{:<8} {:<10} {:>9.2} {:>11} {:>9} {:>9}",
            r.vehicle_id.0,
            r.state.as_str(),
            r.arrival_time,
            fmt(r.permission_time),
            fmt(r.entry_time),
            fmt(r.exit_time),
        );
    }

    Ok(())
}
