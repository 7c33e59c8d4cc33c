//! chase-demo — offline pursuit–evasion run for the rust_chase framework.
//!
//! Drives a seeker and an evader around an 8-node courtyard with toy
//! kinematics standing in for the real environment: each tick the demo
//! integrates the returned steering intents into fresh poses, feeds them
//! back as telemetry, and derives the seeker's observation operator from
//! planar line-of-sight.  A CSV trace lands in `output/chase/trace.csv`.

mod courtyard;

use std::path::Path;

use anyhow::Result;

use chase_core::{Point3, Pose, Role, geo::wrap_signed_deg};
use chase_belief::ObservationOperator;
use chase_mission::{CsvTraceObserver, MissionBuilder, MissionConfig, TickTelemetry};
use chase_nav::SteeringIntent;

use courtyard::build_courtyard;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const TOTAL_TICKS:       u64 = 400;
const PRINT_INTERVAL:    u64 = 40;
const TRANSITION_RATE_K: f64 = 4.0;
const ARRIVAL_THRESHOLD: f64 = 1.8;

/// Toy body model: degrees of yaw authority and distance covered per tick.
const TURN_RATE_DEG: f64 = 45.0;
const SPEED:         f64 = 1.5;

/// Planar distance at which the seeker directly sights the evader.
const SIGHT_RANGE: f64 = 12.0;

// ── Toy kinematics ────────────────────────────────────────────────────────────

/// Integrate one steering intent into a pose, the way the real environment
/// would apply a movement packet.
fn integrate(pose: Pose, intent: SteeringIntent) -> Pose {
    let yaw = wrap_signed_deg(pose.yaw + intent.turn * TURN_RATE_DEG);
    let pitch = if intent.pitch_correct { 0.0 } else { pose.pitch };
    let mut pos = pose.pos;
    if intent.throttle > 0.0 {
        // Yaw 0 faces +z; forward is (-sin yaw, cos yaw) on the plane.
        let rad = yaw.to_radians();
        pos.x += -rad.sin() * SPEED * intent.throttle;
        pos.z += rad.cos() * SPEED * intent.throttle;
    }
    Pose::new(pos, yaw, pitch)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== chase-demo — rust_chase pursuit framework ===");
    println!("Ticks: {TOTAL_TICKS}  |  Seed: {SEED}  |  Sight range: {SIGHT_RANGE}");
    println!();

    // 1. Build the courtyard.
    let (graph, nodes) = build_courtyard()?;
    let [nw, _, _, _, _, _, fountain, alcove] = nodes;
    println!("Courtyard: {} waypoints", graph.node_count());

    // 2. Build the mission: seeker starts on the NW corner, evader in the
    //    alcove; the seeker's prior is uniform (it saw nothing yet).
    let config = MissionConfig {
        transition_rate_k: TRANSITION_RATE_K,
        arrival_threshold: ARRIVAL_THRESHOLD,
        seed: SEED,
    };
    let mut mission = MissionBuilder::new(graph, config)
        .start_at(Role::Seeker, nw)
        .start_at(Role::Evader, alcove)
        .build()?;

    // 3. Trace output.
    std::fs::create_dir_all("output/chase")?;
    let trace_path = Path::new("output/chase/trace.csv");
    let mut trace = CsvTraceObserver::new(trace_path)?;

    // 4. Initial poses on the start waypoints.
    let start = |node| -> Result<Pose> {
        let p: Point3 = mission.graph().position(node)?;
        Ok(Pose::new(p, 0.0, 0.0))
    };
    let mut seeker_pose = start(nw)?;
    let mut evader_pose = start(alcove)?;

    // 5. Tick loop: poll → observe → tick → integrate intents.
    let mut sightings = 0u64;
    for t in 0..TOTAL_TICKS {
        let dim = mission.belief().dim();
        let seen = seeker_pose.pos.planar_distance(evader_pose.pos) <= SIGHT_RANGE;
        let observation = if seen {
            sightings += 1;
            // Direct sighting: collapse onto the evader's nearest waypoint.
            mission
                .graph()
                .nearest_waypoint(evader_pose.pos)
                .map(|node| ObservationOperator::sighted_at(node, dim))
                .transpose()?
        } else {
            // Looked around, saw nobody: rule out what this waypoint sees.
            let here = mission.nav_state(Role::Seeker).current_node;
            let watched = mission.graph().visible_from(here)?.to_vec();
            Some(ObservationOperator::ruled_out(&watched, dim)?)
        };

        let report = mission.tick_with(
            &TickTelemetry {
                seeker_pose: Some(seeker_pose),
                evader_pose: Some(evader_pose),
                observation,
            },
            &mut trace,
        );

        for role in Role::ALL {
            if let Some(error) = report.error(role) {
                eprintln!("tick {t}: {role} error: {error}");
            }
        }
        if let Some(intent) = report.intent(Role::Seeker) {
            seeker_pose = integrate(seeker_pose, intent);
        }
        if let Some(intent) = report.intent(Role::Evader) {
            evader_pose = integrate(evader_pose, intent);
        }

        if t % PRINT_INTERVAL == 0 {
            let belief = mission.belief();
            let top = belief.argmax().expect("non-empty courtyard");
            println!(
                "T{t:>4}  seeker {}  evader {}  best guess {top} (p={:.3})",
                seeker_pose.pos, evader_pose.pos, belief.prob(top),
            );
        }
    }

    // 6. Wrap up.
    mission.finish_with(&mut trace);
    if let Some(e) = trace.take_error() {
        eprintln!("trace error: {e}");
    }

    println!();
    println!(
        "Done: {} ticks, {sightings} direct sightings, fountain mass {:.3}",
        TOTAL_TICKS,
        mission.belief().prob(fountain),
    );
    println!("Trace: {}", trace_path.display());
    Ok(())
}
