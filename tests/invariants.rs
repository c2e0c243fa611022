// Randomized fleets checked against the engine's run invariants.

use auto_driving_sim::prelude::*;
use std::collections::HashMap;

const SEEDS: u64 = 300;

struct Fleet {
    bounds: Bounds,
    ids: Vec<String>,
    longest_queue: u32,
}

fn random_fleet(rng: &mut fastrand::Rng) -> (Fleet, SimulationEngine) {
    let bounds = Bounds::new(rng.u32(1..8), rng.u32(1..8));
    let mut engine = SimulationEngine::new(bounds);
    let mut ids = Vec::new();
    let mut longest_queue = 0;

    for n in 0..rng.usize(1..8) {
        let id = format!("car{n}");
        let x = rng.i64(0..i64::from(bounds.width()));
        let y = rng.i64(0..i64::from(bounds.height()));
        let heading = Heading::ALL[rng.usize(..4)];
        let commands: String = (0..rng.usize(0..14))
            .map(|_| ['F', 'F', 'L', 'R'][rng.usize(..4)])
            .collect();

        // occupied cells are simply skipped
        if engine.register(id.as_str(), x, y, heading, &commands).is_ok() {
            longest_queue = longest_queue.max(commands.len() as u32);
            ids.push(id);
        }
    }

    let fleet = Fleet {
        bounds,
        ids,
        longest_queue,
    };
    (fleet, engine)
}

fn run(seed: u64) -> (Fleet, RunReport) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let (fleet, sim) = random_fleet(&mut rng);
    (fleet, sim.run_to_completion())
}

#[test]
fn every_car_reported_exactly_once() {
    for seed in 0..SEEDS {
        let (fleet, report) = run(seed);
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for entry in &report.entries {
            *seen.entry(entry.id.as_str()).or_default() += 1;
        }
        assert_eq!(seen.len(), fleet.ids.len(), "seed {seed}");
        assert!(seen.values().all(|&n| n == 1), "seed {seed}");
    }
}

#[test]
fn cars_stay_on_the_field() {
    for seed in 0..SEEDS {
        let (fleet, report) = run(seed);
        for entry in &report.entries {
            assert!(
                fleet.bounds.contains_position(entry.position),
                "seed {seed}: {} left the field at {}",
                entry.id,
                entry.position
            );
        }
    }
}

#[test]
fn run_is_bounded_by_longest_queue() {
    for seed in 0..SEEDS {
        let (fleet, report) = run(seed);
        assert!(report.steps <= fleet.longest_queue, "seed {seed}");
    }
}

#[test]
fn only_collided_cars_share_cells() {
    for seed in 0..SEEDS {
        let (_, report) = run(seed);
        let mut cells: HashMap<Position, Vec<&str>> = HashMap::new();
        for entry in &report.entries {
            cells.entry(entry.position).or_default().push(entry.id.as_str());
        }
        for (pos, ids) in cells.iter().filter(|(_, ids)| ids.len() > 1) {
            for id in ids {
                assert!(
                    report.entry(id).unwrap().is_collided(),
                    "seed {seed}: {id} shares {pos} without colliding"
                );
            }
        }
    }
}

#[test]
fn collisions_are_symmetric_within_a_step() {
    for seed in 0..SEEDS {
        let (_, report) = run(seed);
        for entry in &report.entries {
            let Outcome::Collided { step, with, .. } = &entry.outcome else {
                continue;
            };
            let record = report.collision_of(entry).unwrap();
            assert_eq!(record.step, *step, "seed {seed}");
            assert_eq!(record.position, entry.position, "seed {seed}");
            assert!(record.agents.len() >= 2, "seed {seed}");
            assert!(record.agents.contains(&entry.id), "seed {seed}");

            for other_id in with {
                let other = report.entry(other_id).unwrap();
                assert_eq!(other.position, entry.position, "seed {seed}");
                if let Outcome::Collided {
                    step: other_step,
                    with: other_with,
                    ..
                } = &other.outcome
                {
                    if other_step == step {
                        assert!(other_with.contains(&entry.id), "seed {seed}");
                    }
                } else {
                    panic!("seed {seed}: witness {other_id} not collided");
                }
            }
        }
    }
}
