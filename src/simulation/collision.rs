use crate::car::Car;
use crate::field::Position;
use log::info;
use std::collections::HashMap;

/// A cell where at least one car was frozen during the current step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crash {
    pub position: Position,
    /// Indices of every car in the cell, ascending
    pub occupants: Vec<usize>,
    /// Indices of the cars frozen by this crash, ascending
    pub frozen: Vec<usize>,
}

/// Post-move collision pass over the whole fleet
pub struct CollisionDetector {
    /// Car indices per occupied cell, rebuilt every step
    occupancy: HashMap<Position, Vec<usize>>,
}

impl CollisionDetector {
    /// Create a detector sized for `car_count` cars
    pub fn new(car_count: usize) -> Self {
        Self {
            occupancy: HashMap::with_capacity(car_count),
        }
    }

    /// Freeze every not-yet-frozen car that shares its cell with another car.
    ///
    /// Occupancy covers all cars, frozen and idle ones included, so a car
    /// driving into a stopped car is caught. Must run only after every car
    /// has moved for the step.
    pub fn detect(&mut self, step: u32, cars: &mut [Car]) -> Vec<Crash> {
        self.occupancy.clear();
        for (idx, car) in cars.iter().enumerate() {
            self.occupancy.entry(car.position).or_default().push(idx);
        }

        let mut crashes: Vec<Crash> = Vec::new();
        for idx in 0..cars.len() {
            if cars[idx].is_frozen() {
                continue;
            }
            let pos = cars[idx].position;
            let Some(occupants) = self.occupancy.get(&pos) else {
                continue;
            };
            if occupants.len() < 2 {
                continue;
            }

            cars[idx].freeze();
            match crashes.iter_mut().find(|c| c.position == pos) {
                Some(crash) => crash.frozen.push(idx),
                None => crashes.push(Crash {
                    position: pos,
                    occupants: occupants.clone(),
                    frozen: vec![idx],
                }),
            }
        }

        for crash in &crashes {
            self.log_crash(step, cars, crash);
        }
        crashes
    }

    fn log_crash(&self, step: u32, cars: &[Car], crash: &Crash) {
        let names: Vec<&str> = crash
            .occupants
            .iter()
            .map(|&i| cars[i].id.as_str())
            .collect();
        info!(
            "step {}: collision at {} between {}",
            step,
            crash.position,
            names.join(", ")
        );
    }
}
