use crate::car::Car;
use crate::command::{self, Command};
use crate::error::RegisterError;
use crate::field::{Bounds, Position};
use crate::heading::Heading;
use crate::simulation::collision::CollisionDetector;
use crate::simulation::report::{CollisionRecord, Outcome, ReportEntry, RunReport};
use log::{debug, info};
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

/// Read-only view of a registered car
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarSnapshot {
    pub id: String,
    pub position: Position,
    pub heading: Heading,
    pub commands: String,
}

impl fmt::Display for CarSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.id, self.position, self.heading)?;
        if !self.commands.is_empty() {
            write!(f, ", {}", self.commands)?;
        }
        Ok(())
    }
}

/// Owns the field and every car, and runs them in lockstep
pub struct SimulationEngine {
    bounds: Bounds,
    cars: Vec<Car>,
    by_name: HashMap<String, usize>,
}

impl SimulationEngine {
    /// Create an empty engine for the given field
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cars: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// True if a car with this name is registered
    pub fn contains(&self, id: &str) -> bool {
        self.by_name.contains_key(id)
    }

    pub fn car(&self, id: &str) -> Option<&Car> {
        self.by_name.get(id).map(|&idx| &self.cars[idx])
    }

    /// Check that a car could start at (x, y)
    pub fn check_placement(&self, x: i64, y: i64) -> Result<(), RegisterError> {
        if !self.bounds.contains(x, y) {
            return Err(RegisterError::OutOfBounds { x, y });
        }
        let pos = Position::new(x, y);
        if self.cars.iter().any(|c| c.position == pos) {
            return Err(RegisterError::PositionOccupied { x, y });
        }
        Ok(())
    }

    /// Add a car. Nothing changes if an error is returned.
    ///
    /// The command string is taken as-is: characters other than `F`, `L`
    /// and `R` are kept and do nothing when executed.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        x: i64,
        y: i64,
        heading: Heading,
        commands: &str,
    ) -> Result<(), RegisterError> {
        self.register_commands(id, x, y, heading, command::parse_lenient(commands))
    }

    /// Like `register`, with an already-built command queue
    pub fn register_commands(
        &mut self,
        id: impl Into<String>,
        x: i64,
        y: i64,
        heading: Heading,
        commands: Vec<Command>,
    ) -> Result<(), RegisterError> {
        let id = id.into();
        if self.contains(&id) {
            return Err(RegisterError::DuplicateName(id));
        }
        self.check_placement(x, y)?;

        let mut car = Car::new(id.clone(), Position::new(x, y), heading);
        car.set_commands(commands);
        debug!(
            "registered car {} at ({},{}) {} with {} command(s)",
            id,
            x,
            y,
            heading,
            car.commands().len()
        );

        self.by_name.insert(id, self.cars.len());
        self.cars.push(car);
        Ok(())
    }

    /// Snapshot of all cars in registration order
    pub fn list_cars(&self) -> Vec<CarSnapshot> {
        self.cars
            .iter()
            .map(|c| CarSnapshot {
                id: c.id.clone(),
                position: c.position,
                heading: c.heading,
                commands: c.command_string(),
            })
            .collect()
    }

    /// Run every car until it is frozen or out of commands.
    ///
    /// Each step moves every eligible car by one command, then checks the
    /// resulting occupancy. Cars sharing a cell are frozen where they stand.
    pub fn run_to_completion(mut self) -> RunReport {
        let started = Instant::now();
        let mut detector = CollisionDetector::new(self.cars.len());
        let mut report = RunReport::default();
        let mut step: u32 = 0;

        while self.cars.iter().any(Car::can_move) {
            step += 1;

            // (1) Move phase
            let mut moved = 0usize;
            for car in self.cars.iter_mut().filter(|c| c.can_move()) {
                car.step(&self.bounds);
                moved += 1;
            }
            debug!("step {}: {} car(s) advanced", step, moved);

            // (2) Collision phase, on post-move positions only
            for crash in detector.detect(step, &mut self.cars) {
                let collision = report.collisions.len();
                report.collisions.push(CollisionRecord {
                    step,
                    agents: crash
                        .occupants
                        .iter()
                        .map(|&i| self.cars[i].id.clone())
                        .collect(),
                    position: crash.position,
                });

                for &idx in &crash.frozen {
                    let car = &self.cars[idx];
                    let with = crash
                        .occupants
                        .iter()
                        .filter(|&&other| other != idx)
                        .map(|&other| self.cars[other].id.clone())
                        .collect();
                    report.entries.push(ReportEntry {
                        id: car.id.clone(),
                        position: car.position,
                        heading: car.heading,
                        outcome: Outcome::Collided {
                            step,
                            with,
                            collision,
                        },
                    });
                }
            }
        }

        // (3) Everyone left standing finished their queue
        for car in self.cars.into_iter().filter(|c| !c.is_frozen()) {
            report.entries.push(ReportEntry {
                id: car.id,
                position: car.position,
                heading: car.heading,
                outcome: Outcome::Completed,
            });
        }

        report.steps = step;
        info!(
            "run finished after {} step(s) in {:.3} ms: {} completed, {} collided",
            step,
            started.elapsed().as_secs_f64() * 1000.0,
            report.completed_count(),
            report.collided_count()
        );
        report
    }
}
