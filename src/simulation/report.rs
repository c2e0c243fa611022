use crate::field::Position;
use crate::heading::Heading;
use std::fmt;

/// Cars sharing a cell at the end of a step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionRecord {
    pub step: u32,
    /// Every occupant of the cell, in registration order
    pub agents: Vec<String>,
    pub position: Position,
}

/// How a car's run ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Queue exhausted without a collision
    Completed,
    /// Frozen by a collision
    Collided {
        step: u32,
        /// The other occupants of the cell
        with: Vec<String>,
        /// Index into `RunReport::collisions`
        collision: usize,
    },
}

/// Final state of one car
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    pub id: String,
    pub position: Position,
    pub heading: Heading,
    pub outcome: Outcome,
}

impl ReportEntry {
    #[inline]
    pub fn is_collided(&self) -> bool {
        matches!(self.outcome, Outcome::Collided { .. })
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Completed => write!(f, "{}, {} {}", self.id, self.position, self.heading),
            Outcome::Collided { step, with, .. } => write!(
                f,
                "{}, collides with {} at {} at step {}",
                self.id,
                with.join(", "),
                self.position,
                step
            ),
        }
    }
}

/// Result of `SimulationEngine::run_to_completion`.
///
/// Collided entries come first, in the order the collisions happened; the
/// remaining cars follow in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub entries: Vec<ReportEntry>,
    pub collisions: Vec<CollisionRecord>,
    /// Number of ticks executed
    pub steps: u32,
}

impl RunReport {
    /// Entry for the car named `id`
    pub fn entry(&self, id: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The collision that froze this entry's car, if any
    pub fn collision_of(&self, entry: &ReportEntry) -> Option<&CollisionRecord> {
        match entry.outcome {
            Outcome::Collided { collision, .. } => self.collisions.get(collision),
            Outcome::Completed => None,
        }
    }

    pub fn collided_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_collided()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.entries.len() - self.collided_count()
    }
}
