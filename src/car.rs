use crate::command::{self, Command};
use crate::field::{Bounds, Position};
use crate::heading::Heading;

/// A car: posture, a command queue with a read cursor, and a frozen flag
#[derive(Clone, Debug)]
pub struct Car {
    pub id: String,
    pub position: Position,
    pub heading: Heading,
    commands: Vec<Command>,
    cursor: usize,
    frozen: bool,
}

impl Car {
    /// Create a car with an empty command queue
    pub fn new(id: impl Into<String>, position: Position, heading: Heading) -> Self {
        Self {
            id: id.into(),
            position,
            heading,
            commands: Vec::new(),
            cursor: 0,
            frozen: false,
        }
    }

    /// Replace the command queue and rewind the cursor
    pub fn set_commands(&mut self, commands: Vec<Command>) {
        self.commands = commands;
        self.cursor = 0;
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The queue as the caller typed it
    pub fn command_string(&self) -> String {
        command::to_command_string(&self.commands)
    }

    /// Index of the next command to execute
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.cursor < self.commands.len()
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Stop the car for good
    #[inline]
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// True if the engine should step this car on the next tick
    #[inline]
    pub fn can_move(&self) -> bool {
        !self.frozen && self.has_pending()
    }

    /// Execute exactly one queued command, if any
    pub fn step(&mut self, bounds: &Bounds) {
        let Some(&cmd) = self.commands.get(self.cursor) else {
            return;
        };
        self.apply(cmd, bounds);
        self.cursor += 1;
    }

    /// Apply a single command. Forward moves into a wall leave the car in place.
    pub fn apply(&mut self, command: Command, bounds: &Bounds) {
        match command {
            Command::TurnLeft => self.heading = self.heading.left(),
            Command::TurnRight => self.heading = self.heading.right(),
            Command::MoveForward => {
                let next = self.position.ahead(self.heading);
                if bounds.contains_position(next) {
                    self.position = next;
                }
            }
            Command::Unrecognized(_) => {}
        }
    }
}
