//! # Auto Driving Car Simulation
//!
//! Cars on a bounded integer grid, each following its own string of
//! `F`/`L`/`R` commands. All cars advance in lockstep, one command per tick;
//! cars that end a tick on the same cell collide and stop where they are.
//!
//! The engine lives in [`simulation`]; [`shell`] is the interactive front end.

pub mod car;
pub mod cli;
pub mod command;
pub mod error;
pub mod field;
pub mod heading;
pub mod parser;
pub mod shell;
pub mod simulation;

pub use car::Car;
pub use cli::Args;
pub use command::Command;
pub use error::{ParseError, RegisterError, Result};
pub use field::{Bounds, Position};
pub use heading::Heading;
pub use shell::Shell;
pub use simulation::{Outcome, RunReport, SimulationEngine};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Bounds, Car, Command, Heading, Outcome, ParseError, Position, RegisterError,
        RunReport, Shell, SimulationEngine,
    };
}
