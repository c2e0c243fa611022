//! Menu-driven front end: builds a field, collects cars, runs them and
//! prints the outcome. Generic over its streams so sessions can be replayed
//! from memory.

use crate::error::RegisterError;
use crate::field::Bounds;
use crate::parser;
use crate::simulation::SimulationEngine;
use colored::Colorize;
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to Auto Driving Car Simulation!";
const GOODBYE: &str = "Thank you for running the simulation. Goodbye!";

/// What to do once a session ends
enum Flow {
    Restart,
    Exit,
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    /// Field for the first session, skipping the size prompt
    preset: Option<Bounds>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            preset: None,
        }
    }

    /// Use `bounds` for the first session instead of asking
    pub fn with_field(mut self, bounds: Option<Bounds>) -> Self {
        self.preset = bounds;
        self
    }

    /// Run sessions until the user exits or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.session() {
                Ok(Flow::Restart) => continue,
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    debug!("input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn session(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "{}", WELCOME.bold())?;
        let bounds = match self.preset.take() {
            Some(bounds) => bounds,
            None => self.read_field()?,
        };
        debug!("new field {}x{}", bounds.width(), bounds.height());
        let mut engine = SimulationEngine::new(bounds);

        loop {
            self.print_cars(&engine)?;
            writeln!(self.out, "\nPlease choose from the following options:")?;
            writeln!(self.out, "[1] Add a car to field")?;
            writeln!(self.out, "[2] Run simulation")?;
            writeln!(self.out, "[0] Exit")?;

            let choice = self.prompt("> ")?;
            match choice.trim() {
                "1" => self.add_car(&mut engine)?,
                "2" => return self.run_simulation(engine),
                "0" => {
                    writeln!(self.out, "{}", GOODBYE)?;
                    return Ok(Flow::Exit);
                }
                _ => self.reject(&"Invalid option.")?,
            }
        }
    }

    fn read_field(&mut self) -> io::Result<Bounds> {
        loop {
            let line = self.prompt(
                "Please enter the width and height of the simulation field in x y format: ",
            )?;
            match parser::parse_field(&line) {
                Ok(bounds) => return Ok(bounds),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    /// Collect one car; any invalid answer drops back to the menu
    fn add_car(&mut self, engine: &mut SimulationEngine) -> io::Result<()> {
        let line = self.prompt("Please enter the name of the car: ")?;
        let name = match parser::parse_name(&line) {
            Ok(name) => name.to_string(),
            Err(e) => return self.reject(&e),
        };
        if engine.contains(&name) {
            return self.reject(&RegisterError::DuplicateName(name));
        }

        let line = self.prompt(&format!(
            "Please enter initial position of car {name} in x y Direction format: "
        ))?;
        let (x, y, heading) = match parser::parse_placement(&line) {
            Ok(placement) => placement,
            Err(e) => return self.reject(&e),
        };
        if let Err(e) = engine.check_placement(x, y) {
            return self.reject(&e);
        }

        let line = self.prompt(&format!("Please enter the commands for car {name}: "))?;
        let commands = match parser::parse_commands(&line) {
            Ok(commands) => commands,
            Err(e) => return self.reject(&e),
        };

        match engine.register_commands(name.as_str(), x, y, heading, commands) {
            Ok(()) => writeln!(self.out, "{}", format!("Car {name} added.").green()),
            Err(e) => self.reject(&format!("Failed to add car: {e}")),
        }
    }

    fn run_simulation(&mut self, engine: SimulationEngine) -> io::Result<Flow> {
        self.print_cars(&engine)?;
        writeln!(self.out, "\nRunning simulation...\n")?;

        let report = engine.run_to_completion();
        writeln!(self.out, "After simulation, the result is:")?;
        for entry in &report.entries {
            let line = format!("- {entry}");
            if entry.is_collided() {
                writeln!(self.out, "{}", line.yellow())?;
            } else {
                writeln!(self.out, "{}", line.green())?;
            }
        }

        self.post_run()
    }

    fn post_run(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.out, "\nPlease choose from the following options:")?;
            writeln!(self.out, "[1] Start over")?;
            writeln!(self.out, "[2] Exit")?;

            let choice = self.prompt("> ")?;
            match choice.trim() {
                "1" => return Ok(Flow::Restart),
                "2" => {
                    writeln!(self.out, "{}", GOODBYE)?;
                    return Ok(Flow::Exit);
                }
                _ => self.reject(&"Invalid option.")?,
            }
        }
    }

    fn print_cars(&mut self, engine: &SimulationEngine) -> io::Result<()> {
        writeln!(self.out, "\nYour current list of cars are:")?;
        for car in engine.list_cars() {
            writeln!(self.out, "- {car}")?;
        }
        Ok(())
    }

    fn reject(&mut self, reason: &dyn Display) -> io::Result<()> {
        let reason = reason.to_string();
        debug!("rejected input: {reason}");
        writeln!(self.out, "{}", reason.red())
    }

    /// Print `message` and read one line; end of input is `UnexpectedEof`
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.out, "{}", message.cyan())?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
