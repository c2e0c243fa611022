//! Strict validation of the text typed into the interactive shell.

use crate::command::Command;
use crate::error::{ParseError, Result};
use crate::field::Bounds;
use crate::heading::Heading;

/// Parse `"W H"` into a field
pub fn parse_field(line: &str) -> Result<Bounds> {
    let invalid = || ParseError::InvalidField(line.to_string());
    let mut parts = line.split_whitespace();
    let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let width = w.parse::<u32>().map_err(|_| invalid())?;
    let height = h.parse::<u32>().map_err(|_| invalid())?;
    Ok(Bounds::new(width, height))
}

/// Parse `"x y D"` into a starting posture
pub fn parse_placement(line: &str) -> Result<(i64, i64, Heading)> {
    let invalid = || ParseError::InvalidPlacement(line.to_string());
    let mut parts = line.split_whitespace();
    let (Some(xs), Some(ys), Some(ds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let x = xs.parse::<i64>().map_err(|_| invalid())?;
    let y = ys.parse::<i64>().map_err(|_| invalid())?;
    let heading: Heading = ds.parse()?;
    Ok((x, y, heading))
}

/// Parse a command string, accepting only F, L and R in either case
pub fn parse_commands(line: &str) -> Result<Vec<Command>> {
    line.trim()
        .chars()
        .map(|c| match Command::from_char(c.to_ascii_uppercase()) {
            Command::Unrecognized(_) => Err(ParseError::InvalidCommand(c)),
            cmd => Ok(cmd),
        })
        .collect()
}

/// Trim a car name and reject blanks
pub fn parse_name(line: &str) -> Result<&str> {
    match line.trim() {
        "" => Err(ParseError::InvalidName),
        name => Ok(name),
    }
}
