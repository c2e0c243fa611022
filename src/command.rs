/// A single per-tick instruction for a car
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
    /// Any other symbol; executing it does nothing but still uses up a tick
    Unrecognized(char),
}

impl Command {
    /// Map a command character, keeping unknown ones as `Unrecognized`
    #[inline]
    pub const fn from_char(c: char) -> Self {
        match c {
            'L' => Command::TurnLeft,
            'R' => Command::TurnRight,
            'F' => Command::MoveForward,
            other => Command::Unrecognized(other),
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
            Command::MoveForward => 'F',
            Command::Unrecognized(c) => c,
        }
    }
}

/// Lenient parse: every character becomes exactly one command.
///
/// Use `parser::parse_commands` when unknown characters must be rejected.
pub fn parse_lenient(s: &str) -> Vec<Command> {
    s.chars().map(Command::from_char).collect()
}

/// Render a queue back to its command string
pub fn to_command_string(commands: &[Command]) -> String {
    commands.iter().map(|c| c.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands() {
        assert_eq!(
            parse_lenient("FLR"),
            vec![Command::MoveForward, Command::TurnLeft, Command::TurnRight]
        );
    }

    #[test]
    fn test_unknown_commands_are_kept() {
        let cmds = parse_lenient("FxF");
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[1], Command::Unrecognized('x'));
        assert_eq!(to_command_string(&cmds), "FxF");
    }

    #[test]
    fn test_empty_string() {
        assert!(parse_lenient("").is_empty());
    }
}
