use thiserror::Error;

/// Reasons the engine refuses to register a car.
///
/// Registration is atomic: when one of these is returned the engine is left
/// exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Another car already uses this name
    #[error("Car with name '{0}' already exists.")]
    DuplicateName(String),
    /// Starting cell lies outside the field
    #[error("Position ({x},{y}) is outside the field bounds.")]
    OutOfBounds { x: i64, y: i64 },
    /// Starting cell is taken by a registered car
    #[error("Position ({x},{y}) is already occupied by another car.")]
    PositionOccupied { x: i64, y: i64 },
}

/// Errors raised while validating interactive input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Field size line is not two non-negative integers
    #[error("Invalid format. Please enter two integers.")]
    InvalidField(String),
    /// Placement line is not `x y D`
    #[error("Invalid input. Format must be: x y D (e.g., 1 2 N)")]
    InvalidPlacement(String),
    /// Heading letter outside N, E, S, W
    #[error("Invalid direction: {0}")]
    InvalidHeading(String),
    /// Command character outside F, L, R
    #[error("Commands must only contain F, L, R.")]
    InvalidCommand(char),
    /// Blank car name
    #[error("Car name cannot be empty.")]
    InvalidName,
}

/// Result type alias for input parsing
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_error_messages() {
        assert_eq!(
            RegisterError::DuplicateName("A".into()).to_string(),
            "Car with name 'A' already exists."
        );
        assert_eq!(
            RegisterError::OutOfBounds { x: 10, y: -1 }.to_string(),
            "Position (10,-1) is outside the field bounds."
        );
        assert_eq!(
            RegisterError::PositionOccupied { x: 1, y: 1 }.to_string(),
            "Position (1,1) is already occupied by another car."
        );
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(ParseError::InvalidHeading("Z".into()).to_string(), "Invalid direction: Z");
        assert!(ParseError::InvalidCommand('X')
            .to_string()
            .contains("F, L, R"));
    }
}
