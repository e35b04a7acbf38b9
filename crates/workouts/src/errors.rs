use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0}")]
    UnknownActivityCode(String),

    #[error("Activity {code} expects {expected} parameters, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Parameter `{field}` must be a whole non-negative number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("Division by zero: `{field}` must be non-zero")]
    DivisionByZero { field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkoutError {
    /// Whether the error was caused by the input package rather than the output stream.
    pub fn is_bad_input(&self) -> bool {
        !matches!(self, WorkoutError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_offending_values() {
        let err = WorkoutError::UnknownActivityCode("XYZ".into());
        assert_eq!(err.to_string(), "Unknown activity code: XYZ");

        let err = WorkoutError::ArityMismatch {
            code: "RUN".into(),
            expected: 3,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Activity RUN expects 3 parameters, got 4");
    }

    #[test]
    fn test_io_is_not_bad_input() {
        let io = std::io::Error::other("closed");
        assert!(!WorkoutError::from(io).is_bad_input());
        assert!(WorkoutError::DivisionByZero { field: "duration" }.is_bad_input());
    }
}
