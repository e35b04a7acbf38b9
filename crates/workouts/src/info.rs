use std::fmt;

use serde::{Deserialize, Serialize};

/// Computed summary of one training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Km/h.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(duration: f64, distance: f64, speed: f64, calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Running".into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Decimal digit counts of every numeric field in a message.
    fn decimals(message: &str) -> Vec<usize> {
        message
            .split(|c: char| c == ' ' || c == ';')
            .map(|tok| tok.strip_suffix('.').unwrap_or(tok))
            .filter(|tok| tok.starts_with(|c: char| c.is_ascii_digit() || c == '-'))
            .map(|tok| {
                assert!(
                    tok.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-'),
                    "not fixed-point: {tok}"
                );
                tok.len() - tok.find('.').unwrap() - 1
            })
            .collect()
    }

    #[test]
    fn test_reference_message() {
        let msg = info(1.0, 9.75, 9.75, 699.75).message();
        assert_eq!(
            msg,
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_always_three_decimals() {
        let cases = [
            info(1.0, 0.0, 0.0, 0.0),
            info(0.5, 1e-9, 123.456789, -42.0),
            info(1234.5678, 1e12, 3.0, 1e15),
            info(2.0, 0.0005, 0.0004999, 7.1234),
        ];
        for case in cases {
            let msg = case.message();
            assert_eq!(decimals(&msg), vec![3, 3, 3, 3], "{msg}");
        }
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(info(1.0, 5.85, 5.85, 157.5)).unwrap();
        assert_eq!(json["training_type"], "Running");
        assert_eq!(json["calories"], 157.5);
    }
}
