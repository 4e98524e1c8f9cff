use chrono::Duration;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::Name;

/// A single timed movement within a workout.
///
/// The active phase is the interval during which the movement is performed;
/// a rest of zero seconds means the next exercise follows immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub active: Seconds,
    pub rest: Seconds,
    pub target: String,
    pub instructions: Vec<String>,
    pub tip: String,
}

impl Exercise {
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.active) + i64::from(self.rest))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Whole seconds of a timed phase.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seconds(u32);

impl Seconds {
    pub const ZERO: Seconds = Seconds(0);

    pub fn new(value: u32) -> Result<Self, SecondsError> {
        if !(0..1000).contains(&value) {
            return Err(SecondsError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<Seconds> for i64 {
    fn from(value: Seconds) -> Self {
        i64::from(value.0)
    }
}

impl TryFrom<&str> for Seconds {
    type Error = SecondsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Seconds::new(parsed_value),
            Err(_) => Err(SecondsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SecondsError {
    #[error("Time must be in the range 0 to 999 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Ok(Seconds(0)))]
    #[case(45, Ok(Seconds(45)))]
    #[case(999, Ok(Seconds(999)))]
    #[case(1000, Err(SecondsError::OutOfRange))]
    fn test_seconds_new(#[case] value: u32, #[case] expected: Result<Seconds, SecondsError>) {
        assert_eq!(Seconds::new(value), expected);
    }

    #[rstest]
    #[case("30", Ok(Seconds(30)))]
    #[case("1000", Err(SecondsError::OutOfRange))]
    #[case("half a minute", Err(SecondsError::ParseError))]
    fn test_seconds_try_from(#[case] value: &str, #[case] expected: Result<Seconds, SecondsError>) {
        assert_eq!(Seconds::try_from(value), expected);
    }

    #[test]
    fn test_seconds_is_zero() {
        assert!(Seconds::ZERO.is_zero());
        assert!(!Seconds::new(15).unwrap().is_zero());
    }

    #[test]
    fn test_exercise_total_duration() {
        let exercise = Exercise {
            id: 1.into(),
            name: Name::new("Push-ups").unwrap(),
            active: Seconds::new(45).unwrap(),
            rest: Seconds::new(15).unwrap(),
            target: String::from("10-15 reps"),
            instructions: vec![String::from("Start in plank position")],
            tip: String::from("Modify by doing knee push-ups if needed"),
        };
        assert_eq!(exercise.total_duration(), Duration::seconds(60));
    }

    #[test]
    fn test_exercise_id_nil() {
        assert!(ExerciseID::nil().is_nil());
        assert_eq!(ExerciseID::nil(), ExerciseID::default());
    }
}
