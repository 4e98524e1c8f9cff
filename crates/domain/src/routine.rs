use std::slice::Iter;

use chrono::{Duration, NaiveTime};
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, DeleteError, Name, Property, ReadError, UpdateError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait RoutineService {
    async fn get_routines(&self) -> Result<Vec<Routine>, ReadError>;
    async fn create_routine(
        &self,
        name: Name,
        category: RoutineCategory,
        intensity: Intensity,
        duration: Duration,
        num_exercises: u32,
        time: NaiveTime,
    ) -> Result<Routine, CreateError>;
    async fn set_routine_completed(
        &self,
        id: RoutineID,
        completed: bool,
    ) -> Result<Routine, UpdateError>;
    async fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;

    async fn validate_routine_name(&self, name: &str) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_routines().await {
                Ok(routines) => {
                    if routines.iter().all(|r| r.name != name) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait RoutineRepository {
    async fn read_routines(&self) -> Result<Vec<Routine>, ReadError>;
    async fn create_routine(
        &self,
        name: Name,
        category: RoutineCategory,
        intensity: Intensity,
        duration: Duration,
        num_exercises: u32,
        time: NaiveTime,
    ) -> Result<Routine, CreateError>;
    async fn set_routine_completed(
        &self,
        id: RoutineID,
        completed: bool,
    ) -> Result<Routine, UpdateError>;
    async fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;
}

/// A routine scheduled for the current day.
#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: RoutineID,
    pub name: Name,
    pub category: RoutineCategory,
    pub intensity: Intensity,
    pub duration: Duration,
    pub num_exercises: u32,
    pub time: NaiveTime,
    pub completed: bool,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoutineID(Uuid);

impl RoutineID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for RoutineID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for RoutineID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RoutineCategory {
    Cardio,
    Strength,
    Flexibility,
}

impl Property for RoutineCategory {
    fn iter() -> Iter<'static, RoutineCategory> {
        static CATEGORIES: [RoutineCategory; 3] = [
            RoutineCategory::Cardio,
            RoutineCategory::Strength,
            RoutineCategory::Flexibility,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            RoutineCategory::Cardio => "Cardio",
            RoutineCategory::Strength => "Strength",
            RoutineCategory::Flexibility => "Flexibility",
        }
    }
}

/// Effort scale of the routine picker, distinct from the workout library's
/// [`crate::Difficulty`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Intensity {
    Easy,
    Medium,
    Hard,
}

impl Property for Intensity {
    fn iter() -> Iter<'static, Intensity> {
        static INTENSITIES: [Intensity; 3] =
            [Intensity::Easy, Intensity::Medium, Intensity::Hard];
        INTENSITIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Intensity::Easy => "Easy",
            Intensity::Medium => "Medium",
            Intensity::Hard => "Hard",
        }
    }
}

/// Completion state of a day's routines, shown in the stats row of the
/// home view.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct DailyProgress {
    pub completed: usize,
    pub total: usize,
}

impl DailyProgress {
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f32 / self.total as f32 * 100.0).round() as u32
    }
}

#[must_use]
pub fn daily_progress(routines: &[Routine]) -> DailyProgress {
    DailyProgress {
        completed: routines.iter().filter(|r| r.completed).count(),
        total: routines.len(),
    }
}
