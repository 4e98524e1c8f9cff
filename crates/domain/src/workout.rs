use std::{
    collections::{BTreeMap, HashSet},
    slice::Iter,
};

use chrono::Duration;
use derive_more::Deref;
use uuid::Uuid;

use crate::{Exercise, Name, catalog};

/// A playable workout: an ordered, non-empty sequence of exercises plus the
/// library metadata shown before it is started. Immutable for the duration
/// of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub category: WorkoutCategory,
    pub difficulty: Difficulty,
    pub calories: u32,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub fn duration(&self) -> Duration {
        self.exercises.iter().map(Exercise::total_duration).sum()
    }

    #[must_use]
    pub fn num_exercises(&self) -> usize {
        self.exercises.len()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WorkoutCategory {
    Bodyweight,
    HomeCardio,
    Flexibility,
}

impl Property for WorkoutCategory {
    fn iter() -> Iter<'static, WorkoutCategory> {
        static CATEGORIES: [WorkoutCategory; 3] = [
            WorkoutCategory::Bodyweight,
            WorkoutCategory::HomeCardio,
            WorkoutCategory::Flexibility,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutCategory::Bodyweight => "Bodyweight",
            WorkoutCategory::HomeCardio => "Home Cardio",
            WorkoutCategory::Flexibility => "Flexibility",
        }
    }
}

impl WorkoutCategory {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            WorkoutCategory::Bodyweight => "No equipment needed",
            WorkoutCategory::HomeCardio => "Heart pumping sessions",
            WorkoutCategory::Flexibility => "Stretch and recover",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTIES: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Filter over the workout library.
#[derive(Default, PartialEq)]
pub struct WorkoutFilter {
    pub name: String,
    pub categories: HashSet<WorkoutCategory>,
    pub difficulties: HashSet<Difficulty>,
}

impl WorkoutFilter {
    #[must_use]
    pub fn catalog(&self) -> BTreeMap<&'static str, &'static catalog::Workout> {
        catalog::WORKOUTS
            .values()
            .filter(|w| {
                w.name
                    .to_lowercase()
                    .contains(self.name.to_lowercase().trim())
                    && (self.categories.is_empty() || self.categories.contains(&w.category))
                    && (self.difficulties.is_empty() || self.difficulties.contains(&w.difficulty))
            })
            .map(|w| (w.name, *w))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.categories.is_empty() && self.difficulties.is_empty()
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(WorkoutCategory, bool)> {
        WorkoutCategory::iter()
            .map(|c| (*c, self.categories.contains(c)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn difficulty_list(&self) -> Vec<(Difficulty, bool)> {
        Difficulty::iter()
            .map(|d| (*d, self.difficulties.contains(d)))
            .collect::<Vec<_>>()
    }

    pub fn toggle_category(&mut self, category: WorkoutCategory) {
        if self.categories.contains(&category) {
            self.categories.remove(&category);
        } else {
            self.categories.insert(category);
        }
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulties.contains(&difficulty) {
            self.difficulties.remove(&difficulty);
        } else {
            self.difficulties.insert(difficulty);
        }
    }
}

/// Fixed set of displayable values of an enum property.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
