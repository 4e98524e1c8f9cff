#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod exercise;
mod name;
mod progress;
mod quote;
mod routine;
mod schedule;
mod service;
mod session;
mod workout;

pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError, ValidationError};
pub use exercise::{Exercise, ExerciseID, Seconds, SecondsError};
pub use name::{Name, NameError};
pub use progress::{
    Achievement, AchievementID, DayProgress, Goal, ProgressRepository, ProgressService, Timeframe,
    current_streak, week_scale,
};
pub use quote::{QUOTES, daily_quote};
pub use routine::{
    DailyProgress, Intensity, Routine, RoutineCategory, RoutineID, RoutineRepository,
    RoutineService, daily_progress,
};
pub use schedule::{
    MonthView, Schedule, ScheduleRepository, ScheduleService, ScheduledRoutine, scheduled_dates,
};
pub use service::Service;
pub use session::{InvalidWorkout, Phase, Session, Summary};
pub use workout::{Difficulty, Property, Workout, WorkoutCategory, WorkoutFilter, WorkoutID};
