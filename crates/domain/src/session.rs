use std::collections::BTreeSet;

use chrono::Duration;

use crate::{Exercise, Workout};

/// Phase of the exercise currently on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Resting,
}

/// One run-through of a workout, holding all mutable timer state.
///
/// A session does not own a clock. The host drives it by calling [`tick`]
/// once per elapsed second while the session is running; user commands map
/// to [`start`], [`pause`], [`reset`] and [`skip`]. All operations are
/// defined no-ops once the session has finished, so the host needs no
/// defensive checks of its own.
///
/// [`tick`]: Session::tick
/// [`start`]: Session::start
/// [`pause`]: Session::pause
/// [`reset`]: Session::reset
/// [`skip`]: Session::skip
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    workout: Workout,
    current: usize,
    phase: Phase,
    remaining: u32,
    completed: BTreeSet<usize>,
    running: bool,
    finished: bool,
}

impl Session {
    /// Create a session over `workout`, positioned at the first exercise's
    /// active phase with the timer paused.
    pub fn new(workout: Workout) -> Result<Self, InvalidWorkout> {
        if workout.exercises.is_empty() {
            return Err(InvalidWorkout::Empty);
        }

        if let Some(index) = workout.exercises.iter().position(|e| e.active.is_zero()) {
            return Err(InvalidWorkout::NoActiveDuration(index));
        }

        let remaining = u32::from(workout.exercises[0].active);

        Ok(Self {
            workout,
            current: 0,
            phase: Phase::Active,
            remaining,
            completed: BTreeSet::new(),
            running: false,
            finished: false,
        })
    }

    #[must_use]
    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_exercise(&self) -> &Exercise {
        &self.workout.exercises[self.current]
    }

    /// The exercise following the current one, shown during rest phases.
    #[must_use]
    pub fn next_exercise(&self) -> Option<&Exercise> {
        self.workout.exercises.get(self.current + 1)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Remaining whole seconds in the current phase.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Indices of exercises whose active phase has run to completion.
    /// Skipped exercises are never included.
    #[must_use]
    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fraction of the workout reached so far, based on the exercise index.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        if self.finished {
            return 1.0;
        }
        self.current as f32 / self.workout.exercises.len() as f32
    }

    /// Fraction of the current phase already elapsed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn phase_progress(&self) -> f32 {
        if self.finished {
            return 1.0;
        }
        let total = u32::from(match self.phase {
            Phase::Active => self.current_exercise().active,
            Phase::Resting => self.current_exercise().rest,
        });
        if total == 0 {
            return 0.0;
        }
        1.0 - self.remaining as f32 / total as f32
    }

    /// Completion summary once the session has finished.
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        self.finished.then(|| Summary {
            duration: self.workout.duration(),
            exercises: self.workout.num_exercises(),
            calories: self.workout.calories,
        })
    }

    /// Resume ticking. Ignored once finished; a no-op while already running.
    pub fn start(&mut self) {
        if !self.finished {
            self.running = true;
        }
    }

    /// Stop ticking without touching the remaining time. Idempotent.
    pub fn pause(&mut self) {
        if !self.finished {
            self.running = false;
        }
    }

    /// Put the current exercise back to the start of its active phase and
    /// pause. The exercise index and the completed set are left untouched.
    /// Ignored once finished.
    pub fn reset(&mut self) {
        if self.finished {
            return;
        }
        self.running = false;
        self.phase = Phase::Active;
        self.remaining = u32::from(self.current_exercise().active);
    }

    /// Jump to the next exercise regardless of phase and remaining time.
    /// The current exercise is not marked as completed. Ignored once
    /// finished; skipping the last exercise finishes the session.
    pub fn skip(&mut self) {
        if self.finished {
            return;
        }
        self.advance();
    }

    /// Advance the clock by one second. Ignored while paused or finished.
    ///
    /// An exercise is marked as completed the moment its active phase runs
    /// out; its rest phase (if any) follows, then the next exercise starts.
    /// After the last exercise's phases the session finishes.
    pub fn tick(&mut self) {
        if !self.running || self.finished {
            return;
        }

        if self.remaining > 0 {
            self.remaining -= 1;
        }

        if self.remaining > 0 {
            return;
        }

        match self.phase {
            Phase::Active => {
                self.completed.insert(self.current);
                let rest = self.current_exercise().rest;
                if rest.is_zero() {
                    self.advance();
                } else {
                    self.phase = Phase::Resting;
                    self.remaining = u32::from(rest);
                }
            }
            Phase::Resting => self.advance(),
        }
    }

    fn advance(&mut self) {
        if self.current + 1 < self.workout.exercises.len() {
            self.current += 1;
            self.phase = Phase::Active;
            self.remaining = u32::from(self.current_exercise().active);
        } else {
            self.finished = true;
            self.running = false;
        }
    }
}

/// Figures for the completion view, derived from the workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub duration: Duration,
    pub exercises: usize,
    pub calories: u32,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InvalidWorkout {
    #[error("workout has no exercises")]
    Empty,
    #[error("exercise {0} has an active duration of zero")]
    NoActiveDuration(usize),
}
