use chrono::{Duration, NaiveDate, NaiveTime};
use log::{debug, error};

use crate::{
    Achievement, CreateError, DayProgress, DeleteError, Goal, Intensity, Name, ProgressRepository,
    ProgressService, ReadError, Routine, RoutineCategory, RoutineID, RoutineRepository,
    RoutineService, Schedule, ScheduleRepository, ScheduleService, ScheduledRoutine, UpdateError,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NotFound) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: RoutineRepository> RoutineService for Service<R> {
    async fn get_routines(&self) -> Result<Vec<Routine>, ReadError> {
        log_on_error!(self.repository.read_routines(), ReadError, "get", "routines")
    }

    async fn create_routine(
        &self,
        name: Name,
        category: RoutineCategory,
        intensity: Intensity,
        duration: Duration,
        num_exercises: u32,
        time: NaiveTime,
    ) -> Result<Routine, CreateError> {
        log_on_error!(
            self.repository
                .create_routine(name, category, intensity, duration, num_exercises, time),
            CreateError,
            "create",
            "routine"
        )
    }

    async fn set_routine_completed(
        &self,
        id: RoutineID,
        completed: bool,
    ) -> Result<Routine, UpdateError> {
        log_on_error!(
            self.repository.set_routine_completed(id, completed),
            UpdateError,
            "modify",
            "routine"
        )
    }

    async fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
        log_on_error!(
            self.repository.delete_routine(id),
            DeleteError,
            "delete",
            "routine"
        )
    }
}

impl<R: ScheduleRepository> ScheduleService for Service<R> {
    async fn get_schedule(&self) -> Result<Schedule, ReadError> {
        log_on_error!(self.repository.read_schedule(), ReadError, "get", "schedule")
    }

    async fn get_scheduled_routines(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<ScheduledRoutine>, ReadError> {
        let schedule = log_on_error!(
            self.repository.read_schedule(),
            ReadError,
            "get",
            "scheduled routines"
        )?;
        Ok(schedule.get(&date).cloned().unwrap_or_default())
    }
}

impl<R: ProgressRepository> ProgressService for Service<R> {
    async fn get_week(&self) -> Result<Vec<DayProgress>, ReadError> {
        log_on_error!(
            self.repository.read_week(),
            ReadError,
            "get",
            "weekly progress"
        )
    }

    async fn get_goals(&self) -> Result<Vec<Goal>, ReadError> {
        log_on_error!(self.repository.read_goals(), ReadError, "get", "goals")
    }

    async fn get_achievements(&self) -> Result<Vec<Achievement>, ReadError> {
        log_on_error!(
            self.repository.read_achievements(),
            ReadError,
            "get",
            "achievements"
        )
    }
}
