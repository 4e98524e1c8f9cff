//! In-memory data source.
//!
//! Holds the application's records in process memory for the lifetime of
//! the store. Nothing is persisted; dropping the store drops the data.

use std::sync::RwLock;

use chrono::{Duration, NaiveTime};
use log::debug;
use uuid::Uuid;

use fitflow_domain as domain;

use crate::sample::SampleData;

pub struct InMemory {
    routines: RwLock<Vec<domain::Routine>>,
    schedule: RwLock<domain::Schedule>,
    week: RwLock<Vec<domain::DayProgress>>,
    goals: RwLock<Vec<domain::Goal>>,
    achievements: RwLock<Vec<domain::Achievement>>,
}

impl InMemory {
    #[must_use]
    pub fn new(data: SampleData) -> Self {
        Self {
            routines: RwLock::new(data.routines),
            schedule: RwLock::new(data.schedule),
            week: RwLock::new(data.week),
            goals: RwLock::new(data.goals),
            achievements: RwLock::new(data.achievements),
        }
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new(SampleData::default())
    }
}

fn poisoned<T>(_: T) -> domain::StorageError {
    domain::StorageError::Other("poisoned lock".into())
}

impl domain::RoutineRepository for InMemory {
    async fn read_routines(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        Ok(self.routines.read().map_err(poisoned)?.clone())
    }

    async fn create_routine(
        &self,
        name: domain::Name,
        category: domain::RoutineCategory,
        intensity: domain::Intensity,
        duration: Duration,
        num_exercises: u32,
        time: NaiveTime,
    ) -> Result<domain::Routine, domain::CreateError> {
        let mut routines = self.routines.write().map_err(poisoned)?;
        let routine = domain::Routine {
            id: Uuid::new_v4().into(),
            name,
            category,
            intensity,
            duration,
            num_exercises,
            time,
            completed: false,
        };
        routines.push(routine.clone());
        debug!("created routine {}", routine.name);
        Ok(routine)
    }

    async fn set_routine_completed(
        &self,
        id: domain::RoutineID,
        completed: bool,
    ) -> Result<domain::Routine, domain::UpdateError> {
        let mut routines = self.routines.write().map_err(poisoned)?;
        let Some(routine) = routines.iter_mut().find(|r| r.id == id) else {
            return Err(domain::StorageError::NotFound.into());
        };
        routine.completed = completed;
        Ok(routine.clone())
    }

    async fn delete_routine(
        &self,
        id: domain::RoutineID,
    ) -> Result<domain::RoutineID, domain::DeleteError> {
        let mut routines = self.routines.write().map_err(poisoned)?;
        let len = routines.len();
        routines.retain(|r| r.id != id);
        if routines.len() == len {
            return Err(domain::StorageError::NotFound.into());
        }
        debug!("deleted routine");
        Ok(id)
    }
}

impl domain::ScheduleRepository for InMemory {
    async fn read_schedule(&self) -> Result<domain::Schedule, domain::ReadError> {
        Ok(self.schedule.read().map_err(poisoned)?.clone())
    }
}

impl domain::ProgressRepository for InMemory {
    async fn read_week(&self) -> Result<Vec<domain::DayProgress>, domain::ReadError> {
        Ok(self.week.read().map_err(poisoned)?.clone())
    }

    async fn read_goals(&self) -> Result<Vec<domain::Goal>, domain::ReadError> {
        Ok(self.goals.read().map_err(poisoned)?.clone())
    }

    async fn read_achievements(&self) -> Result<Vec<domain::Achievement>, domain::ReadError> {
        Ok(self.achievements.read().map_err(poisoned)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use fitflow_domain::{ProgressRepository, RoutineRepository, ScheduleRepository};
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_read_routines_returns_the_sample_data() {
        let store = InMemory::default();

        let routines = store.read_routines().await.unwrap();

        assert_eq!(routines.len(), 3);
        assert_eq!(routines[0].name.as_ref(), "Morning Cardio");
        assert!(routines[1].completed);
    }

    #[tokio::test]
    async fn test_create_routine_appends() {
        let store = InMemory::default();

        let routine = store
            .create_routine(
                domain::Name::new("Full Body").unwrap(),
                domain::RoutineCategory::Strength,
                domain::Intensity::Hard,
                Duration::minutes(40),
                8,
                NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            )
            .await
            .unwrap();

        assert!(!routine.completed);
        assert_eq!(store.read_routines().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_set_routine_completed() {
        let store = InMemory::default();
        let id = store.read_routines().await.unwrap()[0].id;

        let routine = store.set_routine_completed(id, true).await.unwrap();

        assert!(routine.completed);
        assert!(store.read_routines().await.unwrap()[0].completed);
    }

    #[tokio::test]
    async fn test_set_routine_completed_unknown_id() {
        let store = InMemory::default();

        assert!(matches!(
            store
                .set_routine_completed(domain::RoutineID::nil(), true)
                .await,
            Err(domain::UpdateError::Storage(
                domain::StorageError::NotFound
            ))
        ));
    }

    #[tokio::test]
    async fn test_delete_routine() {
        let store = InMemory::default();
        let id = store.read_routines().await.unwrap()[2].id;

        assert_eq!(store.delete_routine(id).await.unwrap(), id);
        assert_eq!(store.read_routines().await.unwrap().len(), 2);
        assert!(matches!(
            store.delete_routine(id).await,
            Err(domain::DeleteError::Storage(
                domain::StorageError::NotFound
            ))
        ));
    }

    #[tokio::test]
    async fn test_read_schedule() {
        let store = InMemory::default();

        let schedule = store.read_schedule().await.unwrap();

        assert_eq!(schedule.len(), 5);
    }

    #[tokio::test]
    async fn test_read_progress() {
        let store = InMemory::default();

        assert_eq!(store.read_week().await.unwrap().len(), 7);
        assert_eq!(store.read_goals().await.unwrap().len(), 4);
        assert_eq!(store.read_achievements().await.unwrap().len(), 4);
    }
}
