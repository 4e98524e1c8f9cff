use chrono::{Duration, NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;

use fitflow_domain as domain;
use fitflow_domain::{ProgressService, RoutineService, ScheduleService};
use fitflow_storage::InMemory;

fn service() -> domain::Service<InMemory> {
    domain::Service::new(InMemory::default())
}

#[tokio::test]
async fn test_get_routines() {
    let routines = service().get_routines().await.unwrap();

    assert_eq!(
        routines.iter().map(|r| r.name.as_ref()).collect::<Vec<_>>(),
        vec!["Morning Cardio", "Upper Body Strength", "Evening Stretch"]
    );
    assert_eq!(domain::daily_progress(&routines).percentage(), 33);
}

#[tokio::test]
async fn test_create_and_complete_routine() {
    let service = service();

    let routine = service
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

    let routine = service.set_routine_completed(routine.id, true).await.unwrap();
    assert!(routine.completed);

    let progress = domain::daily_progress(&service.get_routines().await.unwrap());
    assert_eq!(progress.completed, 2);
    assert_eq!(progress.total, 4);
}

#[tokio::test]
async fn test_set_routine_completed_unknown_id() {
    assert!(matches!(
        service()
            .set_routine_completed(domain::RoutineID::nil(), true)
            .await,
        Err(domain::UpdateError::Storage(domain::StorageError::NotFound))
    ));
}

#[tokio::test]
async fn test_delete_routine() {
    let service = service();
    let id = service.get_routines().await.unwrap()[0].id;

    assert_eq!(service.delete_routine(id).await.unwrap(), id);
    assert_eq!(service.get_routines().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_validate_routine_name() {
    let service = service();

    assert!(matches!(
        service.validate_routine_name("Full Body").await,
        Ok(name) if name.as_ref() == "Full Body"
    ));
    assert!(matches!(
        service.validate_routine_name("Morning Cardio").await,
        Err(domain::ValidationError::Conflict(field)) if field == "name"
    ));
    assert!(matches!(
        service.validate_routine_name("   ").await,
        Err(domain::ValidationError::Other(_))
    ));
}

#[tokio::test]
async fn test_get_scheduled_routines() {
    let service = service();

    let routines = service
        .get_scheduled_routines(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        .await
        .unwrap();
    assert_eq!(
        routines.iter().map(|r| r.name.as_ref()).collect::<Vec<_>>(),
        vec!["Morning Run", "Core Workout"]
    );

    assert_eq!(
        service
            .get_scheduled_routines(NaiveDate::from_ymd_opt(2025, 1, 19).unwrap())
            .await
            .unwrap(),
        vec![]
    );
}

#[tokio::test]
async fn test_scheduled_dates_of_a_month() {
    let service = service();
    let schedule = service.get_schedule().await.unwrap();

    let view = domain::MonthView::containing(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(domain::scheduled_dates(&schedule, view).len(), 5);
    assert!(domain::scheduled_dates(&schedule, view.next()).is_empty());
}

#[tokio::test]
async fn test_get_week() {
    let week = service().get_week().await.unwrap();

    assert_eq!(week.len(), 7);
    assert_eq!(domain::week_scale(&week), 3);
    assert_eq!(domain::current_streak(&week), 1);
}

#[tokio::test]
async fn test_get_goals() {
    let goals = service().get_goals().await.unwrap();

    assert_eq!(goals[0].label, "Workouts Completed");
    assert!((goals[0].percentage() - 80.0).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_get_achievements() {
    let achievements = service().get_achievements().await.unwrap();

    assert_eq!(
        achievements.iter().filter(|a| a.achieved).count(),
        2
    );
}
