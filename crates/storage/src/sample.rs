//! The records a fresh store is seeded with.

use chrono::{Duration, NaiveDate, NaiveTime};

use fitflow_domain as domain;

pub struct SampleData {
    pub routines: Vec<domain::Routine>,
    pub schedule: domain::Schedule,
    pub week: Vec<domain::DayProgress>,
    pub goals: Vec<domain::Goal>,
    pub achievements: Vec<domain::Achievement>,
}

impl Default for SampleData {
    fn default() -> Self {
        Self {
            routines: routines(),
            schedule: schedule(),
            week: week(),
            goals: goals(),
            achievements: achievements(),
        }
    }
}

fn name(value: &str) -> domain::Name {
    domain::Name::new(value).unwrap()
}

fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

fn routines() -> Vec<domain::Routine> {
    vec![
        domain::Routine {
            id: 1.into(),
            name: name("Morning Cardio"),
            category: domain::RoutineCategory::Cardio,
            intensity: domain::Intensity::Easy,
            duration: Duration::minutes(30),
            num_exercises: 4,
            time: time(7, 0),
            completed: false,
        },
        domain::Routine {
            id: 2.into(),
            name: name("Upper Body Strength"),
            category: domain::RoutineCategory::Strength,
            intensity: domain::Intensity::Medium,
            duration: Duration::minutes(45),
            num_exercises: 6,
            time: time(18, 0),
            completed: true,
        },
        domain::Routine {
            id: 3.into(),
            name: name("Evening Stretch"),
            category: domain::RoutineCategory::Flexibility,
            intensity: domain::Intensity::Easy,
            duration: Duration::minutes(15),
            num_exercises: 5,
            time: time(21, 0),
            completed: false,
        },
    ]
}

fn schedule() -> domain::Schedule {
    domain::Schedule::from([
        (
            date(15),
            vec![
                domain::ScheduledRoutine {
                    name: name("Morning Run"),
                    time: time(7, 0),
                },
                domain::ScheduledRoutine {
                    name: name("Core Workout"),
                    time: time(19, 0),
                },
            ],
        ),
        (
            date(16),
            vec![domain::ScheduledRoutine {
                name: name("Upper Body"),
                time: time(18, 0),
            }],
        ),
        (
            date(17),
            vec![
                domain::ScheduledRoutine {
                    name: name("Yoga Session"),
                    time: time(8, 0),
                },
                domain::ScheduledRoutine {
                    name: name("Cardio"),
                    time: time(18, 30),
                },
            ],
        ),
        (
            date(18),
            vec![domain::ScheduledRoutine {
                name: name("Leg Day"),
                time: time(7, 0),
            }],
        ),
        (
            date(20),
            vec![
                domain::ScheduledRoutine {
                    name: name("Full Body"),
                    time: time(18, 0),
                },
                domain::ScheduledRoutine {
                    name: name("Stretching"),
                    time: time(21, 0),
                },
            ],
        ),
    ])
}

fn week() -> Vec<domain::DayProgress> {
    [(2, 2), (1, 2), (3, 3), (1, 1), (2, 2), (0, 1), (1, 1)]
        .iter()
        .zip(13u32..)
        .map(|(&(completed, total), day)| domain::DayProgress {
            date: date(day),
            completed,
            total,
        })
        .collect()
}

fn goals() -> Vec<domain::Goal> {
    [
        ("Workouts Completed", 24, 30, ""),
        ("Total Time", 18, 25, " hrs"),
        ("Calories Burned", 3420, 4000, ""),
        ("Active Days", 18, 25, ""),
    ]
    .iter()
    .map(|&(label, value, target, unit)| domain::Goal {
        label: label.to_string(),
        value,
        target,
        unit: unit.to_string(),
    })
    .collect()
}

fn achievements() -> Vec<domain::Achievement> {
    [
        (
            1u128,
            "7 Day Streak",
            "Complete workouts for 7 consecutive days",
            "🔥",
            true,
        ),
        (2, "Early Bird", "Complete 5 morning workouts", "🌅", true),
        (3, "Cardio King", "Complete 10 cardio sessions", "💨", false),
        (
            4,
            "Strength Master",
            "Complete 15 strength workouts",
            "💪",
            false,
        ),
    ]
    .iter()
    .map(
        |&(id, title, description, icon, achieved)| domain::Achievement {
            id: id.into(),
            title: name(title),
            description: description.to_string(),
            icon: icon.to_string(),
            achieved,
        },
    )
    .collect()
}
