//! Built-in workout library and routine templates.

use std::collections::BTreeMap;

use crate::{Difficulty, Intensity, Name, RoutineCategory, Seconds, WorkoutCategory};

/// Library entry of a workout. Only entries with a full exercise program
/// can be turned into a playable [`crate::Workout`] via [`workout`].
pub struct Workout {
    pub id: u32,
    pub name: &'static str,
    pub category: WorkoutCategory,
    pub difficulty: Difficulty,
    pub duration_min: u32,
    pub calories: u32,
    pub exercises: &'static [&'static str],
}

/// Timed exercise of a workout program.
pub struct Exercise {
    pub name: &'static str,
    pub active_s: u32,
    pub rest_s: u32,
    pub target: &'static str,
    pub instructions: &'static [&'static str],
    pub tip: &'static str,
}

/// Routine template offered by the routine picker.
pub struct Routine {
    pub name: &'static str,
    pub category: RoutineCategory,
    pub intensity: Intensity,
    pub duration_min: u32,
    pub num_exercises: u32,
}

pub(crate) static WORKOUTS: std::sync::LazyLock<BTreeMap<&'static str, &'static Workout>> =
    std::sync::LazyLock::new(|| ENTRIES.iter().map(|w| (w.name, w)).collect());

/// Build a playable workout from a library entry.
///
/// Returns `None` for unknown names and for entries without a full
/// exercise program.
#[must_use]
pub fn workout(name: &str) -> Option<crate::Workout> {
    let entry = WORKOUTS.get(name)?;
    let exercises = program(name)?
        .iter()
        .zip(1u128..)
        .map(|(e, id)| crate::Exercise {
            id: id.into(),
            name: Name::new(e.name).unwrap(),
            active: Seconds::new(e.active_s).unwrap(),
            rest: Seconds::new(e.rest_s).unwrap(),
            target: e.target.to_string(),
            instructions: e.instructions.iter().map(|i| (*i).to_string()).collect(),
            tip: e.tip.to_string(),
        })
        .collect();
    Some(crate::Workout {
        id: u128::from(entry.id).into(),
        name: Name::new(entry.name).unwrap(),
        category: entry.category,
        difficulty: entry.difficulty,
        calories: entry.calories,
        exercises,
    })
}

#[must_use]
pub fn routines_in(category: RoutineCategory) -> Vec<&'static Routine> {
    ROUTINES.iter().filter(|r| r.category == category).collect()
}

fn program(name: &str) -> Option<&'static [Exercise]> {
    match name {
        "Morning Flow" => Some(MORNING_FLOW),
        _ => None,
    }
}

static ENTRIES: &[Workout] = &[
    Workout {
        id: 1,
        name: "Morning Flow",
        category: WorkoutCategory::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration_min: 15,
        calories: 120,
        exercises: &[
            "Push-ups",
            "Squats",
            "Plank",
            "Lunges",
            "Burpees",
            "Mountain Climbers",
        ],
    },
    Workout {
        id: 2,
        name: "Core Blast",
        category: WorkoutCategory::Bodyweight,
        difficulty: Difficulty::Intermediate,
        duration_min: 20,
        calories: 180,
        exercises: &[
            "Crunches",
            "Russian Twists",
            "Leg Raises",
            "Bicycle Crunches",
            "Dead Bug",
            "Hollow Hold",
            "Side Plank",
            "V-Ups",
        ],
    },
    Workout {
        id: 3,
        name: "Full Body HIIT",
        category: WorkoutCategory::Bodyweight,
        difficulty: Difficulty::Advanced,
        duration_min: 25,
        calories: 250,
        exercises: &[
            "Burpees",
            "Jump Squats",
            "Push-up to T",
            "High Knees",
            "Plank Jacks",
            "Tuck Jumps",
            "Pike Push-ups",
            "Single Leg Glute Bridge",
            "Bear Crawl",
            "Jump Lunges",
        ],
    },
    Workout {
        id: 4,
        name: "Upper Body Power",
        category: WorkoutCategory::Bodyweight,
        difficulty: Difficulty::Intermediate,
        duration_min: 18,
        calories: 160,
        exercises: &[
            "Push-ups",
            "Pike Push-ups",
            "Tricep Dips",
            "Arm Circles",
            "Wall Handstand",
            "Superman",
            "Plank Up-Down",
        ],
    },
    Workout {
        id: 5,
        name: "Cardio Kickstart",
        category: WorkoutCategory::HomeCardio,
        difficulty: Difficulty::Beginner,
        duration_min: 12,
        calories: 100,
        exercises: &[
            "Jumping Jacks",
            "High Knees",
            "Butt Kicks",
            "Side Steps",
            "Arm Swings",
        ],
    },
    Workout {
        id: 6,
        name: "Fat Burn Express",
        category: WorkoutCategory::HomeCardio,
        difficulty: Difficulty::Advanced,
        duration_min: 30,
        calories: 300,
        exercises: &[
            "Burpees",
            "Mountain Climbers",
            "Jump Squats",
            "High Knees",
            "Plank Jacks",
            "Tuck Jumps",
            "Skaters",
            "Jump Lunges",
            "Fast Feet",
            "Cross Jacks",
            "Squat Thrusts",
            "Sprint in Place",
        ],
    },
    Workout {
        id: 7,
        name: "Morning Stretch",
        category: WorkoutCategory::Flexibility,
        difficulty: Difficulty::Beginner,
        duration_min: 10,
        calories: 40,
        exercises: &[
            "Cat-Cow",
            "Child's Pose",
            "Downward Dog",
            "Forward Fold",
            "Spinal Twist",
            "Hip Circles",
            "Neck Rolls",
            "Shoulder Shrugs",
        ],
    },
    Workout {
        id: 8,
        name: "Deep Flexibility",
        category: WorkoutCategory::Flexibility,
        difficulty: Difficulty::Intermediate,
        duration_min: 25,
        calories: 80,
        exercises: &[
            "Pigeon Pose",
            "Butterfly Stretch",
            "Seated Forward Fold",
            "Cobra Pose",
            "Thread the Needle",
            "Hip Flexor Stretch",
            "Hamstring Stretch",
            "Quad Stretch",
            "Calf Stretch",
            "Shoulder Stretch",
            "Tricep Stretch",
            "Spinal Twist",
        ],
    },
];

static MORNING_FLOW: &[Exercise] = &[
    Exercise {
        name: "Push-ups",
        active_s: 45,
        rest_s: 15,
        target: "10-15 reps",
        instructions: &[
            "Start in plank position with hands shoulder-width apart",
            "Lower your body until chest nearly touches the floor",
            "Push back up to starting position",
            "Keep your core tight throughout the movement",
        ],
        tip: "Modify by doing knee push-ups if needed",
    },
    Exercise {
        name: "Squats",
        active_s: 45,
        rest_s: 15,
        target: "15-20 reps",
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Lower your body as if sitting back into a chair",
            "Keep your chest up and knees behind toes",
            "Return to standing position",
        ],
        tip: "Focus on proper form over speed",
    },
    Exercise {
        name: "Plank",
        active_s: 30,
        rest_s: 15,
        target: "Hold for 30 seconds",
        instructions: &[
            "Start in push-up position",
            "Hold your body in a straight line",
            "Engage your core and glutes",
            "Breathe steadily throughout",
        ],
        tip: "Drop to knees if you need to maintain form",
    },
    Exercise {
        name: "Lunges",
        active_s: 45,
        rest_s: 15,
        target: "10 each leg",
        instructions: &[
            "Step forward with one leg",
            "Lower your hips until both knees are at 90°",
            "Push back to starting position",
            "Alternate legs",
        ],
        tip: "Keep your front knee over your ankle",
    },
    Exercise {
        name: "Burpees",
        active_s: 45,
        rest_s: 15,
        target: "8-12 reps",
        instructions: &[
            "Start standing, then squat down",
            "Jump feet back into plank position",
            "Do a push-up (optional)",
            "Jump feet forward and jump up with arms overhead",
        ],
        tip: "Modify by stepping instead of jumping",
    },
    Exercise {
        name: "Mountain Climbers",
        active_s: 30,
        rest_s: 0,
        target: "30 seconds",
        instructions: &[
            "Start in plank position",
            "Bring one knee toward your chest",
            "Quickly switch legs",
            "Keep your core engaged",
        ],
        tip: "Maintain steady rhythm and breathing",
    },
];

static ROUTINES: &[Routine] = &[
    Routine {
        name: "Morning Run",
        category: RoutineCategory::Cardio,
        intensity: Intensity::Easy,
        duration_min: 30,
        num_exercises: 1,
    },
    Routine {
        name: "HIIT Workout",
        category: RoutineCategory::Cardio,
        intensity: Intensity::Hard,
        duration_min: 20,
        num_exercises: 8,
    },
    Routine {
        name: "Cycling",
        category: RoutineCategory::Cardio,
        intensity: Intensity::Medium,
        duration_min: 45,
        num_exercises: 1,
    },
    Routine {
        name: "Upper Body",
        category: RoutineCategory::Strength,
        intensity: Intensity::Medium,
        duration_min: 45,
        num_exercises: 6,
    },
    Routine {
        name: "Lower Body",
        category: RoutineCategory::Strength,
        intensity: Intensity::Hard,
        duration_min: 50,
        num_exercises: 7,
    },
    Routine {
        name: "Core Strength",
        category: RoutineCategory::Strength,
        intensity: Intensity::Medium,
        duration_min: 25,
        num_exercises: 5,
    },
    Routine {
        name: "Morning Yoga",
        category: RoutineCategory::Flexibility,
        intensity: Intensity::Easy,
        duration_min: 30,
        num_exercises: 12,
    },
    Routine {
        name: "Evening Stretch",
        category: RoutineCategory::Flexibility,
        intensity: Intensity::Easy,
        duration_min: 15,
        num_exercises: 8,
    },
    Routine {
        name: "Deep Stretch",
        category: RoutineCategory::Flexibility,
        intensity: Intensity::Medium,
        duration_min: 40,
        num_exercises: 15,
    },
];
