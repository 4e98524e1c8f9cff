use std::slice::Iter;

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, Property, ReadError};

#[allow(async_fn_in_trait)]
pub trait ProgressService {
    async fn get_week(&self) -> Result<Vec<DayProgress>, ReadError>;
    async fn get_goals(&self) -> Result<Vec<Goal>, ReadError>;
    async fn get_achievements(&self) -> Result<Vec<Achievement>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgressRepository {
    async fn read_week(&self) -> Result<Vec<DayProgress>, ReadError>;
    async fn read_goals(&self) -> Result<Vec<Goal>, ReadError>;
    async fn read_achievements(&self) -> Result<Vec<Achievement>, ReadError>;
}

/// Completed versus planned routines of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayProgress {
    pub date: NaiveDate,
    pub completed: u32,
    pub total: u32,
}

impl DayProgress {
    /// Completion as a fraction in 0..=1; zero for days without planned
    /// routines.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f32 / self.total as f32
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// Scale of the week chart: the largest number of planned routines on a
/// single day.
#[must_use]
pub fn week_scale(days: &[DayProgress]) -> u32 {
    days.iter().map(|d| d.total).max().unwrap_or(0)
}

/// Length of the trailing run of fully completed days.
#[must_use]
pub fn current_streak(days: &[DayProgress]) -> usize {
    days.iter().rev().take_while(|d| d.is_complete()).count()
}

/// A monthly target and the progress made towards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub label: String,
    pub value: u32,
    pub target: u32,
    pub unit: String,
}

impl Goal {
    /// Progress towards the target in percent, capped at 100 for the
    /// progress bar. A goal without a target counts as reached.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f32 {
        if self.target == 0 {
            return 100.0;
        }
        (self.value as f32 / self.target as f32 * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementID,
    pub title: Name,
    pub description: String,
    pub icon: String,
    pub achieved: bool,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AchievementID(Uuid);

impl AchievementID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for AchievementID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for AchievementID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Reporting range of the progress view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Timeframe {
    Week,
    Month,
    Year,
}

impl Property for Timeframe {
    fn iter() -> Iter<'static, Timeframe> {
        static TIMEFRAMES: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Year];
        TIMEFRAMES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Timeframe::Week => "Week",
            Timeframe::Month => "Month",
            Timeframe::Year => "Year",
        }
    }
}
