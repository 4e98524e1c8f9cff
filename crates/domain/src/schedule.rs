use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};

use crate::{Name, ReadError};

/// Scheduled routines by date.
pub type Schedule = BTreeMap<NaiveDate, Vec<ScheduledRoutine>>;

#[allow(async_fn_in_trait)]
pub trait ScheduleService {
    async fn get_schedule(&self) -> Result<Schedule, ReadError>;
    async fn get_scheduled_routines(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<ScheduledRoutine>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ScheduleRepository {
    async fn read_schedule(&self) -> Result<Schedule, ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledRoutine {
    pub name: Name,
    pub time: NaiveTime,
}

/// One month of the calendar, laid out in a Sunday-first grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    #[must_use]
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Number of days in the month.
    #[must_use]
    pub fn days(&self) -> u32 {
        (self.first + Months::new(1) - Days::new(1)).day()
    }

    /// Number of empty grid cells before the 1st of the month.
    #[must_use]
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.first.iter_days().take(self.days() as usize)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    #[must_use]
    pub fn previous(&self) -> Self {
        Self {
            first: self.first - Months::new(1),
        }
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            first: self.first + Months::new(1),
        }
    }
}

/// Dates within `view` that have at least one scheduled routine.
#[must_use]
pub fn scheduled_dates(schedule: &Schedule, view: MonthView) -> BTreeSet<NaiveDate> {
    schedule
        .iter()
        .filter(|(date, routines)| view.contains(**date) && !routines.is_empty())
        .map(|(date, _)| *date)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_view_containing() {
        let view = MonthView::containing(date(2025, 1, 15));

        assert_eq!(view.first(), date(2025, 1, 1));
        assert_eq!(view.year(), 2025);
        assert_eq!(view.month(), 1);
    }

    #[rstest]
    #[case(date(2025, 1, 15), 31)]
    #[case(date(2025, 2, 1), 28)]
    #[case(date(2024, 2, 29), 29)]
    #[case(date(2025, 4, 30), 30)]
    fn test_month_view_days(#[case] date: NaiveDate, #[case] expected: u32) {
        assert_eq!(MonthView::containing(date).days(), expected);
    }

    #[rstest]
    #[case(date(2025, 1, 1), 3)] // January 2025 starts on a Wednesday
    #[case(date(2025, 6, 1), 0)] // June 2025 starts on a Sunday
    #[case(date(2025, 8, 1), 5)] // August 2025 starts on a Friday
    fn test_month_view_leading_blanks(#[case] date: NaiveDate, #[case] expected: u32) {
        assert_eq!(MonthView::containing(date).leading_blanks(), expected);
    }

    #[test]
    fn test_month_view_dates() {
        let dates = MonthView::containing(date(2025, 2, 14))
            .dates()
            .collect::<Vec<_>>();

        assert_eq!(dates.len(), 28);
        assert_eq!(dates[0], date(2025, 2, 1));
        assert_eq!(dates[27], date(2025, 2, 28));
    }

    #[test]
    fn test_month_view_navigation() {
        let view = MonthView::containing(date(2025, 1, 15));

        assert_eq!(view.previous().first(), date(2024, 12, 1));
        assert_eq!(view.next().first(), date(2025, 2, 1));
        assert_eq!(view.previous().next(), view);
    }

    #[test]
    fn test_month_view_contains() {
        let view = MonthView::containing(date(2025, 1, 15));

        assert!(view.contains(date(2025, 1, 1)));
        assert!(view.contains(date(2025, 1, 31)));
        assert!(!view.contains(date(2025, 2, 1)));
        assert!(!view.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_scheduled_dates() {
        let schedule = Schedule::from([
            (
                date(2025, 1, 15),
                vec![
                    ScheduledRoutine {
                        name: Name::new("Morning Run").unwrap(),
                        time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                    },
                    ScheduledRoutine {
                        name: Name::new("Core Workout").unwrap(),
                        time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
                    },
                ],
            ),
            (
                date(2025, 1, 16),
                vec![ScheduledRoutine {
                    name: Name::new("Upper Body").unwrap(),
                    time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                }],
            ),
            (date(2025, 1, 17), vec![]),
            (
                date(2025, 2, 3),
                vec![ScheduledRoutine {
                    name: Name::new("Leg Day").unwrap(),
                    time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                }],
            ),
        ]);

        assert_eq!(
            scheduled_dates(&schedule, MonthView::containing(date(2025, 1, 1))),
            BTreeSet::from([date(2025, 1, 15), date(2025, 1, 16)])
        );
    }
}
