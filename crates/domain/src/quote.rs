use chrono::{Datelike, NaiveDate};

pub static QUOTES: [&str; 8] = [
    "The only bad workout is the one that didn't happen.",
    "Your body can do it. It's your mind you need to convince.",
    "Fitness is not about being better than someone else. It's about being better than you used to be.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Success is the sum of small efforts repeated day in and day out.",
    "Don't wish for it, work for it.",
    "Champions don't become champions in the ring. They become champions in their training.",
    "Push yourself because no one else is going to do it for you.",
];

/// Quote of the day, rotating through [`QUOTES`] by day of month.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn daily_quote(date: NaiveDate) -> &'static str {
    QUOTES[date.day() as usize % QUOTES.len()]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(8, QUOTES[0])]
    #[case(15, QUOTES[7])]
    #[case(31, QUOTES[7])]
    fn test_daily_quote(#[case] day: u32, #[case] expected: &str) {
        assert_eq!(
            daily_quote(NaiveDate::from_ymd_opt(2025, 1, day).unwrap()),
            expected
        );
    }

    #[test]
    fn test_daily_quote_is_stable_within_a_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(daily_quote(date), daily_quote(date));
    }
}
