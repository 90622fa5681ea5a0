use crate::r#match::Match;
use chrono::NaiveDate;
use itertools::Itertools;

/// Day-by-day view over fixtures and results.
pub struct FixtureCalendar;

impl FixtureCalendar {
    /// Distinct kickoff dates, ascending.
    pub fn dates<'m>(matches: impl IntoIterator<Item = &'m Match>) -> Vec<NaiveDate> {
        matches
            .into_iter()
            .map(|m| m.date.date())
            .unique()
            .sorted()
            .collect()
    }

    pub fn on_date<'m>(
        matches: impl IntoIterator<Item = &'m Match>,
        date: NaiveDate,
    ) -> Vec<&'m Match> {
        matches
            .into_iter()
            .filter(|m| m.date.date() == date)
            .sorted_by_key(|m| (m.date, m.stage, m.position))
            .collect()
    }

    pub fn previous(dates: &[NaiveDate], current: NaiveDate) -> Option<NaiveDate> {
        dates.iter().rev().find(|d| **d < current).copied()
    }

    pub fn next(dates: &[NaiveDate], current: NaiveDate) -> Option<NaiveDate> {
        dates.iter().find(|d| **d > current).copied()
    }

    /// First date with fixtures, the page opened by default.
    pub fn first<'m>(matches: impl IntoIterator<Item = &'m Match>) -> Option<NaiveDate> {
        matches.into_iter().map(|m| m.date.date()).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::Stage;

    #[test]
    fn dates_are_distinct_and_sorted() {
        let matches = vec![
            generate_test_match(1, 12, 20),
            generate_test_match(2, 10, 18),
            generate_test_match(3, 12, 14),
        ];

        let dates = FixtureCalendar::dates(&matches);

        assert_eq!(dates, vec![day(10), day(12)]);
        assert_eq!(FixtureCalendar::first(&matches), Some(day(10)));
    }

    #[test]
    fn on_date_orders_by_kickoff() {
        let matches = vec![
            generate_test_match(1, 12, 20),
            generate_test_match(2, 10, 18),
            generate_test_match(3, 12, 14),
        ];

        let ids: Vec<u32> = FixtureCalendar::on_date(&matches, day(12)).iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![3, 1]);
        assert!(FixtureCalendar::on_date(&matches, day(11)).is_empty());
    }

    #[test]
    fn navigation_stops_at_both_ends() {
        let dates = vec![day(3), day(7), day(9)];

        assert_eq!(FixtureCalendar::previous(&dates, day(3)), None);
        assert_eq!(FixtureCalendar::next(&dates, day(3)), Some(day(7)));
        assert_eq!(FixtureCalendar::previous(&dates, day(9)), Some(day(7)));
        assert_eq!(FixtureCalendar::next(&dates, day(9)), None);
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn generate_test_match(id: u32, d: u32, hour: u32) -> Match {
        Match::new(id, 1, Stage::Quarterfinal, id as u8, day(d).and_hms_opt(hour, 0, 0).unwrap())
    }
}
