use chrono::{Datelike, Duration, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::{Error, ErrorKind};

pub fn days_of_month(first: &NaiveDate) -> u32 {
    first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .count() as u32
}

/// Monday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Sunday on or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(6 - date.weekday().num_days_from_monday() as i64)
}

/// A calendar month, represented by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthIndex {
    first: NaiveDate,
}

impl MonthIndex {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| MonthIndex { first })
    }

    pub fn current() -> Self {
        MonthIndex::from(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number starting at 1 for January.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn num_days(&self) -> u32 {
        days_of_month(&self.first)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Duration::days(self.num_days() as i64 - 1)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Self {
        MonthIndex {
            first: self.last_day() + Duration::days(1),
        }
    }

    pub fn prev(&self) -> Self {
        MonthIndex::from(self.first - Duration::days(1))
    }

    /// Weeks covering the whole month, each running Monday through Sunday.
    ///
    /// The first week starts on the Monday on or before the first day of the
    /// month, the last one ends on the Sunday on or after its last day.
    pub fn weeks(&self) -> Vec<Vec<NaiveDate>> {
        let begin = start_of_week(self.first_day());
        let end = end_of_week(self.last_day());

        let days: Vec<NaiveDate> = begin.iter_days().take_while(|day| *day <= end).collect();

        days.chunks(7).map(|week| week.to_vec()).collect()
    }
}

impl From<NaiveDate> for MonthIndex {
    fn from(date: NaiveDate) -> Self {
        MonthIndex {
            first: date - Duration::days(date.day0() as i64),
        }
    }
}

impl FromStr for MonthIndex {
    type Err = Error;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|e| {
                Error::new(
                    ErrorKind::DateParse,
                    &format!("'{}' is not a month ({})", s, e),
                )
            })?;

        Ok(MonthIndex { first })
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

/// Weeks of the month containing `reference`.
pub fn month_grid(reference: NaiveDate) -> Vec<Vec<NaiveDate>> {
    MonthIndex::from(reference).weeks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_aligned_to_weeks_for_every_month() {
        let mut month = MonthIndex::new(2019, 1).unwrap();
        while month.year() < 2031 {
            let weeks = month.weeks();
            let days: Vec<NaiveDate> = weeks.iter().flatten().cloned().collect();

            assert!(weeks.iter().all(|week| week.len() == 7));
            assert_eq!(days.len() % 7, 0);
            assert_eq!(days.first().unwrap().weekday(), Weekday::Mon);
            assert_eq!(days.last().unwrap().weekday(), Weekday::Sun);
            assert!(days.contains(&month.first_day()));
            assert!(days.contains(&month.last_day()));
            assert!(weeks.len() >= 4 && weeks.len() <= 6);

            month = month.next();
        }
    }

    #[test]
    fn may_2024_grid() {
        let weeks = month_grid(date(2024, 5, 17));

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], date(2024, 4, 29));
        assert_eq!(weeks[4][6], date(2024, 6, 2));
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_days() {
        // April 2024 starts on a Monday and ends on a Tuesday
        let weeks = MonthIndex::new(2024, 4).unwrap().weeks();

        assert_eq!(weeks[0][0], date(2024, 4, 1));
        assert_eq!(weeks.last().unwrap()[6], date(2024, 5, 5));
    }

    #[test]
    fn february_2021_fits_four_weeks() {
        let weeks = MonthIndex::new(2021, 2).unwrap().weeks();

        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], date(2021, 2, 1));
        assert_eq!(weeks[3][6], date(2021, 2, 28));
    }

    #[test]
    fn navigation_rolls_over_years() {
        let december = MonthIndex::new(2023, 12).unwrap();

        assert_eq!(december.next(), MonthIndex::new(2024, 1).unwrap());
        assert_eq!(december.next().prev(), december);
        assert_eq!(
            MonthIndex::new(2024, 1).unwrap().prev(),
            MonthIndex::new(2023, 12).unwrap()
        );
    }

    #[test]
    fn days_of_month_handles_leap_years() {
        assert_eq!(MonthIndex::new(2024, 2).unwrap().num_days(), 29);
        assert_eq!(MonthIndex::new(2023, 2).unwrap().num_days(), 28);
        assert_eq!(MonthIndex::new(2023, 12).unwrap().num_days(), 31);
    }

    #[test]
    fn parse_month() {
        let month: MonthIndex = "2024-05".parse().unwrap();

        assert_eq!(month.first_day(), date(2024, 5, 1));
        assert_eq!(month.to_string(), "2024-05");
        assert!("2024-13".parse::<MonthIndex>().is_err());
        assert!("May".parse::<MonthIndex>().is_err());
    }

    #[test]
    fn contains_only_days_of_same_month() {
        let month = MonthIndex::new(2024, 5).unwrap();

        assert!(month.contains(&date(2024, 5, 31)));
        assert!(!month.contains(&date(2024, 6, 1)));
        assert!(!month.contains(&date(2023, 5, 10)));
    }
}
