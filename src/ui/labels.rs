use chrono::{Datelike, NaiveDate};

use crate::provider::{Event, MonthIndex};

pub const MONTH_NAMES: [&str; 12] = [
    "januar",
    "februar",
    "marts",
    "april",
    "maj",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "december",
];

pub const WEEKDAYS: [&str; 7] = ["Man", "Tir", "Ons", "Tor", "Fre", "Lør", "Søn"];

pub const LOCATION: &str = "Lokation";
pub const DESCRIPTION: &str = "Beskrivelse";
pub const NO_DESCRIPTION: &str = "Ingen beskrivelse tilgængelig.";
pub const LINKS: &str = "Streaming & Links";
pub const OTHER_CATEGORY: &str = "Andre";
pub const NO_EVENTS: &str = "Ingen turneringer";

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// E.g. `MAJ 2024`.
pub fn month_title(month: MonthIndex) -> String {
    format!("{} {}", month_name(month.month()).to_uppercase(), month.year())
}

/// E.g. `3. maj 2024`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}. {} {}", date.day(), month_name(date.month()), date.year())
}

pub fn format_span(event: &Event) -> String {
    if event.begin() == event.end() {
        format_date(event.begin())
    } else {
        format!("{} - {}", format_date(event.begin()), format_date(event.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Category;

    #[test]
    fn danish_titles() {
        assert_eq!(month_title(MonthIndex::new(2024, 5).unwrap()), "MAJ 2024");
        assert_eq!(month_title(MonthIndex::new(2025, 12).unwrap()), "DECEMBER 2025");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(1), "januar");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn spans() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        let multi = Event::new("A", Category::P1, d(3), d(5)).unwrap();
        let single = Event::new("B", Category::P1, d(3), d(3)).unwrap();

        assert_eq!(format_span(&multi), "3. maj 2024 - 5. maj 2024");
        assert_eq!(format_span(&single), "3. maj 2024");
    }
}
