use chrono::{Datelike, NaiveDate, Weekday};
use std::path::PathBuf;

use padelcal::agenda::Agenda;
use padelcal::provider::{Category, ErrorKind, MonthIndex, Swatch};

fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn bundled_flat_dataset() {
    let agenda = Agenda::from_path(&manifest_path("data/tournaments.json")).unwrap();

    assert_eq!(agenda.events().len(), 6);
    assert!(agenda.sources().is_empty());

    let unknown = agenda
        .events()
        .iter()
        .find(|e| e.name() == "Klubmesterskab")
        .unwrap();
    assert_eq!(unknown.category().swatch(), Swatch::Neutral);
    assert_eq!(unknown.description(), None);
}

#[test]
fn may_2024_grid_from_file() {
    let agenda = Agenda::from_path(&manifest_path("data/tournaments.json")).unwrap();
    let weeks = agenda.month(MonthIndex::new(2024, 5).unwrap());

    let days: Vec<_> = weeks.iter().flatten().collect();
    assert_eq!(days.len() % 7, 0);
    assert_eq!(days.first().unwrap().date.weekday(), Weekday::Mon);
    assert_eq!(days.last().unwrap().date.weekday(), Weekday::Sun);

    let major_days: Vec<NaiveDate> = days
        .iter()
        .filter(|day| day.events.iter().any(|e| e.category() == &Category::Major))
        .map(|day| day.date)
        .collect();
    assert_eq!(major_days, vec![date(2024, 5, 3), date(2024, 5, 4), date(2024, 5, 5)]);

    // Trailing days of the grid belong to June and still show events
    let june_first = days.iter().find(|day| day.date == date(2024, 6, 1)).unwrap();
    assert!(!june_first.in_month);
    assert_eq!(june_first.events.len(), 1);
}

#[test]
fn sourced_dataset_drops_dangling_links() {
    let agenda = Agenda::from_path(&manifest_path("tests/data/sourced.json")).unwrap();

    assert_eq!(agenda.sources().len(), 2);

    let league = &agenda.events()[0];
    assert_eq!(league.category(), &Category::LunarLigaen);
    let labels: Vec<&str> = league.links().iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["DPF Live", "TV2 Play"]);

    let timestamped = &agenda.events()[1];
    assert_eq!(timestamped.begin(), date(2024, 5, 25));
    assert_eq!(timestamped.end(), date(2024, 5, 26));
}

#[test]
fn missing_dataset() {
    let err = Agenda::from_path(&manifest_path("data/does-not-exist.json"))
        .err()
        .unwrap();

    assert!(matches!(err.kind, ErrorKind::IOError(_)));
}
