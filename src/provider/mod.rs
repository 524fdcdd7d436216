use chrono::NaiveDate;

pub mod category;
pub mod datetime;
pub mod error;
pub mod json;
pub mod link;

pub use category::{Category, Swatch};
pub use datetime::{month_grid, MonthIndex};
pub use error::{Error, ErrorKind};
pub use json::load_dataset;
pub use link::{resolve_links, Link, LinkRefs, LinkTable};

pub type Result<T> = std::result::Result<T, Error>;

/// A tournament spanning whole calendar days, `begin` and `end` inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    category: Category,
    begin: NaiveDate,
    end: NaiveDate,
    location: String,
    description: Option<String>,
    links: Vec<Link>,
}

impl Event {
    pub fn new(name: &str, category: Category, begin: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < begin {
            return Err(Error::new(
                ErrorKind::InvalidRange,
                &format!("'{}' ends {} but begins {}", name, end, begin),
            ));
        }

        Ok(Event {
            name: name.to_owned(),
            category,
            begin,
            end,
            location: String::new(),
            description: None,
            links: Vec::new(),
        })
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_owned();
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn begin(&self) -> NaiveDate {
        self.begin
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.begin).num_days() + 1
    }

    pub fn occurs_on(&self, date: &NaiveDate) -> bool {
        self.begin <= *date && *date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn occurs_on_is_inclusive() {
        let event = Event::new("Aarhus Open", Category::P1, date(2024, 5, 3), date(2024, 5, 5)).unwrap();

        assert!(!event.occurs_on(&date(2024, 5, 2)));
        assert!(event.occurs_on(&date(2024, 5, 3)));
        assert!(event.occurs_on(&date(2024, 5, 4)));
        assert!(event.occurs_on(&date(2024, 5, 5)));
        assert!(!event.occurs_on(&date(2024, 5, 6)));
        assert_eq!(event.num_days(), 3);
    }

    #[test]
    fn single_day_event() {
        let event = Event::new("Finale", Category::Major, date(2024, 6, 1), date(2024, 6, 1)).unwrap();

        assert!(event.occurs_on(&date(2024, 6, 1)));
        assert_eq!(event.num_days(), 1);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = Event::new("Backwards", Category::P2, date(2024, 5, 5), date(2024, 5, 3)).unwrap_err();

        assert!(matches!(err.kind, ErrorKind::InvalidRange));
    }

    #[test]
    fn blank_description_is_dropped() {
        let event = Event::new("Cup", Category::Special, date(2024, 5, 5), date(2024, 5, 5))
            .unwrap()
            .with_description(Some("  ".to_owned()));

        assert_eq!(event.description(), None);
    }
}
