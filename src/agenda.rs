use chrono::NaiveDate;
use std::path::Path;

use crate::provider::json::Dataset;
use crate::provider::*;

/// A day of the month grid together with the events taking place on it.
#[derive(Debug, Clone)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub events: Vec<&'a Event>,
}

pub struct Agenda {
    events: Vec<Event>,
    sources: LinkTable,
}

impl Agenda {
    pub fn new(events: Vec<Event>) -> Self {
        Agenda {
            events,
            sources: LinkTable::new(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        load_dataset(path).map(Agenda::from)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn sources(&self) -> &LinkTable {
        &self.sources
    }

    /// Events whose date range covers `date`, in dataset order.
    pub fn events_of_day(&self, date: NaiveDate) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |event| event.occurs_on(&date))
    }

    pub fn events_of_month(&self, month: MonthIndex) -> impl Iterator<Item = &Event> {
        let (first, last) = (month.first_day(), month.last_day());
        self.events
            .iter()
            .filter(move |event| event.begin() <= last && first <= event.end())
    }

    pub fn month(&self, month: MonthIndex) -> Vec<Vec<CalendarDay<'_>>> {
        month
            .weeks()
            .into_iter()
            .map(|week| {
                week.into_iter()
                    .map(|date| CalendarDay {
                        date,
                        in_month: month.contains(&date),
                        events: self.events_of_day(date).collect(),
                    })
                    .collect()
            })
            .collect()
    }
}

impl From<Dataset> for Agenda {
    fn from(dataset: Dataset) -> Self {
        Agenda {
            events: dataset.events,
            sources: dataset.sources,
        }
    }
}
