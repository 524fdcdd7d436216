use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::*;

const ISO8601_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct RawEvent {
    name: String,
    #[serde(default)]
    category: Category,
    start_date: String,
    end_date: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "links", alias = "sources")]
    streaming_links: Option<LinkRefs>,
}

#[derive(Debug, Deserialize)]
struct RawSourced {
    #[serde(default)]
    sources: LinkTable,
    tournaments: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDataset {
    Flat(Vec<RawEvent>),
    Sourced(RawSourced),
}

/// Parses `content` as `T` only to get at the error serde reports for it.
fn error_as<'de, T: Deserialize<'de>>(content: &'de str) -> Error {
    serde_json::from_str::<T>(content)
        .err()
        .map(Error::from)
        .unwrap_or_else(|| ErrorKind::DatasetParse.into())
}

/// Events and link table of a loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub events: Vec<Event>,
    pub sources: LinkTable,
}

/// Accepts a plain date or a full ISO 8601 timestamp, whose time is dropped.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, ISO8601_DATE_FORMAT) {
        return Ok(date);
    }

    let datetime = s
        .parse::<NaiveDateTime>()
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(s).map(|dt| dt.naive_local()))?;

    Ok(datetime.date())
}

impl RawEvent {
    fn into_event(self, sources: &LinkTable) -> Result<Event> {
        let date_of = |s: &str| {
            parse_date(s).map_err(|e| {
                e.with_msg(&format!("'{}' of '{}' is not a date", s, self.name))
            })
        };

        let begin = date_of(&self.start_date)?;
        let end = date_of(&self.end_date)?;

        let links = self
            .streaming_links
            .as_ref()
            .map(|refs| refs.resolve(sources))
            .unwrap_or_default();

        Ok(Event::new(&self.name, self.category.clone(), begin, end)?
            .with_location(&self.location)
            .with_description(self.description.clone())
            .with_links(links))
    }
}

pub fn parse_dataset(content: &str) -> Result<Dataset> {
    let (raw_events, sources) = match serde_json::from_str::<RawDataset>(content) {
        Ok(RawDataset::Flat(events)) => (events, LinkTable::new()),
        Ok(RawDataset::Sourced(raw)) => (raw.tournaments, raw.sources),
        // Untagged enums swallow the actual cause, so retry with the shape
        // the document claims to have to get a useful message.
        Err(e) => {
            return Err(match content.trim_start().chars().next() {
                Some('[') => error_as::<Vec<RawEvent>>(content),
                Some('{') => error_as::<RawSourced>(content),
                _ => Error::from(e),
            })
        }
    };

    let mut events = Vec::with_capacity(raw_events.len());
    for raw in raw_events {
        match raw.into_event(&sources) {
            Ok(event) => events.push(event),
            Err(Error {
                kind: ErrorKind::InvalidRange,
                message,
            }) => {
                log::warn!(
                    "Skipping event: {}",
                    message.unwrap_or_else(|| ErrorKind::InvalidRange.as_str())
                );
            }
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "Loaded {} events and {} link sources",
        events.len(),
        sources.len()
    );

    Ok(Dataset { events, sources })
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Err(Error::new(
            ErrorKind::IOError(std::io::ErrorKind::NotFound.into()),
            &format!("'{}' is not a file", path.display()),
        ));
    }

    let content = fs::read_to_string(path)?;

    parse_dataset(&content).map_err(|e| {
        let msg = format!(
            "{} ({})",
            e.message.as_deref().unwrap_or_default(),
            path.display()
        );
        e.with_msg(&msg)
    })
}
