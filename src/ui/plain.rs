use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use std::fmt::Write;

use super::labels;
use super::legend::legend_entries;
use super::month_window::{cell_entry, CellEntry};
use super::util::fit;
use crate::agenda::Agenda;
use crate::provider::MonthIndex;

const CELL_WIDTH: usize = 12;

/// Renders `month` as plain text for `--show`: the grid followed by a list of
/// all events of the month.
pub fn render_month(
    agenda: &Agenda,
    month: MonthIndex,
    today: NaiveDate,
    max_events_per_cell: usize,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", labels::month_title(month));
    let _ = writeln!(
        out,
        "{}",
        labels::WEEKDAYS
            .iter()
            .map(|label| fit(label, CELL_WIDTH))
            .join("")
            .trim_end()
    );

    for week in agenda.month(month) {
        let numbers = week
            .iter()
            .map(|day| {
                let marker = if day.date == today { '*' } else { ' ' };
                let number = if day.in_month {
                    day.date.day().to_string()
                } else {
                    format!("({})", day.date.day())
                };
                fit(&format!("{}{}", number, marker), CELL_WIDTH)
            })
            .join("");
        let _ = writeln!(out, "{}", numbers.trim_end());

        for row in 0..max_events_per_cell {
            let line = week
                .iter()
                .map(|day| {
                    let text = match cell_entry(day, row, max_events_per_cell) {
                        CellEntry::Event(event) => event.name().to_owned(),
                        CellEntry::Overflow(n) => format!("+{}", n),
                        CellEntry::Empty => String::new(),
                    };
                    fit(&text, CELL_WIDTH - 1) + " "
                })
                .join("");
            if !line.trim().is_empty() {
                let _ = writeln!(out, "{}", line.trim_end());
            }
        }
        let _ = writeln!(out);
    }

    for event in agenda.events_of_month(month) {
        let _ = writeln!(
            out,
            "{}  {} [{}] {}",
            labels::format_span(event),
            event.name(),
            event.category(),
            event.location()
        );
        for link in event.links() {
            let _ = writeln!(out, "    {}: {}", link.label, link.url);
        }
    }

    let _ = writeln!(
        out,
        "\n{}",
        legend_entries()
            .into_iter()
            .map(|(label, swatch)| format!("{}={}", label, swatch))
            .join("  ")
    );

    out
}
