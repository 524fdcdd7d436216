use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

use crate::agenda::Agenda;
use crate::provider::{Event, MonthIndex, Swatch};

use unsegen::base::style::*;

use super::labels;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Detail,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub outside_day_style: StyleModifier,
    pub focus_day_style: StyleModifier,
    pub today_day_style: StyleModifier,
    pub today_day_char: Option<char>,
    pub month_header_style: StyleModifier,
    pub month_header_text_style: TextFormatModifier,
    pub weekday_style: StyleModifier,
    pub selected_event_style: StyleModifier,
    pub label_style: StyleModifier,
    pub error_style: StyleModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            outside_day_style: StyleModifier::default().fg_color(Color::LightBlack),
            focus_day_style: StyleModifier::default().bg_color(Color::Blue),
            today_day_style: StyleModifier::default().invert(true),
            today_day_char: Some('*'),
            month_header_style: StyleModifier::default().fg_color(Color::Yellow),
            month_header_text_style: TextFormatModifier::default().bold(true),
            weekday_style: StyleModifier::default().fg_color(Color::LightBlack),
            selected_event_style: StyleModifier::default().invert(true),
            label_style: StyleModifier::default()
                .fg_color(Color::LightBlack)
                .format(TextFormatModifier::default().bold(true)),
            error_style: StyleModifier::default().fg_color(Color::LightRed),
        }
    }
}

impl Theme {
    pub fn category_style(&self, swatch: Swatch) -> StyleModifier {
        match swatch {
            Swatch::Red => StyleModifier::default().fg_color(Color::Red),
            Swatch::Blue => StyleModifier::default().fg_color(Color::Blue),
            Swatch::Green => StyleModifier::default().fg_color(Color::Green),
            Swatch::Crimson => StyleModifier::default()
                .fg_color(Color::White)
                .bg_color(Color::Red)
                .format(TextFormatModifier::default().bold(true)),
            Swatch::Orange => StyleModifier::default()
                .fg_color(Color::Black)
                .bg_color(Color::Yellow)
                .format(TextFormatModifier::default().bold(true).italic(true)),
            Swatch::Magenta => StyleModifier::default().fg_color(Color::Magenta),
            Swatch::Neutral => StyleModifier::default().fg_color(Color::White),
        }
    }
}

/// UI state. Only the displayed day and the selected event change, both on
/// key presses.
pub struct Context {
    agenda: Agenda,
    pub mode: Mode,
    pub theme: Theme,
    cursor: NaiveDate,
    pub eventlist_index: usize,
    pub max_events_per_cell: usize,
    pub show_legend: bool,
    now: DateTime<Local>,
    pub last_message: Option<String>,
}

impl Context {
    pub fn new(agenda: Agenda) -> Self {
        let now = Local::now();
        Context {
            agenda,
            mode: Mode::Normal,
            theme: Theme::default(),
            cursor: now.date_naive(),
            eventlist_index: 0,
            max_events_per_cell: 3,
            show_legend: true,
            now,
            last_message: None,
        }
    }

    pub fn with_cursor(mut self, date: NaiveDate) -> Self {
        self.set_cursor(date);
        self
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn update(&mut self) {
        self.now = Local::now();
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// The month on display, always the one containing the cursor.
    pub fn month(&self) -> MonthIndex {
        MonthIndex::from(self.cursor)
    }

    pub fn set_cursor(&mut self, date: NaiveDate) {
        if date != self.cursor {
            self.eventlist_index = 0;
            self.last_message = None;
        }
        self.cursor = date;
    }

    pub fn move_days(&mut self, days: i64) {
        self.set_cursor(self.cursor + Duration::days(days));
    }

    pub fn select_today(&mut self) {
        self.set_cursor(self.today());
    }

    fn jump_to_month(&mut self, month: MonthIndex) {
        let day = self.cursor.day().min(month.num_days());
        self.set_cursor(month.first_day() + Duration::days(day as i64 - 1));
    }

    pub fn next_month(&mut self) {
        self.jump_to_month(self.month().next());
    }

    pub fn prev_month(&mut self) {
        self.jump_to_month(self.month().prev());
    }

    pub fn events_of_cursor_day(&self) -> Vec<&Event> {
        self.agenda.events_of_day(self.cursor).collect()
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.agenda
            .events_of_day(self.cursor)
            .nth(self.eventlist_index)
    }

    pub fn select_next_event(&mut self) -> bool {
        if self.eventlist_index + 1 < self.events_of_cursor_day().len() {
            self.eventlist_index += 1;
            true
        } else {
            false
        }
    }

    pub fn select_prev_event(&mut self) -> bool {
        if self.eventlist_index > 0 {
            self.eventlist_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn open_detail(&mut self) {
        if self.selected_event().is_some() {
            self.mode = Mode::Detail;
        } else {
            self.last_message = Some(format!(
                "{} {}",
                labels::NO_EVENTS,
                labels::format_date(self.cursor)
            ));
        }
    }

    pub fn close_detail(&mut self) {
        self.mode = Mode::Normal;
    }
}
