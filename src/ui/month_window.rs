use chrono::Datelike;
use unsegen::base::*;
use unsegen::widget::*;

use super::util::fit;
use super::{labels, Context};
use crate::agenda::CalendarDay;
use crate::provider::Event;

/// What a single event row of a day cell shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellEntry<'a> {
    Event(&'a Event),
    /// Number of events not shown in the cell, including the one of this row.
    Overflow(usize),
    Empty,
}

/// Content of event row `row` of `day` when a cell has room for `max_rows`
/// events. The last row turns into `+N` once more events are left than fit.
pub fn cell_entry<'a>(day: &CalendarDay<'a>, row: usize, max_rows: usize) -> CellEntry<'a> {
    match day.events.get(row) {
        Some(_) if row + 1 == max_rows && day.events.len() > max_rows => {
            CellEntry::Overflow(day.events.len() - row)
        }
        Some(event) => CellEntry::Event(event),
        None => CellEntry::Empty,
    }
}

/// The month grid: title, weekday labels and one block of rows per week.
pub struct MonthWindow<'a> {
    context: &'a Context,
}

impl<'a> MonthWindow<'a> {
    const COLUMNS: usize = 7;
    const MIN_CELL_WIDTH: usize = 6;
    const HEADER_ROWS: usize = 2;
    const MAX_WEEKS: usize = 6;

    pub fn new(context: &'a Context) -> Self {
        MonthWindow { context }
    }

    fn rows_per_week(&self) -> usize {
        1 + self.context.max_events_per_cell
    }

    fn draw_day_numbers<T: CursorTarget>(
        &self,
        cursor: &mut Cursor<T>,
        week: &[CalendarDay],
        width: usize,
    ) {
        let theme = &self.context.theme;
        let base = cursor.get_style_modifier();

        for day in week {
            let is_today = day.date == self.context.today();
            let marker = match theme.today_day_char {
                Some(c) if is_today => c,
                _ => ' ',
            };
            let text = format!("{}{:>2}", marker, day.date.day());

            let mut style = if day.in_month {
                theme.day_style
            } else {
                theme.outside_day_style
            };
            if is_today {
                style = theme.today_day_style.on_top_of(style);
            }
            if day.date == self.context.cursor() {
                style = theme.focus_day_style.on_top_of(style);
            }

            cursor.set_style_modifier(style.on_top_of(base));
            cursor.write(&fit(&text, width));
        }

        cursor.set_style_modifier(base);
        cursor.fill_and_wrap_line();
    }

    fn draw_event_row<T: CursorTarget>(
        &self,
        cursor: &mut Cursor<T>,
        week: &[CalendarDay],
        row: usize,
        width: usize,
    ) {
        let theme = &self.context.theme;
        let base = cursor.get_style_modifier();
        let max_rows = self.context.max_events_per_cell;

        for day in week {
            // Leave one column as gap between neighbouring cells
            let label_width = width.saturating_sub(1);

            let (text, style) = match cell_entry(day, row, max_rows) {
                CellEntry::Overflow(n) => (format!("+{}", n), theme.label_style),
                CellEntry::Event(event) => {
                    let mut style = theme.category_style(event.category().swatch());
                    if day.date == self.context.cursor() && row == self.context.eventlist_index {
                        style = theme.selected_event_style.on_top_of(style);
                    }
                    (event.name().to_owned(), style)
                }
                CellEntry::Empty => (String::new(), theme.day_style),
            };

            cursor.set_style_modifier(style.on_top_of(base));
            cursor.write(&fit(&text, label_width));
            cursor.set_style_modifier(base);
            cursor.write(" ");
        }

        cursor.fill_and_wrap_line();
    }
}

impl Widget for MonthWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(Self::COLUMNS * Self::MIN_CELL_WIDTH),
            height: RowDemand::at_least(Self::HEADER_ROWS + Self::MAX_WEEKS * self.rows_per_week()),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let month = self.context.month();
        let width = (window.get_width().raw_value() as usize / Self::COLUMNS)
            .max(Self::MIN_CELL_WIDTH);

        let mut cursor = Cursor::new(&mut window);

        cursor.set_style_modifier(
            theme
                .month_header_style
                .format(theme.month_header_text_style),
        );
        cursor.write(&format!(" {}", labels::month_title(month)));
        cursor.fill_and_wrap_line();

        cursor.set_style_modifier(theme.weekday_style);
        for label in &labels::WEEKDAYS {
            cursor.write(&fit(&format!(" {}", label), width));
        }
        cursor.fill_and_wrap_line();

        cursor.set_style_modifier(theme.day_style);
        for week in self.context.agenda().month(month) {
            self.draw_day_numbers(&mut cursor, &week, width);
            for row in 0..self.context.max_events_per_cell {
                self.draw_event_row(&mut cursor, &week, row, width);
            }
        }
    }
}
