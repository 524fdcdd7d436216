use unsegen::base::*;
use unsegen::input::Scrollable;
use unsegen::widget::*;

use super::{labels, Context, Mode};
use crate::provider::Event;

/// Side panel listing the events of the cursor day, or all details of the
/// selected event while in `Mode::Detail`.
pub struct EventWindow<'a> {
    context: &'a Context,
}

impl<'a> EventWindow<'a> {
    pub fn new(context: &'a Context) -> Self {
        EventWindow { context }
    }

    fn draw_day<T: CursorTarget>(&self, cursor: &mut Cursor<T>) {
        let theme = &self.context.theme;
        let events = self.context.events_of_cursor_day();

        cursor.set_style_modifier(theme.label_style);
        cursor.write(&labels::format_date(self.context.cursor()));
        cursor.fill_and_wrap_line();
        cursor.set_style_modifier(theme.day_style);
        cursor.fill_and_wrap_line();

        if events.is_empty() {
            cursor.set_style_modifier(theme.outside_day_style);
            cursor.write(labels::NO_EVENTS);
            cursor.fill_and_wrap_line();
            return;
        }

        for (idx, event) in events.into_iter().enumerate() {
            let mut style = theme.category_style(event.category().swatch());
            if idx == self.context.eventlist_index {
                style = theme.selected_event_style.on_top_of(style);
            }

            cursor.set_style_modifier(style);
            cursor.write(&format!("{} ({})", event.name(), event.category()));
            cursor.set_style_modifier(theme.day_style);
            cursor.fill_and_wrap_line();
            cursor.write(&format!("  {}", event.location()));
            cursor.fill_and_wrap_line();
        }
    }

    fn draw_detail<T: CursorTarget>(&self, cursor: &mut Cursor<T>, event: &Event) {
        let theme = &self.context.theme;

        for line in detail_lines(event) {
            let (style, text) = match &line {
                DetailLine::Category(text) => {
                    (theme.category_style(event.category().swatch()), text)
                }
                DetailLine::Title(text) => (
                    theme
                        .day_style
                        .format(TextFormatModifier::default().bold(true)),
                    text,
                ),
                DetailLine::Label(text) => (theme.label_style, text),
                DetailLine::Text(text) => (theme.day_style, text),
            };

            cursor.set_style_modifier(style);
            cursor.write(text);
            cursor.set_style_modifier(theme.day_style);
            cursor.fill_and_wrap_line();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Category(String),
    Title(String),
    Label(String),
    Text(String),
}

/// Lines of the detail view of `event`, top to bottom. Empty `Text` lines
/// separate the sections.
pub fn detail_lines(event: &Event) -> Vec<DetailLine> {
    let blank = || DetailLine::Text(String::new());

    let mut lines = vec![
        DetailLine::Category(event.category().to_string().to_uppercase()),
        DetailLine::Title(event.name().to_owned()),
        DetailLine::Text(labels::format_span(event)),
        blank(),
    ];

    let description = event.description().unwrap_or(labels::NO_DESCRIPTION);
    for (label, value) in &[
        (labels::LOCATION, event.location()),
        (labels::DESCRIPTION, description),
    ] {
        lines.push(DetailLine::Label(label.to_uppercase()));
        lines.push(DetailLine::Text(value.to_string()));
        lines.push(blank());
    }

    if !event.links().is_empty() {
        lines.push(DetailLine::Label(labels::LINKS.to_uppercase()));
        lines.extend(
            event
                .links()
                .iter()
                .map(|link| DetailLine::Text(format!("{}: {}", link.label, link.url))),
        );
    }

    lines
}

impl Widget for EventWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(30),
            height: RowDemand::at_least(10),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        match (self.context.mode, self.context.selected_event()) {
            (Mode::Detail, Some(event)) => self.draw_detail(&mut cursor, event),
            _ => self.draw_day(&mut cursor),
        }
    }
}

/// Cycles through the events of the cursor day.
pub struct EventWindowBehaviour<'a>(pub &'a mut Context);

impl Scrollable for EventWindowBehaviour<'_> {
    fn scroll_backwards(&mut self) -> unsegen::input::OperationResult {
        if self.0.select_prev_event() {
            Ok(())
        } else {
            Err(())
        }
    }

    fn scroll_forwards(&mut self) -> unsegen::input::OperationResult {
        if self.0.select_next_event() {
            Ok(())
        } else {
            Err(())
        }
    }
}
