use unsegen::base::*;
use unsegen::widget::*;

use super::{labels, Context};
use crate::provider::{Category, Swatch};

/// Entries of the category legend, unknown categories last.
pub fn legend_entries() -> Vec<(String, Swatch)> {
    Category::LEGEND
        .iter()
        .map(|category| (category.to_string(), category.swatch()))
        .chain(std::iter::once((
            labels::OTHER_CATEGORY.to_owned(),
            Swatch::Neutral,
        )))
        .collect()
}

pub struct Legend<'a> {
    context: &'a Context,
}

impl<'a> Legend<'a> {
    const SWATCH: &'static str = "■";

    pub fn new(context: &'a Context) -> Self {
        Legend { context }
    }
}

impl Widget for Legend<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(10),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let mut cursor = Cursor::new(&mut window);

        for (label, swatch) in legend_entries() {
            cursor.set_style_modifier(theme.category_style(swatch));
            cursor.write(Self::SWATCH);
            cursor.set_style_modifier(theme.day_style);
            cursor.write(&format!(" {}   ", label));
        }
    }
}

/// Single line at the bottom showing the last message and the key bindings.
pub struct StatusLine<'a> {
    context: &'a Context,
}

impl<'a> StatusLine<'a> {
    const HELP: &'static str = "h/j/k/l: dag  n/p: måned  t: i dag  [/]: vælg  enter: detaljer  q: afslut";

    pub fn new(context: &'a Context) -> Self {
        StatusLine { context }
    }
}

impl Widget for StatusLine<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(10),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let mut cursor = Cursor::new(&mut window);

        match &self.context.last_message {
            Some(msg) => {
                cursor.set_style_modifier(theme.error_style);
                cursor.write(msg);
            }
            None => {
                cursor.set_style_modifier(theme.weekday_style);
                cursor.write(Self::HELP);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_ends_with_fallback() {
        let entries = legend_entries();

        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], ("Major".to_owned(), Swatch::Red));
        assert_eq!(entries[6], ("Andre".to_owned(), Swatch::Neutral));
    }
}
