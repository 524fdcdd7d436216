use crate::agenda::Agenda;
use crate::config::Config;
use crate::events::{Dispatcher, Event};
use crate::provider::MonthIndex;

use super::{Context, EventWindow, EventWindowBehaviour, Legend, Mode, MonthWindow, StatusLine};

use unsegen::base::{GraphemeCluster, Terminal};
use unsegen::input::{Input, Key, Navigatable, NavigateBehavior, OperationResult, ScrollBehavior};
use unsegen::widget::*;

pub struct App {
    context: Context,
}

impl App {
    pub fn new(config: &Config, agenda: Agenda) -> App {
        let mut context = Context::new(agenda);
        context.max_events_per_cell = config.max_events_per_cell;
        context.show_legend = config.show_legend;
        App { context }
    }

    /// Opens the calendar on `month` instead of the current one.
    pub fn start_at(mut self, month: MonthIndex) -> Self {
        if month != self.context.month() {
            self.context.set_cursor(month.first_day());
        }
        self
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        let mut layout = VLayout::new().widget(
            HLayout::new()
                .separator(GraphemeCluster::try_from('│').unwrap())
                .widget(MonthWindow::new(&self.context))
                .widget(EventWindow::new(&self.context)),
        );

        if self.context.show_legend {
            layout = layout.widget(Legend::new(&self.context));
        }

        layout.widget(StatusLine::new(&self.context))
    }

    /// Returns `false` once the user asked to quit.
    fn handle_input(&mut self, input: Input) -> bool {
        if self.context.mode == Mode::Detail {
            let leftover = input
                .chain((Key::Esc, || self.context.close_detail()))
                .chain((Key::Char('\n'), || self.context.close_detail()))
                .chain((Key::Char('q'), || self.context.close_detail()))
                .finish();

            if let Some(input) = leftover {
                log::trace!("Ignoring {:?} in detail view", input.event);
            }
            return true;
        }

        let mut run = true;

        let leftover = input
            .chain((Key::Char('q'), || run = false))
            .chain((Key::Char('n'), || self.context.next_month()))
            .chain((Key::Char('p'), || self.context.prev_month()))
            .chain((Key::Char('t'), || self.context.select_today()))
            .chain((Key::Char('\n'), || self.context.open_detail()))
            .chain(
                NavigateBehavior::new(&mut CursorBehaviour(&mut self.context))
                    .down_on(Key::Char('j'))
                    .down_on(Key::Down)
                    .up_on(Key::Char('k'))
                    .up_on(Key::Up)
                    .left_on(Key::Char('h'))
                    .left_on(Key::Left)
                    .right_on(Key::Char('l'))
                    .right_on(Key::Right),
            )
            .chain(
                ScrollBehavior::new(&mut EventWindowBehaviour(&mut self.context))
                    .forwards_on(Key::Char(']'))
                    .backwards_on(Key::Char('[')),
            )
            .finish();

        if let Some(input) = leftover {
            log::trace!("Unhandled input {:?}", input.event);
        }

        run
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            // Handle events
            match dispatcher.next()? {
                Event::Tick => self.context.update(),
                // Terminal was resized, redraw below
                Event::Signal => {}
                Event::Input(input) => run = self.handle_input(input),
            }

            // Draw
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::new());
            term.present();
        }

        Ok(())
    }
}

struct CursorBehaviour<'a>(&'a mut Context);

impl Navigatable for CursorBehaviour<'_> {
    fn move_down(&mut self) -> OperationResult {
        self.0.move_days(7);
        Ok(())
    }

    fn move_left(&mut self) -> OperationResult {
        self.0.move_days(-1);
        Ok(())
    }

    fn move_right(&mut self) -> OperationResult {
        self.0.move_days(1);
        Ok(())
    }

    fn move_up(&mut self) -> OperationResult {
        self.0.move_days(-7);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{Category, Event as Tournament};
    use chrono::Local;

    fn key(c: char) -> Input {
        Input {
            event: unsegen::input::Event::Key(Key::Char(c)),
            raw: vec![c as u8],
        }
    }

    fn app() -> App {
        let today = Local::now().date_naive();
        let agenda = Agenda::new(vec![
            Tournament::new("Vejle P1", Category::P1, today, today).unwrap()
        ]);
        App::new(&Config::default(), agenda)
    }

    #[test]
    fn q_closes_detail_view_before_quitting() {
        let mut app = app();

        assert!(app.handle_input(key('\n')));
        assert_eq!(app.context.mode, Mode::Detail);

        assert!(app.handle_input(key('q')));
        assert_eq!(app.context.mode, Mode::Normal);

        assert!(!app.handle_input(key('q')));
    }

    #[test]
    fn detail_view_ignores_navigation() {
        let mut app = app();
        let cursor = app.context.cursor();

        app.handle_input(key('\n'));
        app.handle_input(key('l'));

        assert_eq!(app.context.mode, Mode::Detail);
        assert_eq!(app.context.cursor(), cursor);
    }
}
