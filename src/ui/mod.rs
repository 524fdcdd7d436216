pub mod app;
pub mod context;
pub mod event_window;
pub mod labels;
pub mod legend;
pub mod month_window;
pub mod plain;
mod util;

pub use app::App;
pub use context::{Context, Mode, Theme};
pub use event_window::{EventWindow, EventWindowBehaviour};
pub use legend::{Legend, StatusLine};
pub use month_window::MonthWindow;
