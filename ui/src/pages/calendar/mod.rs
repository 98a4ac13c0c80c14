mod state;
mod view;

pub use state::{calendar_year, group_by_month, upcoming, EventDialog, MonthGroup, PREVIEW_LIMIT};
pub use view::CalendarPage;
pub(crate) use view::kind_label;
