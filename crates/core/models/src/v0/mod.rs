mod analytics_events;
mod content_reports;
mod evidence;
mod users;

pub use analytics_events::*;
pub use content_reports::*;
pub use evidence::*;
pub use users::*;
