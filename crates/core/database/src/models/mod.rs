mod analytics_events;
mod content_reports;
mod sessions;

pub use analytics_events::*;
pub use content_reports::*;
pub use sessions::*;

#[cfg(feature = "rest")]
use crate::RestDb;
use crate::{Database, ReferenceDb, UnconfiguredDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + analytics_events::AbstractAnalyticsEvents
    + content_reports::AbstractContentReports
    + sessions::AbstractSessions
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "rest")]
impl AbstractDatabase for RestDb {}
impl AbstractDatabase for UnconfiguredDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "rest")]
            Database::Rest(rest) => rest,
            Database::Unconfigured(unconfigured) => unconfigured,
        }
    }
}
