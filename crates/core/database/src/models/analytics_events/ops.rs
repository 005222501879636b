use pawtrack_result::Result;

use crate::AnalyticsEvent;

mod reference;
#[cfg(feature = "rest")]
mod rest;
mod unconfigured;

#[async_trait]
pub trait AbstractAnalyticsEvents: Sync + Send {
    /// Insert a new analytics event
    async fn insert_analytics_event(&self, event: &AnalyticsEvent) -> Result<()>;
}
