use pawtrack_result::Result;

use super::AbstractAnalyticsEvents;
use crate::AnalyticsEvent;
use crate::ReferenceDb;

#[async_trait]
impl AbstractAnalyticsEvents for ReferenceDb {
    /// Insert a new analytics event
    async fn insert_analytics_event(&self, event: &AnalyticsEvent) -> Result<()> {
        self.analytics_events.lock().await.push(event.clone());
        Ok(())
    }
}
