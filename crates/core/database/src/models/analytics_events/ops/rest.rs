use pawtrack_result::Result;

use super::AbstractAnalyticsEvents;
use crate::{AnalyticsEvent, RestDb};

static COL: &str = "analytics_events";

#[async_trait]
impl AbstractAnalyticsEvents for RestDb {
    /// Insert a new analytics event
    async fn insert_analytics_event(&self, event: &AnalyticsEvent) -> Result<()> {
        self.insert_one(COL, event)
            .await
            .map_err(|_| create_database_error!("insert", COL))
    }
}
