use pawtrack_result::Result;

use super::AbstractAnalyticsEvents;
use crate::{AnalyticsEvent, UnconfiguredDb};

#[async_trait]
impl AbstractAnalyticsEvents for UnconfiguredDb {
    async fn insert_analytics_event(&self, _event: &AnalyticsEvent) -> Result<()> {
        Err(create_error!(BackendUnavailable))
    }
}
