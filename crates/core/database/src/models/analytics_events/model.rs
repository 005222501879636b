use pawtrack_models::v0::AnalyticsProperties;

use crate::Database;

auto_derived!(
    /// Analytics event
    pub struct AnalyticsEvent {
        /// Id of the user who triggered the event
        pub user_id: Option<String>,
        /// Name of the event
        pub event: String,
        /// Additional event properties
        #[serde(default)]
        pub properties: AnalyticsProperties,
    }
);

impl AnalyticsEvent {
    /// Record an analytics event
    ///
    /// Delivery is best-effort: failures are logged and otherwise ignored.
    pub async fn log(
        db: &Database,
        user_id: Option<String>,
        event: impl Into<String>,
        properties: AnalyticsProperties,
    ) {
        if !db.is_configured() {
            return;
        }

        let event = AnalyticsEvent {
            user_id,
            event: event.into(),
            properties,
        };

        if let Err(err) = db.insert_analytics_event(&event).await {
            debug!("Dropped analytics event {}: {err}", event.event);
        }
    }
}

#[cfg(test)]
mod tests {
    use pawtrack_models::v0::AnalyticsProperties;
    use serde_json::json;

    use crate::{AnalyticsEvent, Database, DatabaseInfo};

    fn properties() -> AnalyticsProperties {
        let mut properties = AnalyticsProperties::new();
        properties.insert("screen".to_string(), json!("map"));
        properties.insert("pins".to_string(), json!(3));
        properties
    }

    #[async_std::test]
    async fn records_event() {
        database_test!(|db| async move {
            AnalyticsEvent::log(&db, Some("user_01".to_string()), "map_opened", properties())
                .await;

            if let Database::Reference(reference) = &db {
                let events = reference.analytics_events.lock().await;
                assert_eq!(events.len(), 1);
                assert_eq!(events[0].event, "map_opened");
                assert_eq!(events[0].properties["pins"], json!(3));
            }
        });
    }

    #[async_std::test]
    async fn ignores_missing_backend() {
        let db = DatabaseInfo::Unconfigured.connect().await.unwrap();
        AnalyticsEvent::log(&db, None, "app_opened", AnalyticsProperties::new()).await;
    }

    #[cfg(feature = "rest")]
    #[tokio::test]
    async fn swallows_backend_failure() {
        let db = DatabaseInfo::Rest {
            url: "http://127.0.0.1:9".to_string(),
            anon_key: "anon".to_string(),
        }
        .connect()
        .await
        .unwrap();

        AnalyticsEvent::log(&db, None, "report_submitted", properties()).await;
    }
}
