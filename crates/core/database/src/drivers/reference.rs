use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;
use pawtrack_models::v0::AuthUser;

use crate::{AnalyticsEvent, ContentReport};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub content_reports: Arc<Mutex<HashMap<String, ContentReport>>>,
        pub analytics_events: Arc<Mutex<Vec<AnalyticsEvent>>>,
        pub sessions: Arc<Mutex<HashMap<String, AuthUser>>>,
    }
);

impl ReferenceDb {
    /// Register an access token for the given user
    pub async fn insert_session(&self, token: &str, user: AuthUser) {
        self.sessions.lock().await.insert(token.to_string(), user);
    }
}
