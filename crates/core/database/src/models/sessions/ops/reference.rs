use pawtrack_models::v0::AuthUser;
use pawtrack_result::Result;

use super::AbstractSessions;
use crate::ReferenceDb;

#[async_trait]
impl AbstractSessions for ReferenceDb {
    /// Fetch the user an access token was issued to
    async fn fetch_session_user(&self, access_token: &str) -> Result<Option<AuthUser>> {
        Ok(self.sessions.lock().await.get(access_token).cloned())
    }
}
