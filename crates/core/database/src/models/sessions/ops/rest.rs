use pawtrack_models::v0::AuthUser;
use pawtrack_result::Result;

use super::AbstractSessions;
use crate::RestDb;

#[async_trait]
impl AbstractSessions for RestDb {
    /// Fetch the user an access token was issued to
    async fn fetch_session_user(&self, access_token: &str) -> Result<Option<AuthUser>> {
        self.fetch_user(access_token).await.map_err(|err| {
            debug!("Session lookup failed: {err}");
            create_error!(InvalidSession)
        })
    }
}
