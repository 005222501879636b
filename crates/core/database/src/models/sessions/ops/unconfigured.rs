use pawtrack_models::v0::AuthUser;
use pawtrack_result::Result;

use super::AbstractSessions;
use crate::UnconfiguredDb;

#[async_trait]
impl AbstractSessions for UnconfiguredDb {
    async fn fetch_session_user(&self, _access_token: &str) -> Result<Option<AuthUser>> {
        Err(create_error!(BackendUnavailable))
    }
}
