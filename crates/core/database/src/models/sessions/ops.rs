use pawtrack_models::v0::AuthUser;
use pawtrack_result::Result;

mod reference;
#[cfg(feature = "rest")]
mod rest;
mod unconfigured;

#[async_trait]
pub trait AbstractSessions: Sync + Send {
    /// Fetch the user an access token was issued to
    async fn fetch_session_user(&self, access_token: &str) -> Result<Option<AuthUser>>;
}
