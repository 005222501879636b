use pawtrack_models::v0::AuthUser;
use pawtrack_result::Result;

use crate::Database;

/// Resolve the identity behind an optional session token
///
/// Missing or rejected tokens resolve to `None`.
pub async fn resolve_identity(db: &Database, session: Option<&str>) -> Result<Option<AuthUser>> {
    match session {
        Some(token) if !token.is_empty() => db.fetch_session_user(token).await,
        _ => Ok(None),
    }
}
