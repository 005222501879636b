mod reference;
#[cfg(feature = "rest")]
mod rest;
mod unconfigured;

use pawtrack_config::config;

pub use self::reference::*;
#[cfg(feature = "rest")]
pub use self::rest::*;
pub use self::unconfigured::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Auto-detect the database in use
    Auto,
    /// Use the mock database
    Reference,
    /// Run without any backend
    Unconfigured,
    /// Connect to the hosted REST backend
    #[cfg(feature = "rest")]
    Rest { url: String, anon_key: String },
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// Mock database
    Reference(ReferenceDb),
    /// Hosted REST backend
    #[cfg(feature = "rest")]
    Rest(RestDb),
    /// No backend configured
    Unconfigured(UnconfiguredDb),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    #[async_recursion]
    pub async fn connect(self) -> Result<Database, String> {
        match self {
            DatabaseInfo::Auto => {
                let config = config().await;

                if config.backend.is_configured() {
                    #[cfg(feature = "rest")]
                    return DatabaseInfo::Rest {
                        url: config.backend.url,
                        anon_key: config.backend.anon_key,
                    }
                    .connect()
                    .await;

                    #[cfg(not(feature = "rest"))]
                    return Err("REST backend not enabled.".to_string());
                } else {
                    warn!("Backend is not configured, reports will not be persisted.");
                    DatabaseInfo::Unconfigured.connect().await
                }
            }
            DatabaseInfo::Reference => Ok(Database::Reference(Default::default())),
            DatabaseInfo::Unconfigured => Ok(Database::Unconfigured(UnconfiguredDb)),
            #[cfg(feature = "rest")]
            DatabaseInfo::Rest { url, anon_key } => Ok(Database::Rest(
                RestDb::new(&url, &anon_key)
                    .map_err(|_| "Failed to init backend client.".to_string())?,
            )),
        }
    }
}

impl Database {
    /// Whether writes reach a real store
    pub fn is_configured(&self) -> bool {
        !matches!(self, Database::Unconfigured(_))
    }
}
