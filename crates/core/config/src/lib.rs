use cached::proc_macro::cached;
use config::{Config, Environment, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub use log;
pub use pawtrack_result as result;
pub use sentry::{capture_message, Level};

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Pawtrack.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Pawtrack.toml").exists() {
            builder = builder.add_source(File::new("Pawtrack.toml", FileFormat::Toml));
        }

        builder = builder.add_source(Environment::with_prefix("PAWTRACK").separator("__"));

        builder.build().expect("configuration sources should be readable")
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Backend {
    pub url: String,
    pub anon_key: String,
}

impl Backend {
    /// Whether the hosted backend can be reached at all
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Storage {
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub public_url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Tokens {
    pub maps: String,
    pub push: String,
    pub sentry_dsn: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeaturesLimits {
    pub evidence_size: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Features {
    pub limits: FeaturesLimits,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub production: bool,
    pub backend: Backend,
    pub storage: Storage,
    pub tokens: Tokens,
    pub features: Features,
}

impl Settings {
    /// S3 endpoint to use for object storage
    ///
    /// Falls back to the backend's S3 gateway when no explicit endpoint is set.
    pub fn storage_endpoint(&self) -> Option<String> {
        if !self.storage.endpoint.is_empty() {
            Some(self.storage.endpoint.clone())
        } else if !self.backend.url.is_empty() {
            Some(format!("{}/storage/v1/s3", self.backend.base_url()))
        } else {
            None
        }
    }

    /// Base URL under which uploaded objects are publicly readable
    pub fn storage_public_url(&self) -> Option<String> {
        if !self.storage.public_url.is_empty() {
            Some(self.storage.public_url.trim_end_matches('/').to_string())
        } else if !self.backend.url.is_empty() {
            Some(format!(
                "{}/storage/v1/object/public",
                self.backend.base_url()
            ))
        } else {
            None
        }
    }
}

pub async fn init() {
    println!(
        ":: Pawtrack Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read()
        .await
        .try_deserialize::<Settings>()
        .expect("configuration should match the settings schema")
}

/// Configure logging and crash reporting
///
/// The returned guard must be held for as long as events should be sent.
pub async fn setup_logging(release: &'static str) -> Option<sentry::ClientInitGuard> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    pretty_env_logger::init();
    log::info!("Starting {release}");

    let config = config().await;
    if config.tokens.sentry_dsn.is_empty() {
        None
    } else {
        Some(sentry::init((
            config.tokens.sentry_dsn,
            sentry::ClientOptions {
                release: Some(release.into()),
                ..Default::default()
            },
        )))
    }
}

/// Configure logging and crash reporting for the current binary
#[macro_export]
macro_rules! configure {
    () => {
        let _sentry = $crate::setup_logging(concat!(
            env!("CARGO_PKG_NAME"),
            "@",
            env!("CARGO_PKG_VERSION")
        ))
        .await;
    };
}

/// Log an unexpected error and forward it to the crash reporter
#[macro_export]
macro_rules! capture_internal_error {
    ( $expr: expr ) => {
        let message = format!("{:?} ({}:{}:{})", $expr, file!(), line!(), column!());
        $crate::log::error!("{message}");
        $crate::capture_message(&message, $crate::Level::Error);
    };
}

/// Map any error into an internal error, reporting the original
#[macro_export]
macro_rules! report_internal_error {
    ( $expr: expr ) => {
        $expr.map_err(|err| {
            $crate::capture_internal_error!(err);
            $crate::result::create_error!(InternalError)
        })
    };
}
