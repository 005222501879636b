use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use pawtrack_config::{config, report_internal_error, Settings};
use pawtrack_models::v0::EvidenceUpload;
use pawtrack_result::{create_error, Result};

use aws_sdk_s3::{
    config::{retry::RetryConfig, Credentials, Region},
    Client, Config,
};

/// Content type every evidence image is stored with
pub const EVIDENCE_CONTENT_TYPE: &str = "image/jpeg";

/// Connection to the evidence bucket
#[derive(Clone, Debug)]
pub struct EvidenceStorage {
    client: Client,
    bucket: String,
    public_url: Option<String>,
    max_size: usize,
}

/// Create an S3 client
pub fn create_client(endpoint: String, config: &Settings) -> Client {
    let provider_name = "pawtrack";
    let creds = Credentials::new(
        config.storage.access_key_id.clone(),
        config.storage.secret_access_key.clone(),
        None,
        None,
        provider_name,
    );

    let config = Config::builder()
        .region(Region::new(config.storage.region.clone()))
        .endpoint_url(endpoint)
        .credentials_provider(creds)
        .force_path_style(true)
        .retry_config(RetryConfig::disabled())
        .build();

    Client::from_conf(config)
}

impl EvidenceStorage {
    /// Connect to the evidence bucket described by the given settings
    pub fn from_config(config: &Settings) -> Result<EvidenceStorage> {
        let endpoint = config
            .storage_endpoint()
            .ok_or_else(|| create_error!(StorageUnavailable))?;

        if config.storage.access_key_id.is_empty()
            || config.storage.secret_access_key.is_empty()
            || config.storage.bucket.is_empty()
        {
            return Err(create_error!(StorageUnavailable));
        }

        Ok(EvidenceStorage {
            client: create_client(endpoint, config),
            bucket: config.storage.bucket.clone(),
            public_url: config.storage_public_url(),
            max_size: config.features.limits.evidence_size,
        })
    }

    /// URL an object can be fetched from, or its key when nothing public is known
    pub fn resolve_url(&self, key: &str) -> String {
        match &self.public_url {
            Some(base) => format!("{base}/{}/{key}", self.bucket),
            None => key.to_string(),
        }
    }

    /// Upload an evidence image for a claim
    pub async fn upload(&self, file: &Path, claim_id: &str) -> Result<EvidenceUpload> {
        let key = evidence_key(claim_id, unix_millis())?;

        let buf = report_internal_error!(tokio::fs::read(file).await)?;
        if buf.len() > self.max_size {
            return Err(create_error!(PayloadTooLarge {
                max: self.max_size
            }));
        }

        let size = buf.len();
        upload_to_s3(&self.client, &self.bucket, &key, buf).await?;
        tracing::info!("Uploaded evidence {key} ({size} bytes)");

        Ok(EvidenceUpload {
            url: self.resolve_url(&key),
            key,
            size,
        })
    }
}

/// Storage key for an evidence image of a claim taken at the given time
///
/// The claim id is used verbatim, so ids that are empty, contain `/` or
/// carry surrounding whitespace are rejected.
pub fn evidence_key(claim_id: &str, timestamp_millis: u128) -> Result<String> {
    if claim_id.is_empty() || claim_id.contains('/') || claim_id.trim() != claim_id {
        return Err(create_error!(FailedValidation {
            error: format!("invalid claim id {claim_id:?}")
        }));
    }

    Ok(format!("{claim_id}/{timestamp_millis}.jpg"))
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|time| time.as_millis())
        .unwrap_or_default()
}

/// Upload a file to S3
pub async fn upload_to_s3(
    client: &Client,
    bucket_id: &str,
    path: &str,
    buf: Vec<u8>,
) -> Result<()> {
    report_internal_error!(
        client
            .put_object()
            .bucket(bucket_id)
            .key(path)
            .content_type(EVIDENCE_CONTENT_TYPE)
            .body(buf.into())
            .send()
            .await
    )
    .map(|_| ())
}

/// Upload an evidence image using the global configuration
pub async fn upload_evidence(file: &Path, claim_id: &str) -> Result<EvidenceUpload> {
    let config = config().await;
    EvidenceStorage::from_config(&config)?
        .upload(file, claim_id)
        .await
}

/// Upload an evidence image, returning where it can be found
pub async fn upload_evidence_image(file: &Path, claim_id: &str) -> Result<String> {
    upload_evidence(file, claim_id).await.map(|upload| upload.url)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pawtrack_config::{config, Settings};
    use pawtrack_result::ErrorType;

    use crate::{evidence_key, EvidenceStorage};

    async fn storage_settings() -> Settings {
        let mut settings = config().await;
        settings.backend.url = "http://127.0.0.1:9".to_string();
        settings.storage.endpoint = String::new();
        settings.storage.public_url = String::new();
        settings.storage.access_key_id = "key".to_string();
        settings.storage.secret_access_key = "secret".to_string();
        settings.storage.bucket = "evidence".to_string();
        settings
    }

    #[test]
    fn key_contains_claim_id() {
        let key = evidence_key("claim_42", 1_700_000_000_123).unwrap();
        assert_eq!(key, "claim_42/1700000000123.jpg");
        assert!(key.contains("claim_42"));
    }

    #[test]
    fn key_rejects_bad_claim_ids() {
        assert!(evidence_key("", 0).is_err());
        assert!(evidence_key("../other", 0).is_err());
        assert!(evidence_key(" claim_42", 0).is_err());
        assert!(evidence_key("claim_42\n", 0).is_err());
    }

    #[tokio::test]
    async fn unconfigured_storage_is_rejected() {
        let mut settings = config().await;
        settings.backend.url = String::new();
        settings.storage.endpoint = String::new();

        let error = EvidenceStorage::from_config(&settings).unwrap_err();
        assert_eq!(error.error_type, ErrorType::StorageUnavailable);

        let mut settings = storage_settings().await;
        settings.storage.secret_access_key = String::new();

        let error = EvidenceStorage::from_config(&settings).unwrap_err();
        assert_eq!(error.error_type, ErrorType::StorageUnavailable);
    }

    #[tokio::test]
    async fn upload_without_storage_fails() {
        if std::env::var("PAWTRACK__BACKEND__URL").is_ok()
            || std::env::var("PAWTRACK__STORAGE__ENDPOINT").is_ok()
        {
            return;
        }

        let error = crate::upload_evidence_image(std::path::Path::new("missing.jpg"), "claim_1")
            .await
            .unwrap_err();
        assert_eq!(error.error_type, ErrorType::StorageUnavailable);
    }

    #[tokio::test]
    async fn public_url_falls_back_to_key() {
        let settings = storage_settings().await;
        let storage = EvidenceStorage::from_config(&settings).unwrap();
        assert_eq!(
            storage.resolve_url("claim_1/1.jpg"),
            "http://127.0.0.1:9/storage/v1/object/public/evidence/claim_1/1.jpg"
        );

        let mut settings = storage_settings().await;
        settings.backend.url = String::new();
        settings.storage.endpoint = "http://127.0.0.1:9".to_string();
        let storage = EvidenceStorage::from_config(&settings).unwrap();
        assert_eq!(storage.resolve_url("claim_1/1.jpg"), "claim_1/1.jpg");
    }

    #[tokio::test]
    async fn missing_file_is_an_internal_error() {
        let storage = EvidenceStorage::from_config(&storage_settings().await).unwrap();

        let error = storage
            .upload(std::path::Path::new("/nonexistent/evidence.jpg"), "claim_1")
            .await
            .unwrap_err();
        assert_eq!(error.error_type, ErrorType::InternalError);
    }

    #[tokio::test]
    async fn oversized_images_are_rejected() {
        let mut settings = storage_settings().await;
        settings.features.limits.evidence_size = 4;
        let storage = EvidenceStorage::from_config(&settings).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a tiny jpeg").unwrap();

        let error = storage.upload(file.path(), "claim_1").await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::PayloadTooLarge { max: 4 });
    }

    #[tokio::test]
    async fn upload_errors_are_propagated() {
        let storage = EvidenceStorage::from_config(&storage_settings().await).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xd8, 0xff, 0xd9]).unwrap();

        let error = storage.upload(file.path(), "claim_1").await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::InternalError);
    }
}
