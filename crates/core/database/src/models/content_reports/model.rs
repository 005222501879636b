use iso8601_timestamp::Timestamp;
use pawtrack_models::v0::{DataReportPet, PLACEHOLDER_REPORT_ID};
use pawtrack_result::Result;
use validator::Validate;

use crate::{resolve_identity, Database};

auto_derived!(
    /// User-generated moderation report against a pet listing
    pub struct ContentReport {
        /// Unique Id
        pub id: String,
        /// Id of the user filing this report
        pub reporter_id: Option<String>,
        /// Id of the reported pet listing
        pub pet_id: String,
        /// Reason for reporting the listing
        pub reason: String,
        /// Additional report context
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub details: Option<String>,
        /// When this report was created
        pub created_at: Timestamp,
    }

    /// Report row as written by the client
    pub struct NewContentReport {
        /// Id of the user filing this report
        pub reporter_id: Option<String>,
        /// Id of the reported pet listing
        pub pet_id: String,
        /// Reason for reporting the listing
        pub reason: String,
        /// Additional report context
        pub details: Option<String>,
    }
);

impl ContentReport {
    /// Report a pet listing to the moderation team
    ///
    /// Without a configured backend nothing is persisted and a placeholder
    /// echoing the given data is handed back instead.
    pub async fn create(
        db: &Database,
        session: Option<&str>,
        data: DataReportPet,
    ) -> Result<ContentReport> {
        if !db.is_configured() {
            return Ok(ContentReport::placeholder(data));
        }

        let data = data.normalise();
        data.validate().map_err(|error| {
            create_error!(FailedValidation {
                error: error.to_string()
            })
        })?;

        let reporter_id = match resolve_identity(db, session).await {
            Ok(user) => user.map(|user| user.id),
            Err(err) => {
                warn!("Could not resolve reporter, filing anonymously: {err}");
                None
            }
        };

        // Only write as the user when the session actually identified them
        let access_token = reporter_id.as_ref().and(session);

        let report = db
            .insert_report(
                &NewContentReport {
                    reporter_id,
                    pet_id: data.pet_id,
                    reason: data.reason,
                    details: data.details,
                },
                access_token,
            )
            .await?;

        info!("Filed report {} against pet {}", report.id, report.pet_id);
        Ok(report)
    }

    /// Locally fabricated report that was never persisted
    pub fn placeholder(data: DataReportPet) -> ContentReport {
        ContentReport {
            id: PLACEHOLDER_REPORT_ID.to_string(),
            reporter_id: None,
            pet_id: data.pet_id,
            reason: data.reason,
            details: data.details,
            created_at: Timestamp::now_utc(),
        }
    }
}
