use pawtrack_result::Result;

use crate::RestDb;
use crate::{ContentReport, NewContentReport};

use super::AbstractContentReports;

static COL: &str = "content_reports";

#[async_trait]
impl AbstractContentReports for RestDb {
    /// Insert a new report, authorised as the holder of the access token if any
    async fn insert_report(
        &self,
        report: &NewContentReport,
        access_token: Option<&str>,
    ) -> Result<ContentReport> {
        self.insert_returning::<_, ContentReport>(COL, report, access_token)
            .await
            .map_err(|err| {
                error!("Failed to insert report for pet {}: {err}", report.pet_id);
                create_database_error!("insert", COL)
            })?
            .into_iter()
            .next()
            .ok_or_else(|| create_database_error!("insert", COL))
    }

    /// Fetch all reports filed against a pet listing, oldest first
    async fn fetch_reports_for_pet(&self, pet_id: &str) -> Result<Vec<ContentReport>> {
        self.find(
            COL,
            &[
                ("pet_id", format!("eq.{pet_id}")),
                ("order", "created_at.asc".to_string()),
            ],
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }
}
