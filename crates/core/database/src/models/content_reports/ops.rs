use pawtrack_result::Result;

use crate::{ContentReport, NewContentReport};

mod reference;
#[cfg(feature = "rest")]
mod rest;
mod unconfigured;

#[async_trait]
pub trait AbstractContentReports: Sync + Send {
    /// Insert a new report, authorised as the holder of the access token if any
    ///
    /// Returns the report as stored, with its assigned id and creation time.
    async fn insert_report(
        &self,
        report: &NewContentReport,
        access_token: Option<&str>,
    ) -> Result<ContentReport>;

    /// Fetch all reports filed against a pet listing, oldest first
    async fn fetch_reports_for_pet(&self, pet_id: &str) -> Result<Vec<ContentReport>>;
}
