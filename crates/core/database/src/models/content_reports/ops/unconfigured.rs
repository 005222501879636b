use pawtrack_result::Result;

use crate::UnconfiguredDb;
use crate::{ContentReport, NewContentReport};

use super::AbstractContentReports;

#[async_trait]
impl AbstractContentReports for UnconfiguredDb {
    async fn insert_report(
        &self,
        _report: &NewContentReport,
        _access_token: Option<&str>,
    ) -> Result<ContentReport> {
        Err(create_error!(BackendUnavailable))
    }

    async fn fetch_reports_for_pet(&self, _pet_id: &str) -> Result<Vec<ContentReport>> {
        Err(create_error!(BackendUnavailable))
    }
}
