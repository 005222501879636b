use iso8601_timestamp::Timestamp;
use pawtrack_result::Result;
use ulid::Ulid;

use crate::ReferenceDb;
use crate::{ContentReport, NewContentReport};

use super::AbstractContentReports;

static COL: &str = "content_reports";

#[async_trait]
impl AbstractContentReports for ReferenceDb {
    /// Insert a new report, authorised as the holder of the access token if any
    async fn insert_report(
        &self,
        report: &NewContentReport,
        access_token: Option<&str>,
    ) -> Result<ContentReport> {
        // Reports may only be filed under the caller's own identity
        if let Some(reporter_id) = &report.reporter_id {
            let sessions = self.sessions.lock().await;
            let caller = access_token.and_then(|token| sessions.get(token));
            if caller.map(|user| &user.id) != Some(reporter_id) {
                return Err(create_database_error!("insert", COL));
            }
        }

        let report = ContentReport {
            id: Ulid::new().to_string(),
            reporter_id: report.reporter_id.clone(),
            pet_id: report.pet_id.clone(),
            reason: report.reason.clone(),
            details: report.details.clone(),
            created_at: Timestamp::now_utc(),
        };

        let mut reports = self.content_reports.lock().await;
        if reports.contains_key(&report.id) {
            Err(create_database_error!("insert", COL))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(report)
        }
    }

    /// Fetch all reports filed against a pet listing, oldest first
    async fn fetch_reports_for_pet(&self, pet_id: &str) -> Result<Vec<ContentReport>> {
        let reports = self.content_reports.lock().await;
        let mut reports: Vec<ContentReport> = reports
            .values()
            .filter(|report| report.pet_id == pet_id)
            .cloned()
            .collect();

        reports.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(reports)
    }
}
