use pawtrack_models::v0::*;

impl From<crate::ContentReport> for ContentReport {
    fn from(value: crate::ContentReport) -> Self {
        ContentReport {
            id: value.id,
            reporter_id: value.reporter_id,
            pet_id: value.pet_id,
            reason: value.reason,
            details: value.details,
            created_at: value.created_at,
        }
    }
}
