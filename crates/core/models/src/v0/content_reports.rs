use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::Validate;

/// Id given to reports that were never persisted
pub const PLACEHOLDER_REPORT_ID: &str = "mock";

auto_derived!(
    /// User-generated moderation report against a pet listing
    pub struct ContentReport {
        /// Unique Id
        pub id: String,
        /// Id of the user filing this report, if signed in
        pub reporter_id: Option<String>,
        /// Id of the reported pet listing
        pub pet_id: String,
        /// Reason for reporting the listing
        pub reason: String,
        /// Additional report context
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        pub details: Option<String>,
        /// When this report was created
        pub created_at: Timestamp,
    }

    /// # Report Data
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataReportPet {
        /// Pet listing being reported
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub pet_id: String,
        /// Reason for the report
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 256)))]
        pub reason: String,
        /// Additional report description
        #[cfg_attr(feature = "validator", validate(length(max = 2000)))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub details: Option<String>,
    }
);

impl ContentReport {
    /// Whether this report only exists locally
    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_REPORT_ID
    }
}

impl DataReportPet {
    /// Trim surrounding whitespace, dropping details that end up empty
    pub fn normalise(self) -> Self {
        DataReportPet {
            pet_id: self.pet_id.trim().to_string(),
            reason: self.reason.trim().to_string(),
            details: self
                .details
                .map(|details| details.trim().to_string())
                .filter(|details| !details.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use iso8601_timestamp::Timestamp;

    use super::{ContentReport, DataReportPet, PLACEHOLDER_REPORT_ID};

    fn report(id: &str) -> ContentReport {
        ContentReport {
            id: id.to_string(),
            reporter_id: None,
            pet_id: "pet_1".to_string(),
            reason: "spam".to_string(),
            details: None,
            created_at: Timestamp::now_utc(),
        }
    }

    #[test]
    fn placeholder_is_recognised() {
        assert!(report(PLACEHOLDER_REPORT_ID).is_placeholder());
        assert!(!report("01HZX3J6W4V1T9Q8").is_placeholder());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn absent_details_are_not_serialised() {
        let value = serde_json::to_value(report("01HZX3J6W4V1T9Q8")).unwrap();
        assert!(value.get("details").is_none());
        assert_eq!(value["pet_id"], "pet_1");
    }

    #[test]
    fn normalise_trims_and_drops_blank_details() {
        let data = DataReportPet {
            pet_id: "  pet_1 ".to_string(),
            reason: "\tspam\n".to_string(),
            details: Some("   ".to_string()),
        }
        .normalise();

        assert_eq!(data.pet_id, "pet_1");
        assert_eq!(data.reason, "spam");
        assert_eq!(data.details, None);
    }

    #[cfg(feature = "validator")]
    #[test]
    fn rejects_blank_reason() {
        use validator::Validate;

        let data = DataReportPet {
            pet_id: "pet_1".to_string(),
            reason: "   ".to_string(),
            details: None,
        }
        .normalise();

        assert!(data.validate().is_err());
    }

    #[cfg(feature = "validator")]
    #[test]
    fn rejects_oversized_details() {
        use validator::Validate;

        let data = DataReportPet {
            pet_id: "pet_1".to_string(),
            reason: "Not my dog".to_string(),
            details: Some("x".repeat(2001)),
        };

        assert!(data.validate().is_err());
    }
}
