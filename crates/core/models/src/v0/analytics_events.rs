/// Open-ended key/value properties attached to an analytics event
pub type AnalyticsProperties = serde_json::Map<String, serde_json::Value>;
