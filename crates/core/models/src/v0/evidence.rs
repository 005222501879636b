auto_derived!(
    /// Result of uploading an evidence image
    pub struct EvidenceUpload {
        /// Storage key within the evidence bucket
        pub key: String,
        /// Public URL if available, otherwise the storage key
        pub url: String,
        /// Size of the uploaded image (in bytes)
        pub size: usize,
    }
);
