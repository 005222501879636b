auto_derived!(
    /// User resolved from an authenticated session
    pub struct AuthUser {
        /// Unique Id
        pub id: String,
        /// Email address on the account
        #[cfg_attr(feature = "serde", serde(default))]
        pub email: Option<String>,
    }
);
