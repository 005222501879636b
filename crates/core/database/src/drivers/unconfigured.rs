database_derived!(
    /// Stand-in used when no backend has been configured
    ///
    /// Every operation fails with `BackendUnavailable`.
    #[derive(Debug, Default)]
    pub struct UnconfiguredDb;
);
