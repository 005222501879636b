use std::fmt;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// This error was not labeled :(
    LabelMe,

    // ? Backend related errors
    BackendUnavailable,
    StorageUnavailable,

    // ? Evidence related errors
    PayloadTooLarge {
        max: usize,
    },

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError,
    InvalidSession,
    FailedValidation {
        error: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_type {
            ErrorType::DatabaseError {
                operation,
                collection,
            } => write!(f, "database error during {operation} on {collection}")?,
            ErrorType::FailedValidation { error } => write!(f, "validation failed: {error}")?,
            ErrorType::PayloadTooLarge { max } => {
                write!(f, "payload exceeds the maximum of {max} bytes")?
            }
            other => write!(f, "{other:?}")?,
        }

        write!(f, " ({})", self.location)
    }
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        $crate::create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[cfg(test)]
mod tests {
    use crate::ErrorType;

    #[test]
    fn use_macro_to_construct_error() {
        let error = create_error!(LabelMe);
        assert!(matches!(error.error_type, ErrorType::LabelMe));
        assert!(error.location.contains("lib.rs"));
    }

    #[test]
    fn use_macro_to_construct_complex_error() {
        let error = create_database_error!("insert", "content_reports");
        assert_eq!(
            error.error_type,
            ErrorType::DatabaseError {
                operation: "insert".to_string(),
                collection: "content_reports".to_string()
            }
        );
        assert!(error
            .to_string()
            .starts_with("database error during insert on content_reports"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_with_type_tag() {
        let error = create_error!(PayloadTooLarge { max: 10 });
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "PayloadTooLarge");
        assert_eq!(value["max"], 10);
    }
}
