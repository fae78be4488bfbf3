use thiserror::Error;

/// Violations of the monetary invariants enforced at every entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("rate must be between 0 and 1")]
    RateOutOfRange,
    #[error("rate must not have more than 2 decimal places")]
    RateDecimalPlacesExceeded,
    #[error("amount must be greater than 0")]
    AmountMustBeGreaterThanZero,
    #[error("amount must not have more than 2 decimal places")]
    AmountDecimalPlacesExceeded,
    #[error("max score {max} is below min score {min}")]
    ScoreRangeInverted { min: i64, max: i64 },
}

/// Requests rejected before any store access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("{field} has an invalid format, expected YYYY-MM-DD HH:mm:ss: {value:?}")]
    MalformedTime { field: &'static str, value: String },
    #[error("caller is not authenticated")]
    Unauthenticated,
}

/// Failures reading or writing the persistent store.
///
/// The payload is kept for logs; `Display` stays generic so backend details
/// never reach API callers.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable")]
    Backend(String),
    #[error("stored record could not be decoded")]
    Codec(String),
}

impl StoreError {
    pub fn detail(&self) -> &str {
        match self {
            StoreError::Backend(detail) | StoreError::Codec(detail) => detail,
        }
    }
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Request error: {0}")]
    Request(#[from] RequestError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
