#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("limit must not be negative, got {0}")]
    NegativeLimit(i64),
    #[error("limit {limit} exceeds the maximum supported limit {max}")]
    LimitTooLarge { limit: i64, max: i64 },
    #[error("expected a positive number, got {0}")]
    NotPositive(i64),
}
