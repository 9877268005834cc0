use thiserror::Error;

pub type PipeResult<T> = Result<T, PipeError>;

/// Rejected numeric input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipeError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive numeric value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
