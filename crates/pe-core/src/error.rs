use thiserror::Error;

pub type PeResult<T> = Result<T, PeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeError {
    #[error("Domain violation: {what}")]
    DomainViolation { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Unsupported unit conversion from {from} to {to}")]
    UnsupportedUnit { from: String, to: String },

    #[error("Unknown unit '{unit}'")]
    UnknownUnit { unit: String },
}
