#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EquipmentError {
    #[error("unknown equipment: {0}")]
    Unknown(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LiftError {
    #[error("unknown lift: {0}")]
    Unknown(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern must be a dash-separated list of integers")]
    ParseError,
    #[error("unknown pattern: {0}")]
    Unknown(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TimeDomainError {
    #[error("unknown time domain: {0}")]
    Unknown(String),
}
