use thiserror::Error;

/// Failure outcomes of league operations.
///
/// `NotFound`, `Precondition`, `RuleViolation` and `Invalid` are expected,
/// user-facing outcomes. `Internal` marks a broken invariant inside the
/// engine and is never the caller's fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeagueError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Precondition(String),
    #[error("{0}")]
    RuleViolation(String),
    #[error("{0}")]
    Invalid(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl LeagueError {
    pub fn not_found(message: impl Into<String>) -> Self {
        LeagueError::NotFound(message.into())
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        LeagueError::Precondition(message.into())
    }

    pub fn rule(message: impl Into<String>) -> Self {
        LeagueError::RuleViolation(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        LeagueError::Invalid(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        LeagueError::Internal(message.into())
    }
}

pub type LeagueResult<T> = Result<T, LeagueError>;
