use thiserror::Error;

/// Failures of the UserService integration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserServiceError {
    /// The UserService answered 404 for the superuser list.
    #[error("superusers not found")]
    SuperusersNotFound,
    /// The request could not be built or sent.
    #[error("userservice client: internal error: {0}")]
    Internal(String),
    /// Unexpected status or undecodable body.
    #[error("userservice client: invalid response: {0}")]
    InvalidResponse(String),
    /// The UserService is unavailable; callers continue without superusers.
    #[error("userservice unavailable: graceful degradation applied: {0}")]
    Degraded(String),
}

impl UserServiceError {
    /// Outcomes that let a company mutation proceed without enrichment.
    pub fn is_tolerated(&self) -> bool {
        matches!(self, UserServiceError::SuperusersNotFound | UserServiceError::Degraded(_))
    }
}
