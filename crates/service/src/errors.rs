use std::error::Error as StdError;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure classes surfaced by the company workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operation is restricted to the superuser role.
    OnlySuperuser,
    /// Actor is neither a superuser nor a manager of the company.
    AccessDenied,
    CompanyNotFound,
    /// Payload rejected after the caller was authorized.
    InvalidInput,
    /// Unexpected failure of a dependency; the cause is kept for logs only.
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::OnlySuperuser => "only superuser can perform this action",
            ErrorKind::AccessDenied => "access denied",
            ErrorKind::CompanyNotFound => "company not found",
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::Internal => "internal error",
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ErrorKind::OnlySuperuser => 2001,
            ErrorKind::AccessDenied => 2002,
            ErrorKind::CompanyNotFound => 2003,
            ErrorKind::InvalidInput => 2004,
            ErrorKind::Internal => 2100,
        }
    }
}

/// Error returned by every service operation: a kind plus an optional cause.
#[derive(Debug, Error)]
#[error("{}", self.render())]
pub struct ServiceError {
    kind: ErrorKind,
    context: Option<String>,
    #[source]
    source: Option<BoxError>,
}

impl ServiceError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, context: None, source: None }
    }

    pub fn only_superuser() -> Self { Self::new(ErrorKind::OnlySuperuser) }
    pub fn access_denied() -> Self { Self::new(ErrorKind::AccessDenied) }
    pub fn company_not_found() -> Self { Self::new(ErrorKind::CompanyNotFound) }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self { kind: ErrorKind::InvalidInput, context: Some(reason.into()), source: None }
    }

    /// Wrap a dependency failure as `Internal`, keeping the cause.
    pub fn internal<E>(context: impl Into<String>, cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { kind: ErrorKind::Internal, context: Some(context.into()), source: Some(cause.into()) }
    }

    pub fn kind(&self) -> ErrorKind { self.kind }

    pub fn is(&self, kind: ErrorKind) -> bool { self.kind == kind }

    pub fn context(&self) -> Option<&str> { self.context.as_deref() }

    fn render(&self) -> String {
        match (&self.context, &self.source) {
            (Some(ctx), Some(src)) => format!("{}: {}: {}", self.kind.as_str(), ctx, src),
            (Some(ctx), None) => format!("{}: {}", self.kind.as_str(), ctx),
            _ => self.kind.as_str().to_string(),
        }
    }
}

impl From<ErrorKind> for ServiceError {
    fn from(kind: ErrorKind) -> Self { Self::new(kind) }
}

/// Errors reported by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool { matches!(self, RepositoryError::NotFound(_)) }
}

impl From<models::errors::ModelError> for RepositoryError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => RepositoryError::Validation(msg),
            models::errors::ModelError::Db(msg) => RepositoryError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for RepositoryError {
    fn from(e: sea_orm::DbErr) -> Self { RepositoryError::Db(e.to_string()) }
}
