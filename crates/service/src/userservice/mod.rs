//! Integration with the external UserService, the source of truth for
//! superuser membership.

pub mod client;
pub mod errors;
pub mod models;

use async_trait::async_trait;

pub use client::UserServiceClient;
pub use errors::UserServiceError;

/// Source of the current superuser ids.
///
/// Implementations apply graceful degradation: besides success they only
/// report `SuperusersNotFound` or `Degraded`, unless something unexpected
/// happens that the caller must treat as fatal for the operation.
#[async_trait]
pub trait SuperuserDirectory: Send + Sync {
    async fn fetch_superusers(&self) -> Result<Vec<i64>, UserServiceError>;
}

#[async_trait]
impl SuperuserDirectory for UserServiceClient {
    async fn fetch_superusers(&self) -> Result<Vec<i64>, UserServiceError> {
        self.get_superusers_with_graceful_degradation().await
    }
}

/// Fixed-answer directory for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub struct StaticSuperuserDirectory {
        outcome: Result<Vec<i64>, UserServiceError>,
        calls: AtomicUsize,
    }

    impl StaticSuperuserDirectory {
        pub fn returning(ids: Vec<i64>) -> Self { Self::with_outcome(Ok(ids)) }
        pub fn not_found() -> Self { Self::with_outcome(Err(UserServiceError::SuperusersNotFound)) }
        pub fn degraded() -> Self { Self::with_outcome(Err(UserServiceError::Degraded("connection refused".into()))) }
        pub fn failing(err: UserServiceError) -> Self { Self::with_outcome(Err(err)) }

        fn with_outcome(outcome: Result<Vec<i64>, UserServiceError>) -> Self {
            Self { outcome, calls: AtomicUsize::new(0) }
        }

        /// Number of fetches served so far.
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl SuperuserDirectory for StaticSuperuserDirectory {
        async fn fetch_superusers(&self) -> Result<Vec<i64>, UserServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }
}
