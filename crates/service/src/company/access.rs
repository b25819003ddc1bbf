use tracing::debug;

use super::repository::CompanyRepository;
use crate::actor::{Actor, Role};
use crate::errors::{RepositoryError, ServiceError};

/// Check that `actor` may mutate company `company_id`.
///
/// Superusers pass without a store lookup; everyone else must be listed as a
/// manager of the company.
pub async fn check_access(repo: &dyn CompanyRepository, actor: &Actor, company_id: i64) -> Result<(), ServiceError> {
    match actor.role {
        Role::Superuser => return Ok(()),
        Role::RegularUser => {}
    }

    match repo.is_manager(company_id, actor.user_id).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            debug!(company_id, user_id = actor.user_id, "actor is not a manager");
            Err(ServiceError::access_denied())
        }
        Err(RepositoryError::NotFound(_)) => Err(ServiceError::company_not_found()),
        Err(e) => Err(ServiceError::internal("checkAccess - repository error", e)),
    }
}
