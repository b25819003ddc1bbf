use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::access::check_access;
use super::merge::merge_manager_ids;
use super::models::{CompanyFilterRequest, CompanyListResponse, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest};
use super::repository::CompanyRepository;
use crate::actor::{Actor, Role};
use crate::errors::{RepositoryError, ServiceError};
use crate::userservice::SuperuserDirectory;

/// Company workflows: access control, superuser enrichment and persistence.
///
/// Every create/update fetches the superuser list again; nothing is cached.
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
    superusers: Arc<dyn SuperuserDirectory>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>, superusers: Arc<dyn SuperuserDirectory>) -> Self {
        Self { repo, superusers }
    }

    /// Create a company. Superuser only; superusers become managers.
    ///
    /// The payload is validated after the role check.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::actor::Actor;
    /// use service::company::{CompanyService, models::CreateCompanyRequest, repository::mock::MockCompanyRepository};
    /// use service::userservice::mock::StaticSuperuserDirectory;
    /// let svc = CompanyService::new(
    ///     Arc::new(MockCompanyRepository::default()),
    ///     Arc::new(StaticSuperuserDirectory::returning(vec![1, 2])),
    /// );
    /// let req = CreateCompanyRequest { name: "Shine".into(), manager_ids: vec![2, 3], ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(&Actor::superuser(1), req)).unwrap();
    /// assert_eq!(created.manager_ids, vec![1, 2, 3]);
    /// ```
    #[instrument(skip(self, req), fields(user_id = actor.user_id, role = %actor.role))]
    pub async fn create(&self, actor: &Actor, req: CreateCompanyRequest) -> Result<CompanyResponse, ServiceError> {
        require_superuser(actor)?;
        req.validate().map_err(ServiceError::invalid_input)?;

        let mut input = req.into_create_input();

        if let Some(superusers) = self.fetch_superusers().await? {
            input.manager_ids = merge_manager_ids(&input.manager_ids, &superusers);
        }

        let company = self
            .repo
            .create(input)
            .await
            .map_err(|e| ServiceError::internal("Create - repository error", e))?;

        info!(company_id = company.id, managers = company.manager_ids.len(), "company_created");
        Ok(CompanyResponse::from_domain(company))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<CompanyResponse, ServiceError> {
        let company = self
            .repo
            .get_by_id(id)
            .await
            .map_err(|e| translate(e, "GetByID - repository error"))?;
        Ok(CompanyResponse::from_domain(company))
    }

    #[instrument(skip(self, req))]
    pub async fn list(&self, req: CompanyFilterRequest) -> Result<CompanyListResponse, ServiceError> {
        let filter = req.into_filter();
        let (companies, page) = self
            .repo
            .list(filter)
            .await
            .map_err(|e| ServiceError::internal("List - repository error", e))?;
        debug!(count = companies.len(), total = page.total, "companies listed");
        Ok(CompanyListResponse::from_domain(companies, page))
    }

    /// Update a company. Allowed for superusers and managers of the company;
    /// the payload is validated once access is granted.
    ///
    /// When superusers are known they are merged into the requested manager
    /// list, or into the stored one if the request does not touch managers.
    #[instrument(skip(self, req), fields(user_id = actor.user_id, role = %actor.role))]
    pub async fn update(&self, actor: &Actor, id: i64, req: UpdateCompanyRequest) -> Result<CompanyResponse, ServiceError> {
        check_access(self.repo.as_ref(), actor, id).await?;
        req.validate().map_err(ServiceError::invalid_input)?;

        let mut input = req.into_update_input();

        if let Some(superusers) = self.fetch_superusers().await? {
            if let Some(requested) = input.manager_ids.as_deref().filter(|ids| !ids.is_empty()) {
                let merged = merge_manager_ids(requested, &superusers);
                input.manager_ids = Some(merged);
            } else if !superusers.is_empty() {
                let current = self
                    .repo
                    .get_by_id(id)
                    .await
                    .map_err(|e| translate(e, "Update - failed to get current company"))?;
                input.manager_ids = Some(merge_manager_ids(&current.manager_ids, &superusers));
            }
        }

        let company = self
            .repo
            .update(id, input)
            .await
            .map_err(|e| translate(e, "Update - repository error"))?;

        info!(company_id = company.id, managers = company.manager_ids.len(), "company_updated");
        Ok(CompanyResponse::from_domain(company))
    }

    /// Delete a company. Superuser only, managers included.
    #[instrument(skip(self), fields(user_id = actor.user_id, role = %actor.role))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> Result<(), ServiceError> {
        require_superuser(actor)?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| translate(e, "Delete - repository error"))?;

        info!(company_id = id, "company_deleted");
        Ok(())
    }

    /// `Ok(None)` means "continue without enrichment".
    async fn fetch_superusers(&self) -> Result<Option<Vec<i64>>, ServiceError> {
        match self.superusers.fetch_superusers().await {
            Ok(ids) => Ok(Some(ids)),
            Err(e) if e.is_tolerated() => {
                warn!(error = %e, "superusers unavailable, manager list left as supplied");
                Ok(None)
            }
            Err(e) => Err(ServiceError::internal("failed to get superusers", e)),
        }
    }
}

fn require_superuser(actor: &Actor) -> Result<(), ServiceError> {
    match actor.role {
        Role::Superuser => Ok(()),
        Role::RegularUser => {
            warn!(user_id = actor.user_id, "operation restricted to superusers");
            Err(ServiceError::only_superuser())
        }
    }
}

fn translate(e: RepositoryError, context: &'static str) -> ServiceError {
    match e {
        RepositoryError::NotFound(_) => ServiceError::company_not_found(),
        other => ServiceError::internal(context, other),
    }
}
