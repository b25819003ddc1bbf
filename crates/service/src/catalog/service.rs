use std::sync::Arc;

use tracing::{info, instrument};

use super::models::ServiceListResponse;
use super::repository::CatalogRepository;
use crate::errors::ServiceError;

pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self { Self { repo } }

    /// List the services of a company. `user_id` is only recorded in logs.
    #[instrument(skip(self))]
    pub async fn list_by_company(&self, company_id: i64, user_id: Option<i64>) -> Result<ServiceListResponse, ServiceError> {
        let items = self
            .repo
            .list_by_company(company_id)
            .await
            .map_err(|e| ServiceError::internal("ListByCompany - repository error", e))?;
        info!(company_id, count = items.len(), "services listed");
        Ok(ServiceListResponse::from_domain(items))
    }
}
