use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::company_service;

use crate::catalog::domain::ServiceItem;
use crate::catalog::repository::CatalogRepository;
use crate::errors::RepositoryError;

pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn list_by_company(&self, company_id: i64) -> Result<Vec<ServiceItem>, RepositoryError> {
        let rows = company_service::list_by_company(&self.db, company_id).await?;
        Ok(rows
            .into_iter()
            .map(|r| ServiceItem {
                id: r.id,
                company_id: r.company_id,
                name: r.name,
                description: r.description,
                price: r.price,
                duration_minutes: r.duration_minutes,
                created_at: r.created_at.into(),
                updated_at: r.updated_at.into(),
            })
            .collect())
    }
}
