use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::debug;

use models::{company, company_manager};

use crate::company::domain::{Company, CompanyFilter, CreateCompanyInput, UpdateCompanyInput};
use crate::company::repository::CompanyRepository;
use crate::errors::RepositoryError;
use crate::pagination::PageInfo;

/// PostgreSQL-backed company store. Managers live in `company_manager`.
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

fn to_domain(row: company::Model, manager_ids: Vec<i64>) -> Company {
    Company {
        id: row.id,
        name: row.name,
        description: row.description,
        address: row.address,
        phone: row.phone,
        manager_ids,
        created_at: row.created_at.into(),
        updated_at: row.updated_at.into(),
    }
}

async fn load<C: ConnectionTrait>(db: &C, id: i64) -> Result<Company, RepositoryError> {
    let row = company::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(RepositoryError::NotFound("company"))?;
    let managers = company_manager::list_for_company(db, id).await?;
    Ok(to_domain(row, managers))
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn create(&self, input: CreateCompanyInput) -> Result<Company, RepositoryError> {
        let txn = self.db.begin().await?;
        let row = company::create(
            &txn,
            company::NewCompany {
                name: input.name,
                description: input.description,
                address: input.address,
                phone: input.phone,
            },
        )
        .await?;
        company_manager::replace_for_company(&txn, row.id, &input.manager_ids).await?;
        let managers = company_manager::list_for_company(&txn, row.id).await?;
        txn.commit().await?;
        Ok(to_domain(row, managers))
    }

    async fn get_by_id(&self, id: i64) -> Result<Company, RepositoryError> {
        load(&self.db, id).await
    }

    async fn list(&self, filter: CompanyFilter) -> Result<(Vec<Company>, PageInfo), RepositoryError> {
        let mut query = company::Entity::find().order_by_asc(company::Column::Id);
        if let Some(name) = filter.name.as_deref() {
            query = query.filter(company::Column::Name.contains(name));
        }
        if let Some(manager_id) = filter.manager_id {
            query = query.filter(
                company::Column::Id.in_subquery(
                    Query::select()
                        .column(company_manager::Column::CompanyId)
                        .from(company_manager::Entity)
                        .and_where(company_manager::Column::UserId.eq(manager_id))
                        .to_owned(),
                ),
            );
        }

        let (page_idx, per_page) = filter.pagination.normalize();
        let paginator = query.paginate(&self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page_idx).await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut managers = company_manager::list_for_companies(&self.db, &ids).await?;
        let companies = rows
            .into_iter()
            .map(|row| {
                let ids = managers.remove(&row.id).unwrap_or_default();
                to_domain(row, ids)
            })
            .collect::<Vec<_>>();
        debug!(total, returned = companies.len(), "company page loaded");
        Ok((companies, PageInfo::new(filter.pagination, total)))
    }

    async fn update(&self, id: i64, input: UpdateCompanyInput) -> Result<Company, RepositoryError> {
        let txn = self.db.begin().await?;
        let changes = company::CompanyChanges {
            name: input.name,
            description: input.description,
            address: input.address,
            phone: input.phone,
        };
        let row = company::update(&txn, id, changes)
            .await?
            .ok_or(RepositoryError::NotFound("company"))?;
        if let Some(ids) = input.manager_ids.as_deref() {
            company_manager::replace_for_company(&txn, id, ids).await?;
        }
        let managers = company_manager::list_for_company(&txn, id).await?;
        txn.commit().await?;
        Ok(to_domain(row, managers))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        if company::hard_delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(RepositoryError::NotFound("company"))
        }
    }

    async fn is_manager(&self, company_id: i64, user_id: i64) -> Result<bool, RepositoryError> {
        if !company::exists(&self.db, company_id).await? {
            return Err(RepositoryError::NotFound("company"));
        }
        Ok(company_manager::is_manager(&self.db, company_id, user_id).await?)
    }
}
