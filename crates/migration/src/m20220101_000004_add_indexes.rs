use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // CompanyManager: reverse lookup "companies managed by user"
        manager
            .create_index(
                Index::create()
                    .name("idx_company_manager_user")
                    .table(CompanyManager::Table)
                    .col(CompanyManager::UserId)
                    .to_owned(),
            )
            .await?;

        // CompanyService: listing by company
        manager
            .create_index(
                Index::create()
                    .name("idx_company_service_company")
                    .table(CompanyService::Table)
                    .col(CompanyService::CompanyId)
                    .to_owned(),
            )
            .await?;

        // Company: name filter
        manager
            .create_index(
                Index::create()
                    .name("idx_company_name")
                    .table(Company::Table)
                    .col(Company::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_company_name").table(Company::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_company_service_company").table(CompanyService::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_company_manager_user").table(CompanyManager::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Name }

#[derive(DeriveIden)]
enum CompanyManager { Table, UserId }

#[derive(DeriveIden)]
enum CompanyService { Table, CompanyId }
