//! Create `company_manager` join table.
//!
//! The composite primary key keeps a user listed at most once per company.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyManager::Table)
                    .if_not_exists()
                    .col(big_integer(CompanyManager::CompanyId).not_null())
                    .col(big_integer(CompanyManager::UserId).not_null())
                    .col(timestamp_with_time_zone(CompanyManager::CreatedAt).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_company_manager")
                            .col(CompanyManager::CompanyId)
                            .col(CompanyManager::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_manager_company")
                            .from(CompanyManager::Table, CompanyManager::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyManager::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyManager { Table, CompanyId, UserId, CreatedAt }

#[derive(DeriveIden)]
enum Company { Table, Id }
