//! Create `company_service` table.
//! Catalog of services a company offers; prices are stored in minor units.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyService::Table)
                    .if_not_exists()
                    .col(big_integer(CompanyService::Id).auto_increment().primary_key())
                    .col(big_integer(CompanyService::CompanyId).not_null())
                    .col(string_len(CompanyService::Name, 255).not_null())
                    .col(text_null(CompanyService::Description))
                    .col(big_integer(CompanyService::Price).not_null())
                    .col(integer(CompanyService::DurationMinutes).not_null())
                    .col(timestamp_with_time_zone(CompanyService::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CompanyService::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_service_company")
                            .from(CompanyService::Table, CompanyService::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyService {
    Table,
    Id,
    CompanyId,
    Name,
    Description,
    Price,
    DurationMinutes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Company { Table, Id }
