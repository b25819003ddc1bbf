//! Create `company` table.
//!
//! Managers live in `company_manager`; this table only holds the company card.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(big_integer(Company::Id).auto_increment().primary_key())
                    .col(string_len(Company::Name, 255).not_null())
                    .col(text_null(Company::Description))
                    .col(string_len_null(Company::Address, 512))
                    .col(string_len_null(Company::Phone, 32))
                    .col(timestamp_with_time_zone(Company::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Company::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Id, Name, Description, Address, Phone, CreatedAt, UpdatedAt }
