//! Create `contact_type` lookup table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactType::Table)
                    .if_not_exists()
                    .col(integer(ContactType::Id).primary_key().auto_increment())
                    .col(string_len(ContactType::Description, 140).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContactType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum ContactType { Table, Id, Description }
