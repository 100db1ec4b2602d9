//! Create `animal_type` lookup table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnimalType::Table)
                    .if_not_exists()
                    .col(integer(AnimalType::Id).primary_key().auto_increment())
                    .col(string_len(AnimalType::Description, 140).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AnimalType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum AnimalType { Table, Id, Description }
