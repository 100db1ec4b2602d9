//! Create `pet` table with FK to `animal_type`.
//!
//! The composite unique index on (name, animal_type_id) lives in the
//! index migration applied afterwards.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(integer(Pet::Id).primary_key().auto_increment())
                    .col(string_len(Pet::Name, 140).not_null())
                    .col(integer(Pet::AnimalTypeId).not_null())
                    .col(integer(Pet::Quantity).not_null())
                    .col(double(Pet::Value).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_animal_type")
                            .from(Pet::Table, Pet::AnimalTypeId)
                            .to(AnimalType::Table, AnimalType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pet::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Pet { Table, Id, Name, AnimalTypeId, Quantity, Value }

#[derive(DeriveIden)]
enum AnimalType { Table, Id }
