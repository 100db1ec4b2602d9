//! Create `contact` table with FKs to `pet` and `contact_type`.
//!
//! Contacts are append-only; deleting a pet cascades to its contacts.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(integer(Contact::Id).primary_key().auto_increment())
                    .col(string_len(Contact::Text, 4000).not_null())
                    .col(integer(Contact::PetId).not_null())
                    .col(integer(Contact::ContactTypeId).not_null())
                    .col(timestamp_with_time_zone(Contact::InsertedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_pet")
                            .from(Contact::Table, Contact::PetId)
                            .to(Pet::Table, Pet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_contact_type")
                            .from(Contact::Table, Contact::ContactTypeId)
                            .to(ContactType::Table, ContactType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Contact { Table, Id, Text, PetId, ContactTypeId, InsertedAt }

#[derive(DeriveIden)]
enum Pet { Table, Id }

#[derive(DeriveIden)]
enum ContactType { Table, Id }
