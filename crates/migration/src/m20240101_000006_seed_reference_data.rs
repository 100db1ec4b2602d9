//! Seed the read-only lookup tables.
//!
//! The service only ever lists these rows; provisioning happens here so a
//! fresh database serves non-empty `/tipos-animal` and `/tipos-contato`.
use sea_orm_migration::prelude::*;

const ANIMAL_TYPES: [&str; 5] = ["Cachorro", "Gato", "Pássaro", "Roedor", "Réptil"];
const CONTACT_TYPES: [&str; 3] = ["Telefone", "Email", "WhatsApp"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for label in ANIMAL_TYPES {
            let insert = Query::insert()
                .into_table(AnimalType::Table)
                .columns([AnimalType::Description])
                .values_panic([label.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }
        for label in CONTACT_TYPES {
            let insert = Query::insert()
                .into_table(ContactType::Table)
                .columns([ContactType::Description])
                .values_panic([label.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete_animals = Query::delete().from_table(AnimalType::Table).to_owned();
        manager.exec_stmt(delete_animals).await?;
        let delete_contacts = Query::delete().from_table(ContactType::Table).to_owned();
        manager.exec_stmt(delete_contacts).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AnimalType { Table, Description }

#[derive(DeriveIden)]
enum ContactType { Table, Description }
