use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Pet: composite unique (name, animal_type_id); duplicate inserts
        // surface as a unique-constraint violation mapped to Conflict.
        manager
            .create_index(
                Index::create()
                    .name("uniq_pet_name_animal_type")
                    .table(Pet::Table)
                    .col(Pet::Name)
                    .col(Pet::AnimalTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Contact: index on pet_id for the per-pet contact listing
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_pet")
                    .table(Contact::Table)
                    .col(Contact::PetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contact_pet").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_pet_name_animal_type").table(Pet::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Pet { Table, Name, AnimalTypeId }

#[derive(DeriveIden)]
enum Contact { Table, PetId }
