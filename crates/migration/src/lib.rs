//! Migrator registering entity-specific migrations in dependency order.
//! Lookup tables come first, indexes and seed data are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_animal_type;
mod m20240101_000002_create_contact_type;
mod m20240101_000003_create_pet;
mod m20240101_000004_create_contact;
mod m20240101_000005_add_indexes;
mod m20240101_000006_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_animal_type::Migration),
            Box::new(m20240101_000002_create_contact_type::Migration),
            Box::new(m20240101_000003_create_pet::Migration),
            Box::new(m20240101_000004_create_contact::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
            Box::new(m20240101_000006_seed_reference_data::Migration),
        ]
    }
}
