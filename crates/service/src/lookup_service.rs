use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::errors::ServiceError;
use models::{animal_type, contact_type};

pub async fn list_animal_types(db: &DatabaseConnection) -> Result<Vec<animal_type::Model>, ServiceError> {
    let rows = animal_type::list_all(db).await?;
    debug!(count = rows.len(), "listed animal types");
    Ok(rows)
}

pub async fn list_contact_types(db: &DatabaseConnection) -> Result<Vec<contact_type::Model>, ServiceError> {
    let rows = contact_type::list_all(db).await?;
    debug!(count = rows.len(), "listed contact types");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn lookup_tables_serve_seeded_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let animals = list_animal_types(&db).await?;
        assert_eq!(animals.len(), 5);
        assert_eq!(animals[0].description, "Cachorro");

        let contacts = list_contact_types(&db).await?;
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0].description, "Telefone");

        Ok(())
    }
}
