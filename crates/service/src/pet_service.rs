use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::debug;

use crate::errors::ServiceError;
use models::{contact, pet};

/// A pet together with its contacts in insertion order.
pub type PetWithContacts = (pet::Model, Vec<contact::Model>);

/// Create a pet in one committed transaction. A duplicate (name, type)
/// pair surfaces as `ServiceError::Conflict`.
pub async fn create_pet(
    db: &DatabaseConnection,
    name: &str,
    quantity: i32,
    value: f64,
) -> Result<pet::Model, ServiceError> {
    debug!(name, "creating pet");
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let created = pet::create(&txn, name, quantity, value).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(created)
}

/// List every pet with its contacts.
pub async fn list_pets(db: &DatabaseConnection) -> Result<Vec<PetWithContacts>, ServiceError> {
    let mut rows = pet::Entity::find()
        .find_with_related(contact::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    for (_, contacts) in rows.iter_mut() {
        contacts.sort_by_key(|c| c.id);
    }
    debug!(count = rows.len(), "listed pets");
    Ok(rows)
}

/// Get one pet with its contacts; `None` when the id is unknown.
pub async fn get_pet(db: &DatabaseConnection, id: i32) -> Result<Option<PetWithContacts>, ServiceError> {
    let Some(found) = pet::find_by_id(db, id).await? else {
        return Ok(None);
    };
    let contacts = contact::list_for_pet(db, found.id).await?;
    Ok(Some((found, contacts)))
}

/// Delete every pet matching `name` in one commit; returns the row count.
pub async fn delete_pet_by_name(db: &DatabaseConnection, name: &str) -> Result<u64, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let count = pet::delete_by_name(&txn, name).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(name, count, "deleted pets by name");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn pet_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_pet(&db, "Rex", 1, 99.90).await?;
        let (found, contacts) = get_pet(&db, created.id).await?.unwrap();
        assert_eq!(found.name, "Rex");
        assert!(contacts.is_empty());

        let listed = list_pets(&db).await?;
        assert_eq!(listed.len(), 1);

        let count = delete_pet_by_name(&db, "Rex").await?;
        assert_eq!(count, 1);
        assert!(get_pet(&db, created.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_pet_is_conflict_and_leaves_store_unchanged() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        create_pet(&db, "Rex", 1, 99.90).await?;
        let dup = create_pet(&db, "Rex", 3, 5.0).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        let listed = list_pets(&db).await?;
        assert_eq!(listed.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_name_affects_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        create_pet(&db, "Mia", 1, 10.0).await?;
        let count = delete_pet_by_name(&db, "Ghost").await?;
        assert_eq!(count, 0);
        assert_eq!(list_pets(&db).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(list_pets(&db).await?.is_empty());
        assert!(get_pet(&db, 1).await?.is_none());
        Ok(())
    }
}
