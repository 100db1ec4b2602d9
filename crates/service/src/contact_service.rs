use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::errors::ServiceError;
use crate::pet_service::PetWithContacts;
use models::{contact, pet};

/// Append a contact to an existing pet and return the pet with its
/// refreshed contact list. Fails fast with `NotFound` before anything is
/// constructed when the pet id is unknown.
pub async fn add_contact(
    db: &DatabaseConnection,
    pet_id: i32,
    text: &str,
) -> Result<PetWithContacts, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let Some(found) = pet::find_by_id(&txn, pet_id).await? else {
        return Err(ServiceError::not_found("pet"));
    };

    contact::create(&txn, found.id, text).await?;
    let contacts = contact::list_for_pet(&txn, found.id).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    debug!(pet_id, total = contacts.len(), "added contact to pet");
    Ok((found, contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet_service;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn contact_appends_to_existing_pet() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let p = pet_service::create_pet(&db, "Rex", 1, 99.90).await?;
        let (_, contacts) = add_contact(&db, p.id, "tel 11 99999-0000").await?;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].text, "tel 11 99999-0000");

        // Visible in a subsequent get-by-id
        let (_, fetched) = pet_service::get_pet(&db, p.id).await?.unwrap();
        assert_eq!(fetched.len(), 1);

        let (_, two) = add_contact(&db, p.id, "email tutor@example.com").await?;
        assert_eq!(two.len(), 2);
        assert_eq!(two[1].text, "email tutor@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn contact_to_unknown_pet_is_not_found_and_writes_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let res = add_contact(&db, 4242, "tel 11 99999-0000").await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        // no contact row was created
        let orphans = models::contact::list_for_pet(&db, 4242).await?;
        assert!(orphans.is_empty());

        Ok(())
    }
}
