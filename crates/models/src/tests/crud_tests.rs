use anyhow::Result;

use super::setup_test_db;
use crate::errors::ModelError;
use crate::{animal_type, contact, contact_type, pet};

#[tokio::test]
async fn test_pet_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create
    let created = pet::create(&db, "Rex", 1, 99.90).await?;
    assert_eq!(created.name, "Rex");
    assert_eq!(created.animal_type_id, pet::DEFAULT_ANIMAL_TYPE_ID);

    // Read
    let found = pet::find_by_id(&db, created.id).await?;
    assert_eq!(found.as_ref().map(|p| p.id), Some(created.id));

    // Duplicate (name, type) must be rejected by the unique index
    let dup = pet::create(&db, "Rex", 2, 10.0).await;
    assert!(matches!(dup, Err(ModelError::Conflict(_))));

    // Delete by name reports the affected row count
    let removed = pet::delete_by_name(&db, "Rex").await?;
    assert_eq!(removed, 1);
    assert!(pet::find_by_id(&db, created.id).await?.is_none());

    let removed_again = pet::delete_by_name(&db, "Rex").await?;
    assert_eq!(removed_again, 0);

    Ok(())
}

#[tokio::test]
async fn test_pet_create_rejects_empty_name() -> Result<()> {
    let db = setup_test_db().await?;
    let res = pet::create(&db, "  ", 1, 1.0).await;
    assert!(matches!(res, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_contact_create_and_list_order() -> Result<()> {
    let db = setup_test_db().await?;
    let p = pet::create(&db, "Mia", 1, 50.0).await?;

    let first = contact::create(&db, p.id, "tel 11 99999-0000").await?;
    let second = contact::create(&db, p.id, "email tutor@example.com").await?;
    assert_eq!(first.pet_id, p.id);
    assert_eq!(first.contact_type_id, contact::DEFAULT_CONTACT_TYPE_ID);

    let listed = contact::list_for_pet(&db, p.id).await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);

    // No contacts for an unknown pet id
    let none = contact::list_for_pet(&db, p.id + 100).await?;
    assert!(none.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_contact_create_rejects_empty_text() -> Result<()> {
    let db = setup_test_db().await?;
    let p = pet::create(&db, "Bob", 1, 5.0).await?;
    let res = contact::create(&db, p.id, "").await;
    assert!(matches!(res, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_deleting_pet_cascades_contacts() -> Result<()> {
    let db = setup_test_db().await?;
    let p = pet::create(&db, "Luna", 1, 20.0).await?;
    contact::create(&db, p.id, "whatsapp 11 98888-7777").await?;

    let removed = pet::delete_by_name(&db, "Luna").await?;
    assert_eq!(removed, 1);
    let orphans = contact::list_for_pet(&db, p.id).await?;
    assert!(orphans.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_lookup_tables_are_seeded() -> Result<()> {
    let db = setup_test_db().await?;

    let animals = animal_type::list_all(&db).await?;
    assert!(!animals.is_empty());
    assert_eq!(animals[0].id, 1);
    assert_eq!(animals[0].description, "Cachorro");

    let contacts = contact_type::list_all(&db).await?;
    assert!(!contacts.is_empty());
    assert_eq!(contacts[0].description, "Telefone");

    Ok(())
}
