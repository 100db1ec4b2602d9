//! Presentation layer: internal records to wire payloads.
//!
//! Wire field names stay Portuguese, matching the published contract;
//! everything internal is English, bridged here by serde renames.
use serde::Serialize;
use utoipa::ToSchema;

use models::{animal_type, contact, contact_type, pet};
use service::pet_service::PetWithContacts;

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactView {
    pub id: i32,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "data_insercao")]
    pub inserted_at: String,
}

impl From<contact::Model> for ContactView {
    fn from(c: contact::Model) -> Self {
        Self { id: c.id, text: c.text, inserted_at: c.inserted_at.to_rfc3339() }
    }
}

/// Full pet representation, contacts included.
#[derive(Debug, Serialize, ToSchema)]
pub struct PetView {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub animal_type: i32,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "total_contatos")]
    pub total_contacts: usize,
    #[serde(rename = "contatos")]
    pub contacts: Vec<ContactView>,
}

impl PetView {
    pub fn from_parts(p: pet::Model, contacts: Vec<contact::Model>) -> Self {
        Self {
            id: p.id,
            name: p.name,
            animal_type: p.animal_type_id,
            quantity: p.quantity,
            value: p.value,
            total_contacts: contacts.len(),
            contacts: contacts.into_iter().map(ContactView::from).collect(),
        }
    }
}

impl From<PetWithContacts> for PetView {
    fn from((p, contacts): PetWithContacts) -> Self {
        Self::from_parts(p, contacts)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PetListView {
    pub pets: Vec<PetView>,
}

/// Both lookup tables share one wire shape.
#[derive(Debug, Serialize, ToSchema)]
pub struct TypeView {
    pub id: i32,
    #[serde(rename = "descricao")]
    pub description: String,
}

impl From<animal_type::Model> for TypeView {
    fn from(t: animal_type::Model) -> Self {
        Self { id: t.id, description: t.description }
    }
}

impl From<contact_type::Model> for TypeView {
    fn from(t: contact_type::Model) -> Self {
        Self { id: t.id, description: t.description }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TypeListView {
    #[serde(rename = "tipos")]
    pub types: Vec<TypeView>,
}

/// Delete confirmation; the echoed identifier is the pet name, not a
/// numeric id.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteView {
    pub message: String,
    pub id: String,
}
