use chrono::Utc;
use sea_orm::{entity::prelude::*, ColumnTrait, ConnectionTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{contact_type, errors, pet};

/// First reference row seeded by the migrations; contacts created through
/// the API carry no explicit type.
pub const DEFAULT_CONTACT_TYPE_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub text: String,
    pub pet_id: i32,
    pub contact_type_id: i32,
    pub inserted_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Pet, ContactType }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Pet => Entity::belongs_to(pet::Entity)
                .from(Column::PetId)
                .to(pet::Column::Id)
                .into(),
            Relation::ContactType => Entity::belongs_to(contact_type::Entity)
                .from(Column::ContactTypeId)
                .to(contact_type::Column::Id)
                .into(),
        }
    }
}

impl Related<pet::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pet.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    pet_id: i32,
    text: &str,
) -> Result<Model, errors::ModelError> {
    if text.trim().is_empty() {
        return Err(errors::ModelError::Validation("text required".into()));
    }
    let am = ActiveModel {
        text: Set(text.to_string()),
        pet_id: Set(pet_id),
        contact_type_id: Set(DEFAULT_CONTACT_TYPE_ID),
        inserted_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Contacts of one pet in insertion order.
pub async fn list_for_pet<C: ConnectionTrait>(db: &C, pet_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::PetId.eq(pet_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
