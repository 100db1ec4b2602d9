use sea_orm::{entity::prelude::*, ColumnTrait, ConnectionTrait, QueryFilter, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::{animal_type, contact, errors};

/// First reference row seeded by the migrations. The create request carries
/// no type field, so new pets land on this type.
pub const DEFAULT_ANIMAL_TYPE_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub animal_type_id: i32,
    pub quantity: i32,
    pub value: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { AnimalType }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::AnimalType => Entity::belongs_to(animal_type::Entity)
                .from(Column::AnimalTypeId)
                .to(animal_type::Column::Id)
                .into(),
        }
    }
}

impl Related<animal_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::AnimalType.def() }
}

impl Related<contact::Entity> for Entity {
    fn to() -> RelationDef { contact::Relation::Pet.def().rev() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    quantity: i32,
    value: f64,
) -> Result<Model, errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    let am = ActiveModel {
        name: Set(name.to_string()),
        animal_type_id: Set(DEFAULT_ANIMAL_TYPE_ID),
        quantity: Set(quantity),
        value: Set(value),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => errors::ModelError::Conflict(
            "pet with the same name and type already exists".into(),
        ),
        _ => errors::ModelError::Db(e.to_string()),
    })
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Delete every pet matching `name`; returns the number of rows removed.
pub async fn delete_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::Name.eq(name))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
