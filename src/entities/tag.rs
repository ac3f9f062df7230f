use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub schema_version: f64,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservations_tags::Entity")]
    ReservationsTags,
}

impl Related<super::reservations_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationsTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
