use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 1.1: firstName & lastName lowercased. 1.2: merged into `name`.
pub const SCHEMA_VERSION: f64 = 1.2;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub schema_version: f64,
    #[sea_orm(column_type = "Text")]
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub time: String,
    pub seats: i32,
    #[sea_orm(column_type = "Text")]
    pub phone_number: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub status: Option<String>,
    pub deleted: bool,
    pub allow_sms: Option<bool>,
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
