use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DbConn, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, Set,
};
use serde::Serialize;
use uuid::Uuid;

use crate::entities::tag::{ActiveModel, Column, Entity, Model, SCHEMA_VERSION};

use super::{contains_ignore_case, FieldPatch, RecordAdapter, RecordMutation, RecordQuery};

#[derive(Clone)]
pub struct TagAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> TagAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagFilters {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewTag {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagPatch {
    pub name: FieldPatch<String>,
    pub color: FieldPatch<String>,
}

impl TagPatch {
    pub fn into_active_model(self, id: Uuid) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: self.name.into_required_value(),
            color: self.color.into_required_value(),
            ..Default::default()
        }
    }
}

impl RecordAdapter for TagAdapter<'_> {
    type Record = Model;
    type Filters = TagFilters;
    type NewRecord = NewTag;
    type Patch = TagPatch;

    const NAME: &'static str = "tag";
    const PLURAL: &'static str = "tags";
    const DUPLICATE_MESSAGE: &'static str =
        "found the following tags with the same name";
    const SOFT_DELETABLE: bool = false;

    fn search_condition(filters: &TagFilters) -> Condition {
        Condition::all()
            .add_option(
                filters
                    .name
                    .as_deref()
                    .map(|name| contains_ignore_case(Column::Name, name)),
            )
            .add_option(
                filters
                    .color
                    .as_deref()
                    .map(|color| contains_ignore_case(Column::Color, color)),
            )
    }

    fn duplicate_condition(record: &NewTag) -> Condition {
        Condition::all().add(Column::Name.eq(record.name.clone()))
    }
}

impl RecordQuery for TagAdapter<'_> {
    fn filter(mut self, condition: Condition) -> Self {
        self.query = self.query.filter(condition);
        self
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.order_by_asc(Column::Id).all(self.db).await
    }

    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }
}

impl RecordMutation for TagAdapter<'_> {
    async fn create(self, record: NewTag) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            schema_version: Set(SCHEMA_VERSION),
            name: Set(record.name),
            color: Set(record.color),
        }
        .insert(self.db)
        .await
    }

    async fn partial_update(self, id: Uuid, patch: TagPatch) -> Result<u64, DbErr> {
        let tag = patch.into_active_model(id);
        if !tag.is_changed() {
            return Ok(0);
        }
        Entity::update_many()
            .set(tag)
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }

    async fn delete_many(self, ids: Vec<Uuid>) -> Result<u64, DbErr> {
        Entity::delete_many()
            .filter(Column::Id.is_in(ids))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }

    /// Tags have no deleted flag.
    async fn soft_delete_many(self, ids: Vec<Uuid>) -> Result<u64, DbErr> {
        self.delete_many(ids).await
    }
}
