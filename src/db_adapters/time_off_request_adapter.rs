use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DbConn, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Select, Set,
};
use serde::Serialize;
use uuid::Uuid;

use crate::entities::time_off_request::{ActiveModel, Column, Entity, Model, SCHEMA_VERSION};

use super::{contains_ignore_case, FieldPatch, RecordAdapter, RecordMutation, RecordQuery};

#[derive(Clone)]
pub struct TimeOffRequestAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> TimeOffRequestAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

/// `start_date` and `end_date` bound a window the requests must lie inside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeOffRequestFilters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub name: Option<String>,
    pub include_deleted: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeOffRequest {
    pub start_date: String,
    pub end_date: String,
    pub name: String,
    pub details: Option<String>,
    pub status: String,
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeOffRequestPatch {
    pub start_date: FieldPatch<String>,
    pub end_date: FieldPatch<String>,
    pub name: FieldPatch<String>,
    pub details: FieldPatch<String>,
    pub status: FieldPatch<String>,
    pub deleted: FieldPatch<bool>,
}

impl TimeOffRequestPatch {
    pub fn into_active_model(self, id: Uuid) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Unchanged(id),
            start_date: self.start_date.into_required_value(),
            end_date: self.end_date.into_required_value(),
            name: self.name.into_required_value(),
            details: self.details.into_nullable_value(),
            status: self.status.into_required_value(),
            deleted: self.deleted.into_required_value(),
            ..Default::default()
        }
    }
}

impl RecordAdapter for TimeOffRequestAdapter<'_> {
    type Record = Model;
    type Filters = TimeOffRequestFilters;
    type NewRecord = NewTimeOffRequest;
    type Patch = TimeOffRequestPatch;

    const NAME: &'static str = "time-off request";
    const PLURAL: &'static str = "time-off requests";
    const DUPLICATE_MESSAGE: &'static str =
        "found the following time-off requests with the same name in the specified date range";
    const SOFT_DELETABLE: bool = true;

    fn search_condition(filters: &TimeOffRequestFilters) -> Condition {
        Condition::all()
            .add_option(
                filters
                    .start_date
                    .clone()
                    .map(|start_date| Column::StartDate.gte(start_date)),
            )
            .add_option(
                filters
                    .end_date
                    .clone()
                    .map(|end_date| Column::EndDate.lte(end_date)),
            )
            .add_option(
                filters
                    .name
                    .as_deref()
                    .map(|name| contains_ignore_case(Column::Name, name)),
            )
            .add_option((!filters.include_deleted).then(|| Column::Deleted.eq(false)))
    }

    fn duplicate_condition(record: &NewTimeOffRequest) -> Condition {
        Condition::all()
            .add(Column::StartDate.lte(record.end_date.clone()))
            .add(Column::EndDate.gte(record.start_date.clone()))
            .add(Column::Name.eq(record.name.clone()))
            .add(Column::Deleted.eq(false))
    }
}

impl RecordQuery for TimeOffRequestAdapter<'_> {
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

impl RecordMutation for TimeOffRequestAdapter<'_> {
    async fn create(self, record: NewTimeOffRequest) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            schema_version: Set(SCHEMA_VERSION),
            start_date: Set(record.start_date),
            end_date: Set(record.end_date),
            name: Set(record.name),
            details: Set(record.details),
            status: Set(record.status),
            deleted: Set(record.deleted),
        }
        .insert(self.db)
        .await
    }

    async fn partial_update(self, id: Uuid, patch: TimeOffRequestPatch) -> Result<u64, DbErr> {
        let time_off_request = patch.into_active_model(id);
        if !time_off_request.is_changed() {
            return Ok(0);
        }
        Entity::update_many()
            .set(time_off_request)
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

    async fn soft_delete_many(self, ids: Vec<Uuid>) -> Result<u64, DbErr> {
        Entity::update_many()
            .col_expr(Column::Deleted, Expr::value(true))
            .filter(Column::Id.is_in(ids))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }
}
