use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbConn, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Select, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use crate::entities::{
    reservation::{ActiveModel, Column, Entity, Model, SCHEMA_VERSION},
    reservations_tags,
};

use super::{
    contains_ignore_case, ExactOrRange, FieldPatch, RecordAdapter, RecordMutation, RecordQuery,
};

#[derive(Clone)]
pub struct ReservationAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> ReservationAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationWithTags {
    #[serde(flatten)]
    pub reservation: Model,
    pub tags: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationFilters {
    pub date: Option<ExactOrRange<String>>,
    pub time: Option<ExactOrRange<String>>,
    pub seats: Option<i32>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub tag_ids: Vec<Uuid>,
    pub include_deleted: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub date: String,
    pub time: String,
    pub seats: i32,
    pub phone_number: String,
    pub name: String,
    pub tags: Vec<Uuid>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub allow_sms: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationPatch {
    pub date: FieldPatch<String>,
    pub time: FieldPatch<String>,
    pub seats: FieldPatch<i32>,
    pub phone_number: FieldPatch<String>,
    pub name: FieldPatch<String>,
    pub notes: FieldPatch<String>,
    pub status: FieldPatch<String>,
    pub deleted: FieldPatch<bool>,
    pub allow_sms: FieldPatch<bool>,
    pub tags: FieldPatch<Vec<Uuid>>,
}

impl ReservationPatch {
    /// Columns without a patch stay `NotSet`. Tag links live in their own table and are not part of it.
    pub fn into_active_model(self, id: Uuid) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Unchanged(id),
            date: self.date.into_required_value(),
            time: self.time.into_required_value(),
            seats: self.seats.into_required_value(),
            phone_number: self.phone_number.into_required_value(),
            name: self.name.into_required_value(),
            notes: self.notes.into_nullable_value(),
            status: self.status.ignore_clear().into_nullable_value(),
            deleted: self.deleted.into_required_value(),
            allow_sms: self.allow_sms.into_nullable_value(),
            ..Default::default()
        }
    }
}

impl RecordAdapter for ReservationAdapter<'_> {
    type Record = ReservationWithTags;
    type Filters = ReservationFilters;
    type NewRecord = NewReservation;
    type Patch = ReservationPatch;

    const NAME: &'static str = "reservation";
    const PLURAL: &'static str = "reservations";
    const DUPLICATE_MESSAGE: &'static str =
        "found the following reservations on the same date with either the same phone number or name";
    const SOFT_DELETABLE: bool = true;

    fn search_condition(filters: &ReservationFilters) -> Condition {
        Condition::all()
            .add_option(filters.date.clone().map(|date| date.condition(Column::Date)))
            .add_option(filters.time.clone().map(|time| time.condition(Column::Time)))
            .add_option(filters.seats.map(|seats| Column::Seats.eq(seats)))
            .add_option(
                filters
                    .name
                    .as_deref()
                    .map(|name| contains_ignore_case(Column::Name, name)),
            )
            .add_option(
                filters
                    .phone_number
                    .clone()
                    .map(|phone_number| Column::PhoneNumber.eq(phone_number)),
            )
            .add_option(has_all_tags(&filters.tag_ids))
            .add_option((!filters.include_deleted).then(|| Column::Deleted.eq(false)))
    }

    fn duplicate_condition(record: &NewReservation) -> Condition {
        Condition::all()
            .add(Column::Date.eq(record.date.clone()))
            .add(
                Condition::any()
                    .add(Column::PhoneNumber.eq(record.phone_number.clone()))
                    .add(Column::Name.eq(record.name.clone())),
            )
            .add(Column::Deleted.eq(false))
    }
}

/// One sub-select per tag, so a record must be linked to every one of them.
fn has_all_tags(tag_ids: &[Uuid]) -> Option<Condition> {
    if tag_ids.is_empty() {
        return None;
    }
    Some(tag_ids.iter().fold(Condition::all(), |condition, tag_id| {
        condition.add(
            Column::Id.in_subquery(
                Query::select()
                    .column(reservations_tags::Column::ReservationId)
                    .from(reservations_tags::Entity)
                    .and_where(reservations_tags::Column::TagId.eq(*tag_id))
                    .to_owned(),
            ),
        )
    }))
}

impl RecordQuery for ReservationAdapter<'_> {
    fn filter(mut self, condition: Condition) -> Self {
        self.query = self.query.filter(condition);
        self
    }

    async fn get_all(self) -> Result<Vec<ReservationWithTags>, DbErr> {
        let reservations = self.query.order_by_asc(Column::Id).all(self.db).await?;
        with_tags(self.db, reservations).await
    }

    async fn get_by_id(self, id: Uuid) -> Result<Option<ReservationWithTags>, DbErr> {
        match self.query.filter(Column::Id.eq(id)).one(self.db).await? {
            Some(reservation) => Ok(with_tags(self.db, vec![reservation]).await?.pop()),
            None => Ok(None),
        }
    }
}

async fn with_tags(
    db: &DbConn,
    reservations: Vec<Model>,
) -> Result<Vec<ReservationWithTags>, DbErr> {
    if reservations.is_empty() {
        return Ok(vec![]);
    }
    let links = reservations_tags::Entity::find()
        .filter(
            reservations_tags::Column::ReservationId
                .is_in(reservations.iter().map(|reservation| reservation.id)),
        )
        .order_by_asc(reservations_tags::Column::TagId)
        .all(db)
        .await?;

    Ok(reservations
        .into_iter()
        .map(|reservation| {
            let tags = links
                .iter()
                .filter(|link| link.reservation_id == reservation.id)
                .map(|link| link.tag_id)
                .collect();
            ReservationWithTags { reservation, tags }
        })
        .collect())
}

async fn link_tags<C: ConnectionTrait>(
    db: &C,
    reservation_id: Uuid,
    tag_ids: &[Uuid],
) -> Result<(), DbErr> {
    if tag_ids.is_empty() {
        return Ok(());
    }
    let links = tag_ids.iter().map(|tag_id| reservations_tags::ActiveModel {
        reservation_id: Set(reservation_id),
        tag_id: Set(*tag_id),
    });
    reservations_tags::Entity::insert_many(links)
        .exec_without_returning(db)
        .await
        .map(|_| ())
}

async fn unlink_all_tags<C: ConnectionTrait>(db: &C, reservation_id: Uuid) -> Result<(), DbErr> {
    reservations_tags::Entity::delete_many()
        .filter(reservations_tags::Column::ReservationId.eq(reservation_id))
        .exec(db)
        .await
        .map(|_| ())
}

impl RecordMutation for ReservationAdapter<'_> {
    async fn create(self, record: NewReservation) -> Result<ReservationWithTags, DbErr> {
        let txn = self.db.begin().await?;
        let reservation = ActiveModel {
            id: Set(Uuid::now_v7()),
            schema_version: Set(SCHEMA_VERSION),
            date: Set(record.date),
            time: Set(record.time),
            seats: Set(record.seats),
            phone_number: Set(record.phone_number),
            name: Set(record.name),
            notes: Set(record.notes),
            status: Set(record.status),
            deleted: Set(false),
            allow_sms: Set(record.allow_sms),
        }
        .insert(&txn)
        .await?;
        link_tags(&txn, reservation.id, &record.tags).await?;
        txn.commit().await?;

        Ok(ReservationWithTags {
            reservation,
            tags: record.tags,
        })
    }

    async fn partial_update(self, id: Uuid, mut patch: ReservationPatch) -> Result<u64, DbErr> {
        let tags = std::mem::take(&mut patch.tags);
        let reservation = patch.into_active_model(id);

        let txn = self.db.begin().await?;
        let mut rows_affected = 0;
        if reservation.is_changed() {
            rows_affected = Entity::update_many()
                .set(reservation)
                .filter(Column::Id.eq(id))
                .exec(&txn)
                .await?
                .rows_affected;
        }
        let tag_ids = match tags {
            FieldPatch::Unchanged => None,
            FieldPatch::Set(tag_ids) => Some(tag_ids),
            FieldPatch::Clear => Some(vec![]),
        };
        if let Some(tag_ids) = tag_ids {
            if Entity::find_by_id(id).one(&txn).await?.is_some() {
                unlink_all_tags(&txn, id).await?;
                link_tags(&txn, id, &tag_ids).await?;
                rows_affected = rows_affected.max(1);
            }
        }
        txn.commit().await?;
        Ok(rows_affected)
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
