use serde::Deserialize;
use uuid::Uuid;

use crate::db_adapters::{
    reservation_adapter::{NewReservation, ReservationFilters, ReservationPatch},
    ExactOrRange, FieldPatch,
};

use super::{
    dedup_ids, error_required, non_empty, parse_flag, parse_id,
    records::{CreateParams, SearchParams, UpdateParams},
    required_text, target_id, UseCaseError,
};

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSearchQuery {
    pub id: Option<String>,
    /// Older name for `startDate`, used only when `startDate` is absent.
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub seats: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    /// Comma separated tag ids.
    pub tags: Option<String>,
    pub include_deleted: Option<String>,
}

impl TryFrom<ReservationSearchQuery> for SearchParams<ReservationFilters> {
    type Error = UseCaseError;

    fn try_from(query: ReservationSearchQuery) -> Result<Self, Self::Error> {
        if let Some(id) = non_empty(query.id) {
            return parse_id(&id).map(SearchParams::ById);
        }
        Ok(SearchParams::Filtered(ReservationFilters {
            date: ExactOrRange::from_bounds(
                non_empty(query.start_date).or(non_empty(query.date)),
                non_empty(query.end_date),
            ),
            time: ExactOrRange::from_bounds(non_empty(query.start_time), non_empty(query.end_time)),
            seats: non_empty(query.seats)
                .map(|seats| {
                    seats.parse::<i32>().map_err(|_| {
                        UseCaseError::BadRequest(format!("seats must be an integer, got {}", seats))
                    })
                })
                .transpose()?,
            name: non_empty(query.name),
            phone_number: non_empty(query.phone_number),
            tag_ids: parse_tag_list(query.tags)?,
            include_deleted: parse_flag(query.include_deleted, "includeDeleted")?,
        }))
    }
}

fn parse_tag_list(tags: Option<String>) -> Result<Vec<Uuid>, UseCaseError> {
    match non_empty(tags) {
        None => Ok(vec![]),
        Some(tags) => tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(parse_id)
            .collect::<Result<Vec<_>, _>>()
            .map(dedup_ids),
    }
}

fn validate_seats(seats: i32) -> Result<i32, UseCaseError> {
    if seats < 1 {
        return Err(UseCaseError::BadRequest(
            "seats must be at least 1".to_string(),
        ));
    }
    Ok(seats)
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreateRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub seats: Option<i32>,
    pub phone_number: Option<String>,
    pub name: Option<String>,
    /// Clients still on the 1.1 schema send these instead of `name`.
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub tags: Option<Vec<Uuid>>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub allow_sms: Option<bool>,
    pub ignore_duplicates: Option<bool>,
}

impl ReservationCreateRequest {
    fn full_name(&mut self) -> Result<String, UseCaseError> {
        if let Some(name) = non_empty(self.name.take()) {
            return Ok(name.to_lowercase());
        }
        let name = match (non_empty(self.first_name.take()), non_empty(self.last_name.take())) {
            (Some(first_name), Some(last_name)) => format!("{} {}", first_name, last_name),
            (Some(name), None) | (None, Some(name)) => name,
            (None, None) => return Err(error_required("name")),
        };
        Ok(name.to_lowercase())
    }
}

impl TryFrom<ReservationCreateRequest> for CreateParams<NewReservation> {
    type Error = UseCaseError;

    fn try_from(mut request: ReservationCreateRequest) -> Result<Self, Self::Error> {
        let name = request.full_name()?;
        let seats = request.seats.ok_or_else(|| error_required("seats"))?;
        Ok(CreateParams {
            record: NewReservation {
                date: required_text(request.date, "date")?,
                time: required_text(request.time, "time")?,
                seats: validate_seats(seats)?,
                phone_number: required_text(request.phone_number, "phoneNumber")?,
                name,
                tags: dedup_ids(request.tags.unwrap_or_default()),
                notes: non_empty(request.notes),
                status: non_empty(request.status).map(|status| status.to_lowercase()),
                allow_sms: request.allow_sms,
            },
            ignore_duplicates: request.ignore_duplicates.unwrap_or(false),
        })
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdateRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub date: FieldPatch<String>,
    #[serde(default)]
    pub time: FieldPatch<String>,
    #[serde(default)]
    pub seats: FieldPatch<i32>,
    #[serde(default)]
    pub phone_number: FieldPatch<String>,
    #[serde(default)]
    pub name: FieldPatch<String>,
    #[serde(default)]
    pub notes: FieldPatch<String>,
    #[serde(default)]
    pub status: FieldPatch<String>,
    #[serde(default)]
    pub deleted: FieldPatch<bool>,
    #[serde(default)]
    pub allow_sms: FieldPatch<bool>,
    #[serde(default)]
    pub tags: FieldPatch<Vec<Uuid>>,
}

impl TryFrom<ReservationUpdateRequest> for UpdateParams<ReservationPatch> {
    type Error = UseCaseError;

    fn try_from(request: ReservationUpdateRequest) -> Result<Self, Self::Error> {
        Ok(UpdateParams {
            id: target_id(request.id, "reservation")?,
            patch: ReservationPatch {
                date: request.date.trimmed(),
                time: request.time.trimmed(),
                seats: request.seats.ignore_clear().try_map(validate_seats)?,
                phone_number: request.phone_number.trimmed(),
                name: request.name.trimmed().map(|name| name.to_lowercase()),
                notes: request.notes.trimmed(),
                status: request.status.trimmed().map(|status| status.to_lowercase()),
                deleted: request.deleted,
                allow_sms: request.allow_sms,
                tags: request.tags.map(dedup_ids),
            },
        })
    }
}
