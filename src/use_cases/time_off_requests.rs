use serde::Deserialize;

use crate::{
    db_adapters::{
        time_off_request_adapter::{NewTimeOffRequest, TimeOffRequestFilters, TimeOffRequestPatch},
        FieldPatch,
    },
    entities::time_off_request::DEFAULT_STATUS,
};

use super::{
    non_empty, parse_flag, parse_id,
    records::{CreateParams, SearchParams, UpdateParams},
    required_text, target_id, UseCaseError,
};

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequestSearchQuery {
    pub id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub name: Option<String>,
    pub include_deleted: Option<String>,
}

impl TryFrom<TimeOffRequestSearchQuery> for SearchParams<TimeOffRequestFilters> {
    type Error = UseCaseError;

    fn try_from(query: TimeOffRequestSearchQuery) -> Result<Self, Self::Error> {
        if let Some(id) = non_empty(query.id) {
            return parse_id(&id).map(SearchParams::ById);
        }
        Ok(SearchParams::Filtered(TimeOffRequestFilters {
            start_date: non_empty(query.start_date),
            end_date: non_empty(query.end_date),
            name: non_empty(query.name),
            include_deleted: parse_flag(query.include_deleted, "includeDeleted")?,
        }))
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequestCreateRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub name: Option<String>,
    pub details: Option<String>,
    pub status: Option<String>,
    pub deleted: Option<bool>,
    pub ignore_duplicates: Option<bool>,
}

impl TryFrom<TimeOffRequestCreateRequest> for CreateParams<NewTimeOffRequest> {
    type Error = UseCaseError;

    fn try_from(request: TimeOffRequestCreateRequest) -> Result<Self, Self::Error> {
        Ok(CreateParams {
            record: NewTimeOffRequest {
                start_date: required_text(request.start_date, "startDate")?,
                end_date: required_text(request.end_date, "endDate")?,
                name: required_text(request.name, "name")?.to_lowercase(),
                details: non_empty(request.details),
                status: non_empty(request.status)
                    .map(|status| status.to_lowercase())
                    .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
                deleted: request.deleted.unwrap_or(false),
            },
            ignore_duplicates: request.ignore_duplicates.unwrap_or(false),
        })
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequestUpdateRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub start_date: FieldPatch<String>,
    #[serde(default)]
    pub end_date: FieldPatch<String>,
    #[serde(default)]
    pub name: FieldPatch<String>,
    #[serde(default)]
    pub details: FieldPatch<String>,
    #[serde(default)]
    pub status: FieldPatch<String>,
    #[serde(default)]
    pub deleted: FieldPatch<bool>,
}

impl TryFrom<TimeOffRequestUpdateRequest> for UpdateParams<TimeOffRequestPatch> {
    type Error = UseCaseError;

    fn try_from(request: TimeOffRequestUpdateRequest) -> Result<Self, Self::Error> {
        Ok(UpdateParams {
            id: target_id(request.id, "time-off request")?,
            patch: TimeOffRequestPatch {
                start_date: request.start_date.trimmed(),
                end_date: request.end_date.trimmed(),
                name: request.name.trimmed().map(|name| name.to_lowercase()),
                details: request.details.trimmed(),
                status: request.status.trimmed().map(|status| status.to_lowercase()),
                deleted: request.deleted,
            },
        })
    }
}
