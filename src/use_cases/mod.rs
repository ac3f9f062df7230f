pub mod records;
pub mod reservations;
pub mod tags;
pub mod time_off_requests;

use sea_orm::DbErr;
use uuid::Uuid;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    BadRequest(String),          // 400
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: DbErr) -> UseCaseError {
    UseCaseError::InternalServerError(e.to_string())
}

pub(crate) fn error_required(field: &str) -> UseCaseError {
    UseCaseError::BadRequest(format!("{} is required", field))
}

/// Trims the value; blank values count as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn required_text(value: Option<String>, field: &str) -> Result<String, UseCaseError> {
    non_empty(value).ok_or_else(|| error_required(field))
}

pub(crate) fn parse_id(value: &str) -> Result<Uuid, UseCaseError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| UseCaseError::BadRequest(format!("{} is not a valid id", value)))
}

/// The id an update targets; missing or malformed ids are rejected before any store access.
pub(crate) fn target_id(value: Option<String>, record_name: &str) -> Result<Uuid, UseCaseError> {
    match non_empty(value) {
        Some(id) => parse_id(&id),
        None => Err(UseCaseError::BadRequest(format!(
            "{} id was not specified in the request",
            record_name
        ))),
    }
}

/// `"true"` and `"false"` in either case; blank counts as false.
pub(crate) fn parse_flag(value: Option<String>, field: &str) -> Result<bool, UseCaseError> {
    match non_empty(value) {
        None => Ok(false),
        Some(flag) => match flag.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(UseCaseError::BadRequest(format!(
                "{} must be either true or false",
                field
            ))),
        },
    }
}

/// Drops repeated ids, keeping the first occurrence.
pub(crate) fn dedup_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
