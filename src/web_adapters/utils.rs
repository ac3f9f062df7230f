use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    web::{JsonConfig, QueryConfig},
    HttpRequest, HttpResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::use_cases::{
    records::{CreateOutcome, SearchOutcome},
    UseCaseError,
};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Successful,
    NotFound,
    FoundDuplicates,
    ErrorOccurred,
}

#[derive(Serialize)]
struct MessageResponse {
    result: ResultKind,
    message: String,
}

#[derive(Serialize)]
struct RecordsResponse<R> {
    result: ResultKind,
    records: Vec<R>,
    message: String,
}

#[derive(Serialize)]
struct RecordResponse<R> {
    result: ResultKind,
    record: R,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DuplicatesResponse<N, R> {
    result: ResultKind,
    record: N,
    existing_records: Vec<R>,
    message: String,
}

fn error_body(message: String) -> MessageResponse {
    MessageResponse {
        result: ResultKind::ErrorOccurred,
        message,
    }
}

pub fn search_response<R: Serialize>(outcome: SearchOutcome<R>) -> HttpResponse {
    match outcome {
        SearchOutcome::Found { records, message } => HttpResponse::Ok().json(RecordsResponse {
            result: ResultKind::Successful,
            records,
            message,
        }),
        SearchOutcome::NotFound { message } => HttpResponse::NotFound().json(MessageResponse {
            result: ResultKind::NotFound,
            message,
        }),
    }
}

pub fn create_response<N: Serialize, R: Serialize>(outcome: CreateOutcome<N, R>) -> HttpResponse {
    match outcome {
        CreateOutcome::Created(record) => HttpResponse::Created().json(RecordResponse {
            result: ResultKind::Successful,
            record,
        }),
        CreateOutcome::FoundDuplicates {
            candidate,
            existing,
            message,
        } => HttpResponse::Conflict().json(DuplicatesResponse {
            result: ResultKind::FoundDuplicates,
            record: candidate,
            existing_records: existing,
            message,
        }),
    }
}

pub fn message_response(message: String) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        result: ResultKind::Successful,
        message,
    })
}

/// Store failures are logged before the message is passed on to the client.
pub fn error_response(e: UseCaseError) -> HttpResponse {
    match e {
        UseCaseError::BadRequest(message) => HttpResponse::BadRequest().json(error_body(message)),
        UseCaseError::InternalServerError(message) => {
            event!(target: "backend", Level::ERROR, "{}", message);
            HttpResponse::InternalServerError().json(error_body(message))
        }
    }
}

pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let response = HttpResponse::BadRequest().json(error_body(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

pub fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        let response = HttpResponse::BadRequest().json(error_body(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}
