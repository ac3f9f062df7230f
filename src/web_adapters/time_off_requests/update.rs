use actix_web::{
    put,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::time_off_request_adapter::TimeOffRequestAdapter,
    use_cases::{records::update_record, time_off_requests::TimeOffRequestUpdateRequest},
    web_adapters::utils::{error_response, message_response},
};

#[tracing::instrument(name = "Updating a time-off request", skip(db))]
#[put("")]
pub async fn update_time_off_request_endpoint(
    db: Data<DbConn>,
    req: Json<TimeOffRequestUpdateRequest>,
) -> HttpResponse {
    match update_record(req.into_inner(), TimeOffRequestAdapter::init(&db)).await {
        Ok(message) => message_response(message),
        Err(e) => error_response(e),
    }
}
