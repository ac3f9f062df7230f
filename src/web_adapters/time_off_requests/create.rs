use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::time_off_request_adapter::TimeOffRequestAdapter,
    use_cases::{records::create_record, time_off_requests::TimeOffRequestCreateRequest},
    web_adapters::utils::{create_response, error_response},
};

#[tracing::instrument(name = "Creating a time-off request", skip(db))]
#[post("")]
pub async fn create_time_off_request_endpoint(
    db: Data<DbConn>,
    req: Json<TimeOffRequestCreateRequest>,
) -> HttpResponse {
    match create_record(req.into_inner(), TimeOffRequestAdapter::init(&db)).await {
        Ok(outcome) => create_response(outcome),
        Err(e) => error_response(e),
    }
}
