use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::time_off_request_adapter::TimeOffRequestAdapter,
    use_cases::{records::search_records, time_off_requests::TimeOffRequestSearchQuery},
    web_adapters::utils::{error_response, search_response},
};

#[tracing::instrument(name = "Searching time-off requests", skip(db))]
#[get("")]
pub async fn search_time_off_requests_endpoint(
    db: Data<DbConn>,
    query: Query<TimeOffRequestSearchQuery>,
) -> HttpResponse {
    match search_records(query.into_inner(), TimeOffRequestAdapter::init(&db)).await {
        Ok(outcome) => search_response(outcome),
        Err(e) => error_response(e),
    }
}
