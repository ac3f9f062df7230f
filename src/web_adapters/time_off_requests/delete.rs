use actix_web::{
    delete,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::time_off_request_adapter::TimeOffRequestAdapter,
    use_cases::records::{delete_records, DeleteRequest},
    web_adapters::utils::{error_response, message_response},
};

#[tracing::instrument(name = "Deleting time-off requests", skip(db))]
#[delete("")]
pub async fn delete_time_off_requests_endpoint(
    db: Data<DbConn>,
    req: Json<DeleteRequest>,
) -> HttpResponse {
    match delete_records(req.into_inner(), TimeOffRequestAdapter::init(&db)).await {
        Ok(message) => message_response(message),
        Err(e) => error_response(e),
    }
}
