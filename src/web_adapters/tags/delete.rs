use actix_web::{
    delete,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::tag_adapter::TagAdapter,
    use_cases::records::{delete_records, DeleteRequest},
    web_adapters::utils::{error_response, message_response},
};

#[tracing::instrument(name = "Deleting tags", skip(db))]
#[delete("")]
pub async fn delete_tags_endpoint(
    db: Data<DbConn>,
    req: Json<DeleteRequest>,
) -> HttpResponse {
    match delete_records(req.into_inner(), TagAdapter::init(&db)).await {
        Ok(message) => message_response(message),
        Err(e) => error_response(e),
    }
}
