use actix_web::{
    put,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::tag_adapter::TagAdapter,
    use_cases::{records::update_record, tags::TagUpdateRequest},
    web_adapters::utils::{error_response, message_response},
};

#[tracing::instrument(name = "Updating a tag", skip(db))]
#[put("")]
pub async fn update_tag_endpoint(
    db: Data<DbConn>,
    req: Json<TagUpdateRequest>,
) -> HttpResponse {
    match update_record(req.into_inner(), TagAdapter::init(&db)).await {
        Ok(message) => message_response(message),
        Err(e) => error_response(e),
    }
}
