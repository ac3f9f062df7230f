use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::tag_adapter::TagAdapter,
    use_cases::{records::create_record, tags::TagCreateRequest},
    web_adapters::utils::{create_response, error_response},
};

#[tracing::instrument(name = "Creating a tag", skip(db))]
#[post("")]
pub async fn create_tag_endpoint(
    db: Data<DbConn>,
    req: Json<TagCreateRequest>,
) -> HttpResponse {
    match create_record(req.into_inner(), TagAdapter::init(&db)).await {
        Ok(outcome) => create_response(outcome),
        Err(e) => error_response(e),
    }
}
