use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::tag_adapter::TagAdapter,
    use_cases::{records::search_records, tags::TagSearchQuery},
    web_adapters::utils::{error_response, search_response},
};

#[tracing::instrument(name = "Searching tags", skip(db))]
#[get("")]
pub async fn search_tags_endpoint(
    db: Data<DbConn>,
    query: Query<TagSearchQuery>,
) -> HttpResponse {
    match search_records(query.into_inner(), TagAdapter::init(&db)).await {
        Ok(outcome) => search_response(outcome),
        Err(e) => error_response(e),
    }
}
