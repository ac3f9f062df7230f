use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::reservation_adapter::ReservationAdapter,
    use_cases::{records::search_records, reservations::ReservationSearchQuery},
    web_adapters::utils::{error_response, search_response},
};

#[tracing::instrument(name = "Searching reservations", skip(db))]
#[get("")]
pub async fn search_reservations_endpoint(
    db: Data<DbConn>,
    query: Query<ReservationSearchQuery>,
) -> HttpResponse {
    match search_records(query.into_inner(), ReservationAdapter::init(&db)).await {
        Ok(outcome) => search_response(outcome),
        Err(e) => error_response(e),
    }
}
