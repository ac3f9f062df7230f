use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::reservation_adapter::ReservationAdapter,
    use_cases::{records::create_record, reservations::ReservationCreateRequest},
    web_adapters::utils::{create_response, error_response},
};

#[tracing::instrument(name = "Creating a reservation", skip(db))]
#[post("")]
pub async fn create_reservation_endpoint(
    db: Data<DbConn>,
    req: Json<ReservationCreateRequest>,
) -> HttpResponse {
    match create_record(req.into_inner(), ReservationAdapter::init(&db)).await {
        Ok(outcome) => create_response(outcome),
        Err(e) => error_response(e),
    }
}
