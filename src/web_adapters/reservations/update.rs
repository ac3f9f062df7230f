use actix_web::{
    put,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::reservation_adapter::ReservationAdapter,
    use_cases::{records::update_record, reservations::ReservationUpdateRequest},
    web_adapters::utils::{error_response, message_response},
};

#[tracing::instrument(name = "Updating a reservation", skip(db))]
#[put("")]
pub async fn update_reservation_endpoint(
    db: Data<DbConn>,
    req: Json<ReservationUpdateRequest>,
) -> HttpResponse {
    match update_record(req.into_inner(), ReservationAdapter::init(&db)).await {
        Ok(message) => message_response(message),
        Err(e) => error_response(e),
    }
}
