mod create;
mod delete;
mod search;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn reservation_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/reservations")
            .service(search::search_reservations_endpoint)
            .service(create::create_reservation_endpoint)
            .service(update::update_reservation_endpoint)
            .service(delete::delete_reservations_endpoint),
    );
}
