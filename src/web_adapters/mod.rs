mod health;
pub mod middlewares;
mod reservations;
mod tags;
mod time_off_requests;
mod utils;

use actix_web::web::ServiceConfig;

pub use health::health_check;
pub use reservations::reservation_routes;
pub use tags::tag_routes;
pub use time_off_requests::time_off_request_routes;
pub use utils::{json_config, query_config, ResultKind};

pub fn app_routes(cfg: &mut ServiceConfig) {
    cfg.service(health_check)
        .configure(reservation_routes)
        .configure(tag_routes)
        .configure(time_off_request_routes);
}
