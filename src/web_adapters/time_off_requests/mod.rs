mod create;
mod delete;
mod search;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn time_off_request_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/time-off-requests")
            .service(search::search_time_off_requests_endpoint)
            .service(create::create_time_off_request_endpoint)
            .service(update::update_time_off_request_endpoint)
            .service(delete::delete_time_off_requests_endpoint),
    );
}
