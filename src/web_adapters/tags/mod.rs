mod create;
mod delete;
mod search;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn tag_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/tags")
            .service(search::search_tags_endpoint)
            .service(create::create_tag_endpoint)
            .service(update::update_tag_endpoint)
            .service(delete::delete_tags_endpoint),
    );
}
