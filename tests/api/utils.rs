use actix_http::Request;
use actix_web::{
    body::{BoxBody, EitherBody},
    dev::{Service, ServiceResponse},
    test,
    web::Data,
    App,
};
use reservation_backend::{
    settings::ApiKeySettings,
    test_utils,
    web_adapters::{app_routes, json_config, middlewares::RequireApiKey, query_config},
};
use sea_orm::{DbConn, DbErr};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_KEY: &str = "test-key";

/// The same middleware, extractor configs and routes as `startup::run`, over an in-memory database.
pub async fn init_app() -> Result<
    (
        impl Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = actix_web::Error>,
        DbConn,
    ),
    DbErr,
> {
    let db = test_utils::init_db().await?;
    let app = test::init_service(
        App::new()
            .wrap(RequireApiKey::new(ApiKeySettings {
                header_name: API_KEY_HEADER.to_string(),
                key: API_KEY.to_string(),
                rejection_code: 401,
            }))
            .app_data(Data::new(db.clone()))
            .app_data(json_config())
            .app_data(query_config())
            .configure(app_routes),
    )
    .await;
    Ok((app, db))
}

pub fn get(uri: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(uri)
        .insert_header((API_KEY_HEADER, API_KEY))
}

pub fn post(uri: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((API_KEY_HEADER, API_KEY))
}

pub fn put(uri: &str) -> test::TestRequest {
    test::TestRequest::put()
        .uri(uri)
        .insert_header((API_KEY_HEADER, API_KEY))
}

pub fn delete(uri: &str) -> test::TestRequest {
    test::TestRequest::delete()
        .uri(uri)
        .insert_header((API_KEY_HEADER, API_KEY))
}

/// Ids of the `records` array of a search response, sorted.
pub fn record_ids(body: &serde_json::Value) -> Vec<String> {
    let mut ids = body["records"]
        .as_array()
        .map(|records| {
            records
                .iter()
                .filter_map(|record| record["id"].as_str().map(str::to_string))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    ids.sort();
    ids
}

pub fn sorted(ids: &[uuid::Uuid]) -> Vec<String> {
    let mut ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
    ids.sort();
    ids
}
