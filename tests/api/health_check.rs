use actix_web::{http, test};
use sea_orm::DbErr;

use crate::utils::{self, init_app};

#[actix_web::test]
async fn ok_with_api_key() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = utils::get("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), http::StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn rejected_without_api_key() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), http::StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
    Ok(())
}

#[actix_web::test]
async fn every_route_sits_behind_the_gate() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    for uri in ["/reservations", "/tags", "/time-off-requests"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header((utils::API_KEY_HEADER, "wrong-key"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNAUTHORIZED);
    }
    Ok(())
}
