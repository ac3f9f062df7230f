use actix_web::{http, test};
use reservation_backend::test_utils::factory::{self, ReservationFactory, TagFactory};
use sea_orm::{ActiveModelTrait, DbErr};
use serde_json::Value;
use uuid::Uuid;

use crate::utils::{self, init_app, record_ids, sorted};

#[actix_web::test]
async fn start_date_only_matches_exact_date() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let on_date = factory::reservation().date("2024-06-02").insert(&db).await?;
    factory::reservation().date("2024-06-03").insert(&db).await?;

    let req = utils::get("/reservations?startDate=2024-06-02").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "successful");
    assert_eq!(body["message"], "found results matching search query");
    assert_eq!(record_ids(&body), sorted(&[on_date.id]));
    Ok(())
}

#[actix_web::test]
async fn date_range_is_inclusive() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let first = factory::reservation().date("2024-06-01").insert(&db).await?;
    let last = factory::reservation().date("2024-06-10").insert(&db).await?;
    factory::reservation().date("2024-06-11").insert(&db).await?;

    let req = utils::get("/reservations?date=2024-06-01&endDate=2024-06-10").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(record_ids(&body), sorted(&[first.id, last.id]));
    Ok(())
}

#[actix_web::test]
async fn name_phone_and_tags() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let vip = factory::tag().name("vip").insert(&db).await?;
    let jane = factory::reservation()
        .name("jane doe")
        .phone_number("5550100")
        .insert(&db)
        .await?;
    factory::reservation_tag(jane.id, vip.id).insert(&db).await?;
    factory::reservation()
        .name("jane roe")
        .phone_number("5550199")
        .insert(&db)
        .await?;

    let uri = format!(
        "/reservations?name=JANE&phoneNumber=5550100&tags={}",
        vip.id
    );
    let req = utils::get(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(record_ids(&body), sorted(&[jane.id]));
    assert_eq!(body["records"][0]["tags"][0], vip.id.to_string());
    Ok(())
}

#[actix_web::test]
async fn no_filters_hide_deleted_records() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let active = factory::reservation().insert(&db).await?;
    let deleted = factory::reservation().deleted(true).insert(&db).await?;

    let req = utils::get("/reservations").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(record_ids(&body), sorted(&[active.id]));

    let req = utils::get("/reservations?includeDeleted=true").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "no search query provided, returning all reservations");
    assert_eq!(record_ids(&body), sorted(&[active.id, deleted.id]));
    Ok(())
}

#[actix_web::test]
async fn empty_store_is_still_successful_without_filters() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = utils::get("/reservations?includeDeleted=true&name=").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["records"], serde_json::json!([]));
    Ok(())
}

#[actix_web::test]
async fn not_found_when_nothing_matches() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    factory::reservation().date("2024-06-01").insert(&db).await?;

    let req = utils::get("/reservations?startDate=2030-01-01").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "not_found");
    Ok(())
}

#[actix_web::test]
async fn id_lookup_returns_soft_deleted_record() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let deleted = factory::reservation().deleted(true).insert(&db).await?;

    let uri = format!("/reservations?id={}&startDate=2030-01-01", deleted.id);
    let req = utils::get(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(record_ids(&body), sorted(&[deleted.id]));

    let uri = format!("/reservations?id={}", Uuid::now_v7());
    let req = utils::get(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
    Ok(())
}

#[actix_web::test]
async fn bad_request_on_invalid_parameters() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    for uri in [
        "/reservations?seats=four",
        "/reservations?tags=not-a-tag-id",
        "/reservations?id=123",
        "/reservations?includeDeleted=maybe",
    ] {
        let req = utils::get(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["result"], "error_occurred");
    }
    Ok(())
}
