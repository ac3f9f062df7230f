use actix_web::{http, test};
use reservation_backend::{
    entities::{reservations_tags, tag},
    test_utils::factory::{self, TagFactory},
};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};

use crate::utils::{self, init_app, record_ids, sorted};

#[actix_web::test]
async fn create_and_refuse_same_name() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = utils::post("/tags")
        .set_json(json!({ "name": "vip", "color": "gold" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["record"]["name"], "vip");
    assert_eq!(body["record"]["schemaVersion"], json!(tag::SCHEMA_VERSION));

    let req = utils::post("/tags")
        .set_json(json!({ "name": "vip", "color": "red" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "found_duplicates");
    assert_eq!(body["record"]["color"], "red");
    assert_eq!(body["existingRecords"][0]["color"], "gold");

    assert_eq!(tag::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[actix_web::test]
async fn search_by_name_and_color_ignoring_case() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let vip = factory::tag().name("VIP guest").color("Gold").insert(&db).await?;
    factory::tag().name("vip staff").color("blue").insert(&db).await?;

    let req = utils::get("/tags?name=vip&color=GOLD").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(record_ids(&body), sorted(&[vip.id]));
    Ok(())
}

#[actix_web::test]
async fn update_color() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let existing = factory::tag().name("vip").color("gold").insert(&db).await?;

    let req = utils::put("/tags")
        .set_json(json!({ "id": existing.id, "color": "silver" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let updated = tag::Entity::find_by_id(existing.id).one(&db).await?.unwrap();
    assert_eq!(updated.color, "silver");
    assert_eq!(updated.name, "vip");
    Ok(())
}

#[actix_web::test]
async fn delete_always_erases_and_unlinks() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let existing = factory::tag().insert(&db).await?;
    let reservation = factory::reservation().insert(&db).await?;
    factory::reservation_tag(reservation.id, existing.id)
        .insert(&db)
        .await?;

    let req = utils::delete("/tags")
        .set_json(json!({ "ids": [existing.id], "permanent": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "the specified tags were PERMANENTLY deleted from this database"
    );
    assert!(tag::Entity::find_by_id(existing.id).one(&db).await?.is_none());
    assert_eq!(reservations_tags::Entity::find().count(&db).await?, 0);
    Ok(())
}
