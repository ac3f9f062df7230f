use actix_web::{http, test};
use reservation_backend::{entities::reservation, test_utils::factory};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde_json::{json, Value};

use crate::utils::{self, init_app, record_ids, sorted};

#[actix_web::test]
async fn soft_delete_keeps_records() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let a = factory::reservation().insert(&db).await?;
    let b = factory::reservation().insert(&db).await?;

    let req = utils::delete("/reservations")
        .set_json(json!({ "ids": [a.id, b.id] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "successful");
    assert_eq!(
        body["message"],
        "the specified reservations were deleted from this database"
    );

    let req = utils::get("/reservations?startDate=2024-06-01").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let req = utils::get("/reservations?startDate=2024-06-01&includeDeleted=true").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(record_ids(&body), sorted(&[a.id, b.id]));
    Ok(())
}

#[actix_web::test]
async fn permanent_delete_removes_records() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let a = factory::reservation().insert(&db).await?;
    let b = factory::reservation().insert(&db).await?;
    let kept = factory::reservation().insert(&db).await?;

    let req = utils::delete("/reservations")
        .set_json(json!({ "ids": [a.id, b.id], "permanent": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "the specified reservations were PERMANENTLY deleted from this database"
    );

    for id in [a.id, b.id] {
        let uri = format!("/reservations?id={}", id);
        let req = utils::get(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
    }
    assert!(reservation::Entity::find_by_id(kept.id)
        .one(&db)
        .await?
        .is_some());
    Ok(())
}

#[actix_web::test]
async fn bad_request_on_empty_request() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    for body in [json!({}), json!({ "ids": [] }), json!({ "ids": ["nope"] })] {
        let req = utils::delete("/reservations").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["result"], "error_occurred");
        assert_eq!(body["message"], "the delete request was empty or invalid");
    }
    Ok(())
}
