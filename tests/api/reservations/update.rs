use actix_web::{http, test};
use reservation_backend::{
    entities::{reservation, reservations_tags},
    test_utils::factory::{self, ReservationFactory, TagFactory},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::utils::{self, init_app};

#[actix_web::test]
async fn empty_notes_remove_them_and_omitted_fields_stay() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let existing = factory::reservation()
        .notes(Some("birthday"))
        .allow_sms(Some(true))
        .insert(&db)
        .await?;

    let req = utils::put("/reservations")
        .set_json(json!({
            "id": existing.id,
            "notes": "",
            "name": " Jane ROE ",
            "seats": 6,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "successful");

    let updated = reservation::Entity::find_by_id(existing.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(updated.notes, None);
    assert_eq!(updated.name, "jane roe");
    assert_eq!(updated.seats, 6);
    assert_eq!(updated.date, existing.date);
    assert_eq!(updated.phone_number, existing.phone_number);
    assert_eq!(updated.allow_sms, Some(true));
    Ok(())
}

#[actix_web::test]
async fn empty_required_fields_are_left_unchanged() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let existing = factory::reservation().insert(&db).await?;

    let req = utils::put("/reservations")
        .set_json(json!({
            "id": existing.id,
            "date": "",
            "name": "   ",
            "status": "",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let unchanged = reservation::Entity::find_by_id(existing.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(unchanged, existing);
    Ok(())
}

#[actix_web::test]
async fn booleans_apply_even_when_false() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let existing = factory::reservation()
        .deleted(true)
        .allow_sms(Some(true))
        .insert(&db)
        .await?;

    let req = utils::put("/reservations")
        .set_json(json!({
            "id": existing.id,
            "deleted": false,
            "allowSms": null,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let updated = reservation::Entity::find_by_id(existing.id)
        .one(&db)
        .await?
        .unwrap();
    assert!(!updated.deleted);
    assert_eq!(updated.allow_sms, None);
    Ok(())
}

#[actix_web::test]
async fn tags_replace_the_whole_list() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let vip = factory::tag().name("vip").insert(&db).await?;
    let patio = factory::tag().name("patio").insert(&db).await?;
    let existing = factory::reservation().insert(&db).await?;
    factory::reservation_tag(existing.id, vip.id)
        .insert(&db)
        .await?;

    let req = utils::put("/reservations")
        .set_json(json!({ "id": existing.id, "tags": [patio.id] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let tag_ids = reservations_tags::Entity::find()
        .filter(reservations_tags::Column::ReservationId.eq(existing.id))
        .all(&db)
        .await?
        .into_iter()
        .map(|link| link.tag_id)
        .collect::<Vec<_>>();
    assert_eq!(tag_ids, vec![patio.id]);

    let req = utils::put("/reservations")
        .set_json(json!({ "id": existing.id, "tags": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let links = reservations_tags::Entity::find()
        .filter(reservations_tags::Column::ReservationId.eq(existing.id))
        .all(&db)
        .await?;
    assert!(links.is_empty());
    Ok(())
}

#[actix_web::test]
async fn unknown_id_is_acknowledged() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = utils::put("/reservations")
        .set_json(json!({ "id": Uuid::now_v7(), "seats": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "successful");
    Ok(())
}

#[actix_web::test]
async fn bad_request_without_valid_id_or_seats() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let existing = factory::reservation().seats(2).insert(&db).await?;

    for body in [
        json!({ "seats": 3 }),
        json!({ "id": "not-an-id", "seats": 3 }),
        json!({ "id": existing.id, "seats": 0 }),
    ] {
        let req = utils::put("/reservations").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["result"], "error_occurred");
    }

    let unchanged = reservation::Entity::find_by_id(existing.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(unchanged.seats, 2);
    Ok(())
}

#[actix_web::test]
async fn unknown_tag_rolls_back_the_whole_update() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let existing = factory::reservation().name("orig").insert(&db).await?;

    let req = utils::put("/reservations")
        .set_json(json!({
            "id": existing.id,
            "name": "changed",
            "tags": [Uuid::now_v7()],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "error_occurred");

    let stored = reservation::Entity::find_by_id(existing.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "orig");
    Ok(())
}
