// src/tests/router_tests/rooms_tests.rs

use crate::tests::utils::{dispatch, make_db, read_json, request, sample_create_payload};
use astra::Body;
use http::Method;

const ROUND_TRIP_FIELDS: [&str; 11] = [
    "uid",
    "title",
    "room_type",
    "price_deposit",
    "price_monthly",
    "maintenance_fee",
    "address",
    "floor",
    "area_m2",
    "description",
    "image_urls",
];

#[test]
fn get_missing_room_returns_404() {
    let db = make_db("rooms_get_missing");

    let mut resp = dispatch(request(Method::GET, "/rooms/unknown-uid", Body::empty()), &db);

    assert_eq!(resp.status(), 404);
    let body = read_json(&mut resp);
    assert_eq!(body["detail"], "not a registered room");
}

#[test]
fn get_all_returns_404_when_empty_then_lists_created_room() {
    let db = make_db("rooms_list");

    let mut resp = dispatch(request(Method::GET, "/rooms", Body::empty()), &db);
    assert_eq!(resp.status(), 404);
    let body = read_json(&mut resp);
    assert_eq!(body["detail"], "no registered rooms");

    let payload = sample_create_payload("manual-001");
    let resp = dispatch(
        request(Method::POST, "/rooms", Body::from(payload.to_string())),
        &db,
    );
    assert_eq!(resp.status(), 201);

    let mut resp = dispatch(request(Method::GET, "/rooms", Body::empty()), &db);
    assert_eq!(resp.status(), 200);
    let body = read_json(&mut resp);
    let rooms = body["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["uid"], "manual-001");
}

#[test]
fn create_then_get_round_trips_every_field() {
    let db = make_db("rooms_round_trip");
    let payload = sample_create_payload("manual-002");

    let mut resp = dispatch(
        request(Method::POST, "/rooms", Body::from(payload.to_string())),
        &db,
    );
    assert_eq!(resp.status(), 201);
    let created = read_json(&mut resp);
    assert_eq!(created["uid"], "manual-002");

    let mut resp = dispatch(request(Method::GET, "/rooms/manual-002", Body::empty()), &db);
    assert_eq!(resp.status(), 200);
    let body = read_json(&mut resp);
    for field in ROUND_TRIP_FIELDS {
        assert_eq!(body[field], payload[field], "field {field} did not round-trip");
    }
}

#[test]
fn create_with_missing_fields_returns_422() {
    let db = make_db("rooms_create_invalid");

    let resp = dispatch(
        request(
            Method::POST,
            "/rooms",
            Body::from(r#"{"uid": "manual-bad"}"#.to_string()),
        ),
        &db,
    );
    assert_eq!(resp.status(), 422);

    let resp = dispatch(
        request(Method::POST, "/rooms", Body::from("not json".to_string())),
        &db,
    );
    assert_eq!(resp.status(), 422);
}

#[test]
fn create_duplicate_uid_returns_409() {
    let db = make_db("rooms_create_duplicate");
    let payload = sample_create_payload("manual-003");

    let resp = dispatch(
        request(Method::POST, "/rooms", Body::from(payload.to_string())),
        &db,
    );
    assert_eq!(resp.status(), 201);

    let mut resp = dispatch(
        request(Method::POST, "/rooms", Body::from(payload.to_string())),
        &db,
    );
    assert_eq!(resp.status(), 409);
    let body = read_json(&mut resp);
    assert_eq!(body["detail"], "room manual-003 is already registered");
}

#[test]
fn patch_changes_only_supplied_fields() {
    let db = make_db("rooms_patch");
    let payload = sample_create_payload("manual-004");
    let resp = dispatch(
        request(Method::POST, "/rooms", Body::from(payload.to_string())),
        &db,
    );
    assert_eq!(resp.status(), 201);

    let mut resp = dispatch(
        request(
            Method::PATCH,
            "/rooms/manual-004",
            Body::from(r#"{"price_monthly": 60}"#.to_string()),
        ),
        &db,
    );
    assert_eq!(resp.status(), 200);
    let body = read_json(&mut resp);
    assert_eq!(body["price_monthly"], 60);

    // Everything except the patched field keeps its pre-update value
    let mut resp = dispatch(request(Method::GET, "/rooms/manual-004", Body::empty()), &db);
    let body = read_json(&mut resp);
    assert_eq!(body["price_monthly"], 60);
    for field in ROUND_TRIP_FIELDS {
        if field == "price_monthly" {
            continue;
        }
        assert_eq!(body[field], payload[field], "field {field} was clobbered");
    }
}

#[test]
fn patch_missing_room_returns_404() {
    let db = make_db("rooms_patch_missing");

    let resp = dispatch(
        request(
            Method::PATCH,
            "/rooms/manual-nope",
            Body::from(r#"{"title": "새 제목"}"#.to_string()),
        ),
        &db,
    );
    assert_eq!(resp.status(), 404);
}

#[test]
fn delete_then_get_returns_404() {
    let db = make_db("rooms_delete");
    let payload = sample_create_payload("manual-005");
    let resp = dispatch(
        request(Method::POST, "/rooms", Body::from(payload.to_string())),
        &db,
    );
    assert_eq!(resp.status(), 201);

    let resp = dispatch(request(Method::DELETE, "/rooms/manual-005", Body::empty()), &db);
    assert_eq!(resp.status(), 204);

    let resp = dispatch(request(Method::GET, "/rooms/manual-005", Body::empty()), &db);
    assert_eq!(resp.status(), 404);

    let resp = dispatch(request(Method::DELETE, "/rooms/manual-005", Body::empty()), &db);
    assert_eq!(resp.status(), 404);
}

#[test]
fn unknown_route_returns_404() {
    let db = make_db("rooms_unknown_route");

    let resp = dispatch(request(Method::GET, "/landlords", Body::empty()), &db);
    assert_eq!(resp.status(), 404);
}
