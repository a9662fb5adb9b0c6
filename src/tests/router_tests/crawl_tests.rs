// src/tests/router_tests/crawl_tests.rs

use crate::db::crawls;
use crate::tests::utils::{dispatch, make_db, read_json, request, sample_create_payload};
use astra::Body;
use http::Method;

#[test]
fn put_with_existing_uid_schedules_no_crawl() {
    let db = make_db("crawl_put_existing");

    // Register the room under the scoped uid the trigger would compute
    let payload = sample_create_payload("Dabang::31337");
    let resp = dispatch(
        request(Method::POST, "/rooms", Body::from(payload.to_string())),
        &db,
    );
    assert_eq!(resp.status(), 201);

    let resp = dispatch(
        request(
            Method::PUT,
            "/rooms/31337?crawling_target=Dabang",
            Body::empty(),
        ),
        &db,
    );
    assert_eq!(resp.status(), 204);

    // crawling_target defaults to Dabang when absent
    let resp = dispatch(request(Method::PUT, "/rooms/31337", Body::empty()), &db);
    assert_eq!(resp.status(), 204);

    let runs = db.with_conn(|conn| crawls::get_recent_crawls(conn)).unwrap();
    assert!(runs.is_empty(), "hit on the scoped uid must schedule nothing");
}

#[test]
fn put_with_unknown_target_returns_422() {
    let db = make_db("crawl_put_unknown_target");

    let mut resp = dispatch(
        request(
            Method::PUT,
            "/rooms/31337?crawling_target=Zigbang",
            Body::empty(),
        ),
        &db,
    );
    assert_eq!(resp.status(), 422);
    let body = read_json(&mut resp);
    assert_eq!(body["detail"], "unknown crawling target: Zigbang");
}

#[test]
fn put_miss_returns_204_immediately() {
    let db = make_db("crawl_put_miss");

    // The response never waits for, or reports on, the spawned crawl
    let resp = dispatch(request(Method::PUT, "/rooms/19481948", Body::empty()), &db);
    assert_eq!(resp.status(), 204);
}
