use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns a fresh test database using the production schema
pub fn make_db(prefix: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{prefix}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

pub fn request(method: Method, uri: &str, body: Body) -> Request {
    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

/// Routes a request the same way `main` does, turning handler errors into
/// their HTTP responses so tests can assert on status codes.
pub fn dispatch(req: Request, db: &Database) -> Response {
    match handle(req, db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

pub fn read_body(resp: &mut Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut().reader().read_to_end(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

pub fn read_json(resp: &mut Response) -> serde_json::Value {
    serde_json::from_str(&read_body(resp)).unwrap()
}

pub fn sample_create_payload(uid: &str) -> serde_json::Value {
    serde_json::json!({
        "uid": uid,
        "title": "신촌역 도보 5분 원룸",
        "room_type": "원룸",
        "price_deposit": 500,
        "price_monthly": 45,
        "maintenance_fee": 5,
        "address": "서울특별시 마포구 노고산동 31-1",
        "floor": "3층",
        "area_m2": 19.8,
        "description": "풀옵션, 즉시 입주 가능",
        "image_urls": ["https://img.example.com/1.jpg", "https://img.example.com/2.jpg"]
    })
}
