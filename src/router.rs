use crate::crawler::{self, CrawlingTarget};
use crate::db::{crawls, rooms, Database};
use crate::domain::room::{Room, RoomCreateRequest, RoomsResponse, RoomUpdate};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, no_content_response, ResultResp};
use crate::templates;
use astra::Request;
use std::io::Read;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);

    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => {
            let room_count = rooms::count_rooms(db)?;
            let recent = db.with_conn(|conn| crawls::get_recent_crawls(conn))?;
            html_response(templates::status_page(room_count, &recent))
        }

        ("GET", ["rooms"]) => {
            let all = rooms::get_all_rooms(db)?;
            if all.is_empty() {
                return Err(ServerError::NotFound("no registered rooms".to_string()));
            }
            json_response(200, &RoomsResponse { rooms: all })
        }

        ("POST", ["rooms"]) => {
            let request: RoomCreateRequest = read_json(&mut req)?;
            let room = Room::from_create(request);
            rooms::insert_room(db, &room)?;
            json_response(201, &room)
        }

        ("GET", ["rooms", uid]) => {
            let room = rooms::get_room(db, uid)?
                .ok_or_else(|| ServerError::NotFound("not a registered room".to_string()))?;
            json_response(200, &room)
        }

        ("PATCH", ["rooms", uid]) => {
            let update: RoomUpdate = read_json(&mut req)?;
            let room = rooms::update_room(db, uid, &update)?;
            json_response(200, &room)
        }

        ("DELETE", ["rooms", uid]) => {
            rooms::delete_room(db, uid)?;
            no_content_response()
        }

        // Crawl trigger. Responds 204 before the crawl runs; the caller is
        // never told whether the fetch eventually succeeds.
        ("PUT", ["rooms", room_id]) => {
            let target = match query.get("crawling_target") {
                None => CrawlingTarget::Dabang,
                Some(value) => CrawlingTarget::parse(value).ok_or_else(|| {
                    ServerError::Validation(format!("unknown crawling target: {value}"))
                })?,
            };

            let uid = target.scoped_uid(room_id);
            if !rooms::room_exists(db, &uid)? {
                crawler::spawn_room_crawl(db.clone(), target, room_id.to_string());
            }
            no_content_response()
        }

        _ => Err(ServerError::NotFound("no such route".to_string())),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(req: &mut Request) -> Result<T, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::Validation(format!("failed to read request body: {e}")))?;

    serde_json::from_slice(&buf).map_err(|e| ServerError::Validation(e.to_string()))
}

fn parse_query(req: &Request) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
