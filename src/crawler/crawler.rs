// crawler.rs
use crate::crawler::{CrawlingTarget, RoomFetcher};
use crate::db::connection::Database;
use crate::db::{crawls, rooms};
use crate::errors::ServerError;
use std::thread::JoinHandle;

fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Fire-and-forget crawl of one room. The triggering request has already
/// been answered by the time this runs; the handle is only joined by tests.
pub fn spawn_room_crawl(db: Database, target: CrawlingTarget, room_id: String) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let fetcher = match target.fetcher() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Fetcher init failed for {}: {e}", target.as_str());
                return;
            }
        };

        run_room_crawl(&db, fetcher.as_ref(), target, &room_id);
    })
}

/// Fetches the room detail once and inserts it, recording the run outcome in
/// `crawl_runs`. No retry; a failed fetch is a logged, recorded loss.
///
/// When a second trigger raced us past the existence check, the insert hits
/// the uid primary key. The first insert wins and the loser is recorded as
/// an unsuccessful no-op run.
pub fn run_room_crawl(db: &Database, fetcher: &dyn RoomFetcher, target: CrawlingTarget, room_id: &str) {
    let uid = target.scoped_uid(room_id);
    let started_at = now_unix();

    let run_id = db
        .with_conn(|conn| crawls::start_crawl_run(conn, target.as_str(), room_id, &uid, started_at))
        .unwrap_or(0);

    eprintln!("🧵 Crawl started for {uid}");

    let result = fetcher.fetch_detail(room_id);
    let finished_at = now_unix();

    let (success, error) = match result {
        Ok(room) => match rooms::insert_room(db, &room) {
            Ok(()) => {
                eprintln!("✅ Crawl complete for {uid}");
                (true, None)
            }
            Err(ServerError::Conflict(msg)) => {
                eprintln!("⚠️ Crawl for {uid} lost an insert race: {msg}");
                (false, Some(msg))
            }
            Err(e) => {
                eprintln!("Crawl insert failed for {uid}: {e}");
                (false, Some(e.to_string()))
            }
        },
        Err(e) => {
            eprintln!("Crawl fetch failed for {uid}: {e}");
            (false, Some(e.to_string()))
        }
    };

    let _ = db.with_conn(|conn| crawls::end_crawl_run(conn, run_id, finished_at, success, error));
}
