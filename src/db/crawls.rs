use crate::errors::ServerError;
use rusqlite::{params, Connection};

#[derive(Debug)]
pub struct CrawlRun {
    pub id: i64,
    pub target: String,
    pub room_id: String,
    pub uid: String,
    pub started_at: i64,
    pub finished_at: Option<i64>,
    pub success: bool,
    pub error_message: Option<String>,
}

pub fn start_crawl_run(
    conn: &Connection,
    target: &str,
    room_id: &str,
    uid: &str,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "INSERT INTO crawl_runs (target, room_id, uid, started_at, success) VALUES (?, ?, ?, ?, 0)",
        params![target, room_id, uid, now],
    )
    .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

pub fn end_crawl_run(
    conn: &Connection,
    run_id: i64,
    now: i64,
    success: bool,
    error: Option<String>,
) -> Result<(), ServerError> {
    conn.execute(
        "UPDATE crawl_runs SET finished_at = ?, success = ?, error_message = ? WHERE id = ?",
        params![now, success, error, run_id],
    )
    .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(())
}

pub fn get_recent_crawls(conn: &Connection) -> Result<Vec<CrawlRun>, ServerError> {
    let mut stmt = conn
        .prepare("SELECT id, target, room_id, uid, started_at, finished_at, success, error_message FROM crawl_runs ORDER BY started_at DESC, id DESC LIMIT 50")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(CrawlRun {
                id: row.get(0)?,
                target: row.get(1)?,
                room_id: row.get(2)?,
                uid: row.get(3)?,
                started_at: row.get(4)?,
                finished_at: row.get(5)?,
                success: row.get(6)?,
                error_message: row.get(7)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut runs = Vec::new();
    for r in rows {
        runs.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(runs)
}
