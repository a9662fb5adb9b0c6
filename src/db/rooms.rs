use crate::db::connection::Database;
use crate::domain::room::{Room, RoomUpdate};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, ErrorCode, OptionalExtension, Row};

const ROOM_COLUMNS: &str = "uid, title, room_type, price_deposit, price_monthly, \
     maintenance_fee, address, floor, area_m2, description, image_urls, \
     created_at, updated_at";

fn room_from_row(row: &Row) -> rusqlite::Result<Room> {
    let image_urls_raw: String = row.get(10)?;
    Ok(Room {
        uid: row.get(0)?,
        title: row.get(1)?,
        room_type: row.get(2)?,
        price_deposit: row.get(3)?,
        price_monthly: row.get(4)?,
        maintenance_fee: row.get(5)?,
        address: row.get(6)?,
        floor: row.get(7)?,
        area_m2: row.get(8)?,
        description: row.get(9)?,
        image_urls: serde_json::from_str(&image_urls_raw).unwrap_or_default(),
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

pub fn get_room(db: &Database, uid: &str) -> Result<Option<Room>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            &format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE uid = ?1"),
            params![uid],
            room_from_row,
        )
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

pub fn get_all_rooms(db: &Database) -> Result<Vec<Room>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY created_at, uid"
            ))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], room_from_row)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut rooms = Vec::new();
        for room in rows {
            rooms.push(room.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(rooms)
    })
}

pub fn room_exists(db: &Database, uid: &str) -> Result<bool, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM rooms WHERE uid = ?1)",
            params![uid],
            |row| row.get::<_, bool>(0),
        )
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

pub fn count_rooms(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

/// Inserts a new room. A second insert for the same uid is rejected by the
/// primary key and surfaces as `Conflict`; the existing row is untouched.
pub fn insert_room(db: &Database, room: &Room) -> Result<(), ServerError> {
    let image_urls = serde_json::to_string(&room.image_urls)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    db.with_conn(|conn| {
        let result = conn.execute(
            r#"
            INSERT INTO rooms (
                uid, title, room_type, price_deposit, price_monthly,
                maintenance_fee, address, floor, area_m2, description,
                image_urls, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
            params![
                room.uid,
                room.title,
                room.room_type,
                room.price_deposit,
                room.price_monthly,
                room.maintenance_fee,
                room.address,
                room.floor,
                room.area_m2,
                room.description,
                image_urls,
                room.created_at,
                room.updated_at,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Err(ServerError::Conflict(format!(
                    "room {} is already registered",
                    room.uid
                )))
            }
            Err(e) => Err(ServerError::DbError(e.to_string())),
        }
    })
}

/// Merges the supplied fields onto the stored record and writes the full row
/// back. Returns the updated record.
pub fn update_room(db: &Database, uid: &str, update: &RoomUpdate) -> Result<Room, ServerError> {
    let mut room = get_room(db, uid)?
        .ok_or_else(|| ServerError::NotFound(format!("no registered room for {uid}")))?;

    room.apply_update(update);
    room.updated_at = Utc::now().naive_utc();

    let image_urls = serde_json::to_string(&room.image_urls)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    db.with_conn(|conn| {
        conn.execute(
            r#"
            UPDATE rooms SET
                title = ?2, room_type = ?3, price_deposit = ?4, price_monthly = ?5,
                maintenance_fee = ?6, address = ?7, floor = ?8, area_m2 = ?9,
                description = ?10, image_urls = ?11, updated_at = ?12
            WHERE uid = ?1
            "#,
            params![
                room.uid,
                room.title,
                room.room_type,
                room.price_deposit,
                room.price_monthly,
                room.maintenance_fee,
                room.address,
                room.floor,
                room.area_m2,
                room.description,
                image_urls,
                room.updated_at,
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })?;

    Ok(room)
}

pub fn delete_room(db: &Database, uid: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let deleted = conn
            .execute("DELETE FROM rooms WHERE uid = ?1", params![uid])
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        if deleted == 0 {
            return Err(ServerError::NotFound(format!(
                "no registered room for {uid}"
            )));
        }
        Ok(())
    })
}
