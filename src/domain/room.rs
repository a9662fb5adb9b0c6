// src/domain/room.rs

use crate::crawler::models::DabangRoomDetail;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A room listing as stored in the `rooms` table and returned by the API.
///
/// `uid` is the identity of the record and never changes once the row is
/// created. For crawled rows it is the scoped id built from the crawling
/// target (e.g. `Dabang::12345`); manually registered rows can use any
/// unique string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub uid: String,
    pub title: String,
    pub room_type: Option<String>,
    pub price_deposit: i64,
    pub price_monthly: i64,
    pub maintenance_fee: Option<i64>,
    pub address: String,
    pub floor: Option<String>,
    pub area_m2: Option<f64>,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload accepted by `POST /rooms`.
#[derive(Debug, Deserialize)]
pub struct RoomCreateRequest {
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub room_type: Option<String>,
    pub price_deposit: i64,
    pub price_monthly: i64,
    #[serde(default)]
    pub maintenance_fee: Option<i64>,
    pub address: String,
    #[serde(default)]
    pub floor: Option<String>,
    #[serde(default)]
    pub area_m2: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Payload accepted by `PATCH /rooms/{uid}`. Absent fields keep the value
/// already on the record; a field cannot be reset to NULL through a patch.
#[derive(Debug, Default, Deserialize)]
pub struct RoomUpdate {
    pub title: Option<String>,
    pub room_type: Option<String>,
    pub price_deposit: Option<i64>,
    pub price_monthly: Option<i64>,
    pub maintenance_fee: Option<i64>,
    pub address: Option<String>,
    pub floor: Option<String>,
    pub area_m2: Option<f64>,
    pub description: Option<String>,
    pub image_urls: Option<Vec<String>>,
}

impl Room {
    pub fn from_create(request: RoomCreateRequest) -> Self {
        let now = Utc::now().naive_utc();
        Room {
            uid: request.uid,
            title: request.title,
            room_type: request.room_type,
            price_deposit: request.price_deposit,
            price_monthly: request.price_monthly,
            maintenance_fee: request.maintenance_fee,
            address: request.address,
            floor: request.floor,
            area_m2: request.area_m2,
            description: request.description,
            image_urls: request.image_urls,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds a `Room` from the provider payload, validating that the fields
    /// we cannot do without actually came back from the fetch.
    pub fn from_dabang(detail: &DabangRoomDetail, uid: String) -> Result<Self, String> {
        let room = detail.room.as_ref().ok_or("Missing room object")?;

        let title = room
            .title
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty title")?
            .to_string();

        let address = detail
            .address
            .as_ref()
            .and_then(|a| a.full_text.as_deref())
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty address")?
            .to_string();

        let price = detail.price.as_ref();
        let now = Utc::now().naive_utc();

        Ok(Room {
            uid,
            title,
            room_type: room.room_type.clone(),
            price_deposit: price.and_then(|p| p.deposit).unwrap_or(0),
            price_monthly: price.and_then(|p| p.monthly_fee).unwrap_or(0),
            maintenance_fee: room.maintenance_cost,
            address,
            floor: room.floor.clone(),
            area_m2: room.room_size,
            description: room.memo.clone(),
            image_urls: room.img_urls.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrites exactly the fields present in the update; everything else
    /// is retained from the existing record.
    pub fn apply_update(&mut self, update: &RoomUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(room_type) = &update.room_type {
            self.room_type = Some(room_type.clone());
        }
        if let Some(price_deposit) = update.price_deposit {
            self.price_deposit = price_deposit;
        }
        if let Some(price_monthly) = update.price_monthly {
            self.price_monthly = price_monthly;
        }
        if let Some(maintenance_fee) = update.maintenance_fee {
            self.maintenance_fee = Some(maintenance_fee);
        }
        if let Some(address) = &update.address {
            self.address = address.clone();
        }
        if let Some(floor) = &update.floor {
            self.floor = Some(floor.clone());
        }
        if let Some(area_m2) = update.area_m2 {
            self.area_m2 = Some(area_m2);
        }
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(image_urls) = &update.image_urls {
            self.image_urls = image_urls.clone();
        }
    }
}

/// Body shape of `GET /rooms`.
#[derive(Debug, Serialize)]
pub struct RoomsResponse {
    pub rooms: Vec<Room>,
}
