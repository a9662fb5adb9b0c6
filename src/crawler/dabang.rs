// dabang.rs
use crate::crawler::models::DabangRoomDetail;
use crate::crawler::{CrawlerError, CrawlingTarget, RoomFetcher};
use crate::domain::room::Room;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const DABANG_ROOM_URL: &str = "https://www.dabangapp.com/room";

/// Fetches a room detail page from Dabang and lifts the embedded
/// `__NEXT_DATA__` payload into a `Room`.
pub struct DabangFetcher {
    client: Client,
}

impl DabangFetcher {
    pub fn new() -> Result<Self, CrawlerError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CrawlerError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    fn fetch_room_html(&self, room_id: &str) -> Result<String, CrawlerError> {
        let url = format!("{DABANG_ROOM_URL}/{}", room_id.trim());

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CrawlerError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| CrawlerError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(CrawlerError::Network(format!(
                "Dabang HTTP {status} for {url}"
            )));
        }

        Ok(text)
    }

    fn extract_next_data(html: &str) -> Result<Value, CrawlerError> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(r#"script[id="__NEXT_DATA__"]"#)
            .map_err(|e| CrawlerError::HtmlParse(e.to_string()))?;

        let element = document
            .select(&selector)
            .next()
            .ok_or(CrawlerError::MissingNextData)?;

        let json_text = element.text().next().ok_or(CrawlerError::MissingNextData)?;
        let data: Value =
            serde_json::from_str(json_text).map_err(|e| CrawlerError::JsonParse(e.to_string()))?;
        Ok(data)
    }

    fn extract_room_detail(data: &Value) -> Result<DabangRoomDetail, CrawlerError> {
        let detail = &data["props"]["pageProps"]["roomDetail"];
        if detail.is_null() {
            return Err(CrawlerError::UnexpectedShape("roomDetail missing".into()));
        }

        serde_json::from_value(detail.clone()).map_err(|e| CrawlerError::JsonParse(e.to_string()))
    }
}

impl RoomFetcher for DabangFetcher {
    fn fetch_detail(&self, room_id: &str) -> Result<Room, CrawlerError> {
        let html = self.fetch_room_html(room_id)?;
        let data = Self::extract_next_data(&html)?;
        let detail = Self::extract_room_detail(&data)?;

        let uid = CrawlingTarget::Dabang.scoped_uid(room_id);
        Room::from_dabang(&detail, uid).map_err(CrawlerError::UnexpectedShape)
    }
}
