use crate::crawler::CrawlerError;
use crate::domain::room::Room;

/// One synchronous "fetch detail by id" call per provider.
///
/// Implementations return a fully mapped `Room` whose uid is already the
/// scoped id for their provider, so the caller can insert it as-is. Timeouts
/// and transport concerns live entirely behind this boundary.
pub trait RoomFetcher {
    fn fetch_detail(&self, room_id: &str) -> Result<Room, CrawlerError>;
}
