mod crawler;
mod crawler_error;
mod dabang;
mod fetcher;
pub mod models;
mod target;

pub use crawler::{run_room_crawl, spawn_room_crawl};
pub use crawler_error::CrawlerError;
pub use dabang::DabangFetcher;
pub use fetcher::RoomFetcher;
pub use target::CrawlingTarget;
