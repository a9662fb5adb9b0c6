use crate::crawler::{CrawlerError, DabangFetcher, RoomFetcher};

/// Supported external listing providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlingTarget {
    Dabang,
}

impl CrawlingTarget {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Dabang" => Some(CrawlingTarget::Dabang),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlingTarget::Dabang => "Dabang",
        }
    }

    /// Scope a provider-local id with the provider name so ids can't collide
    /// across providers. Example: "Dabang::12345678"
    pub fn scoped_uid(&self, room_id: &str) -> String {
        format!("{}::{}", self.as_str(), room_id.trim())
    }

    /// Builds the fetch adapter for this provider. Call sites stay the same
    /// when a new provider variant is added here.
    pub fn fetcher(&self) -> Result<Box<dyn RoomFetcher + Send>, CrawlerError> {
        match self {
            CrawlingTarget::Dabang => Ok(Box::new(DabangFetcher::new()?)),
        }
    }
}
