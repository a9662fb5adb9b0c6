use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CrawlerError {
    Network(String),
    HtmlParse(String),
    MissingNextData,
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for CrawlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlerError::Network(msg) => write!(f, "Network error: {msg}"),
            CrawlerError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            CrawlerError::MissingNextData => write!(f, "__NEXT_DATA__ not found"),
            CrawlerError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            CrawlerError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for CrawlerError {}
