#[derive(Debug, PartialEq, Clone)]
pub enum ScrapeStatus {
    Fetched,
    Unreachable,
    Empty,
}

/// Outcome of one scrape attempt. Built once per request and handed to the
/// prompt compiler as-is; the text is always usable, whatever the status.
#[derive(Debug, Clone)]
pub struct ScrapedContent {
    pub source_url: String,
    pub text: String,
    pub status: ScrapeStatus,
}

impl ScrapedContent {
    pub fn fetched(source_url: &str, text: String) -> Self {
        let status = match text.is_empty() {
            true => ScrapeStatus::Empty,
            false => ScrapeStatus::Fetched,
        };
        ScrapedContent {
            source_url: source_url.to_string(),
            text,
            status,
        }
    }

    pub fn unreachable(source_url: &str, fallback_text: String) -> Self {
        ScrapedContent {
            source_url: source_url.to_string(),
            text: fallback_text,
            status: ScrapeStatus::Unreachable,
        }
    }
}
