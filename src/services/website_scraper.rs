use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html};
use thirtyfour::{error::WebDriverResult, WebDriver};
use url::Url;

use crate::{configuration::ScraperSettings, domain::ScrapedContent};

use super::{Droid, WebsiteFetcher};

const EXCLUDED_TAGS: [&str; 4] = ["script", "style", "nav", "footer"];

pub const UNREACHABLE_FALLBACK: &str = "Could not reach the website.";

/// Best-effort retrieval of the rendered page text. Never fails outward:
/// every failure path degrades to a `ScrapedContent` with usable text.
pub async fn scrape_website(settings: &ScraperSettings, url: &str) -> ScrapedContent {
    let target_url = normalize_target_url(url);
    log::info!("Loading website content from: {}", target_url);

    let droid = match Droid::new(&settings.webdriver_url).await {
        Ok(droid) => droid,
        Err(e) => {
            log::warn!("Webdriver session error: {:?}", e);
            return ScrapedContent::unreachable(url, UNREACHABLE_FALLBACK.to_string());
        }
    };

    let content = match fetch_page_text(&droid.driver, settings, &target_url).await {
        Ok(text) => {
            log::info!("Loaded {} characters from {}", text.len(), target_url);
            ScrapedContent::fetched(url, text)
        }
        Err(e) => {
            log::warn!("Scraping error on {}: {:?}", target_url, e);
            ScrapedContent::unreachable(url, format!("Error retrieving the website: {}", e))
        }
    };

    droid.quit().await;
    content
}

async fn fetch_page_text(
    driver: &WebDriver,
    settings: &ScraperSettings,
    url: &str,
) -> WebDriverResult<String> {
    driver.goto(url).await?;

    // Fixed settling delay for client-side rendering, not a readiness check.
    tokio::time::sleep(Duration::from_secs(settings.settle_delay_secs)).await;

    let page_source = driver.source().await?;
    Ok(extract_visible_text(&page_source))
}

/// Forms tend to arrive with bare hosts like "acme.com"; the webdriver wants
/// an absolute URL.
fn normalize_target_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(_) => url.to_string(),
        Err(_) => format!("https://{}", url),
    }
}

pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut chunks: Vec<&str> = vec![];
    collect_text(document.root_element(), &mut chunks);
    normalize_whitespace(&chunks.join(" "))
}

fn collect_text<'a>(element: ElementRef<'a>, chunks: &mut Vec<&'a str>) {
    if EXCLUDED_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, chunks);
        } else if let Some(text) = child.value().as_text() {
            chunks.push(&text.text);
        }
    }
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

pub struct DroidFetcher {
    settings: ScraperSettings,
}

impl DroidFetcher {
    pub fn new(settings: ScraperSettings) -> Self {
        DroidFetcher { settings }
    }
}

#[async_trait]
impl WebsiteFetcher for DroidFetcher {
    async fn fetch(&self, url: &str) -> ScrapedContent {
        scrape_website(&self.settings, url).await
    }
}
