use thirtyfour::{error::WebDriverResult, DesiredCapabilities, WebDriver};

/// One headless Chrome session, created per submission and torn down before
/// the response goes out. Never pooled.
pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new(webdriver_url: &str) -> WebDriverResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;
        caps.set_no_sandbox()?;
        caps.set_disable_dev_shm_usage()?;

        let driver = WebDriver::new(webdriver_url, caps).await?;

        Ok(Droid { driver })
    }

    /// Best-effort release; a failed teardown must not mask the scrape
    /// outcome.
    pub async fn quit(self) {
        if let Err(e) = self.driver.quit().await {
            log::warn!("Failed to quit webdriver session: {:?}", e);
        }
    }
}
