use crate::domain::ports::{BrowserDriver, BrowserSession};
use crate::utils::error::{LoginError, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Poll interval while waiting for a selector to appear.
const SELECTOR_POLL: Duration = Duration::from_millis(250);

/// Launches Chrome/Chromium over the DevTools Protocol and hands out one page
/// per session.
pub struct ChromiumDriver {
    headless: bool,
}

impl ChromiumDriver {
    pub fn new(headless: bool) -> Self {
        Self { headless }
    }
}

#[async_trait]
impl BrowserDriver for ChromiumDriver {
    type Session = CdpSession;

    async fn launch(&self) -> Result<CdpSession> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-first-run")
            .arg("--no-default-browser-check");
        if !self.headless {
            builder = builder.with_head();
        }
        let config = builder
            .build()
            .map_err(|e| LoginError::browser(format!("Failed to configure browser: {}", e)))?;

        let (browser, mut handler) = Browser::launch(config).await?;

        // The handler stream must be pumped for the whole session lifetime or
        // every CDP call stalls.
        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let page = browser.new_page("about:blank").await?;
        tracing::debug!("Browser session started");

        Ok(CdpSession {
            browser: Mutex::new(browser),
            handler_task,
            page,
        })
    }
}

pub struct CdpSession {
    browser: Mutex<Browser>,
    handler_task: JoinHandle<()>,
    page: Page,
}

impl Drop for CdpSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

#[async_trait]
impl BrowserSession for CdpSession {
    async fn goto(&self, url: &str) -> Result<()> {
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let element = self.page.find_element(selector).await?;
        element.click().await?;
        element.type_str(value).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.page.find_element(selector).await?.click().await?;
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(LoginError::browser(format!(
                    "Timed out after {}ms waiting for selector {}",
                    timeout.as_millis(),
                    selector
                )));
            }
            tokio::time::sleep(SELECTOR_POLL).await;
        }
    }

    async fn close(&self) -> Result<()> {
        let mut browser = self.browser.lock().await;
        browser.close().await?;
        if let Err(e) = browser.wait().await {
            tracing::debug!("Browser process did not exit cleanly: {}", e);
        }
        self.handler_task.abort();
        tracing::debug!("Browser session closed");
        Ok(())
    }
}
