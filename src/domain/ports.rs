use crate::domain::model::{ApiTarget, UiTarget};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// One live browser with one page in it. The narrow surface the login loop
/// drives; errors from any call are recoverable per-attempt failures.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    async fn goto(&self, url: &str) -> Result<()>;
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;
    async fn click(&self, selector: &str) -> Result<()>;
    /// Resolves once an element matching `selector` exists, or fails after
    /// `timeout`.
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()>;
    async fn close(&self) -> Result<()>;
}

#[async_trait]
pub trait BrowserDriver: Send + Sync {
    type Session: BrowserSession;

    async fn launch(&self) -> Result<Self::Session>;
}

pub trait ConfigProvider: Send + Sync {
    fn retry_limit(&self) -> u32;
    fn ui(&self) -> &UiTarget;
    fn api(&self) -> &ApiTarget;
}
