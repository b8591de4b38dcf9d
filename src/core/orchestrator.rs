use crate::core::api_login::ApiLogin;
use crate::core::ui_login::UiLogin;
use crate::core::{BrowserDriver, ConfigProvider, LoginReport, Result};

/// Composes the two login paths into a single forward pass: the UI retry
/// loop, then the API fallback if and only if the loop exhausted its
/// attempts. No retries cross the UI/API boundary.
pub struct LoginEngine<D: BrowserDriver, C: ConfigProvider> {
    ui: UiLogin<D, C>,
    api: ApiLogin<C>,
}

impl<D: BrowserDriver, C: ConfigProvider + Clone> LoginEngine<D, C> {
    pub fn new(driver: D, config: C) -> Self {
        Self {
            ui: UiLogin::new(driver, config.clone()),
            api: ApiLogin::new(config),
        }
    }

    /// The fallback outcome is recorded in the report but never triggers
    /// further work; the pass is terminal either way.
    pub async fn run(&self) -> Result<LoginReport> {
        let ui = self.ui.run().await?;

        if ui.is_success() {
            return Ok(LoginReport { ui, api: None });
        }

        tracing::info!("Switching to API login");
        let api = self.api.run().await;

        Ok(LoginReport {
            ui,
            api: Some(api),
        })
    }
}
