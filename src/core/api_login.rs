use crate::core::{ApiLoginOutcome, ConfigProvider};
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// The direct-API fallback: one JSON POST, no retries. Every failure mode is
/// folded into the outcome and logged; nothing escapes to the caller.
pub struct ApiLogin<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ApiLogin<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub async fn run(&self) -> ApiLoginOutcome {
        let api = self.config.api();

        tracing::info!("Attempting to login via API");
        tracing::debug!("POST {}", api.login_url);

        let request = self.client.post(&api.login_url).json(&Credentials {
            username: &api.username,
            password: &api.password,
        });

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("API login request failed: {}", e);
                return ApiLoginOutcome::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        if status.is_success() {
            tracing::info!("Login successful with API");
            ApiLoginOutcome::Accepted
        } else {
            let status_text = status.canonical_reason().unwrap_or(status.as_str());
            tracing::error!("API login failed: {}", status_text);
            ApiLoginOutcome::Rejected {
                status: status_text.to_string(),
            }
        }
    }
}
