use serde::{Deserialize, Serialize};

/// Everything the UI login path needs: where the form lives, how to find its
/// elements, and what to type into them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiTarget {
    pub login_url: String,
    pub username_field: String,
    pub password_field: String,
    pub submit_button: String,
    pub success_indicator: String,
    pub username: String,
    pub password: String,
}

/// The direct-API fallback endpoint and its credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTarget {
    pub login_url: String,
    pub username: String,
    pub password: String,
}

/// Result of the bounded-retry UI loop, tagged with how many attempts ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiLoginOutcome {
    Success { attempts: u32 },
    Exhausted { attempts: u32 },
}

impl UiLoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UiLoginOutcome::Success { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            UiLoginOutcome::Success { attempts } | UiLoginOutcome::Exhausted { attempts } => {
                *attempts
            }
        }
    }
}

/// Result of the single API fallback call. `Unreachable` covers transport
/// failures (connection refused, DNS), which are logged rather than allowed
/// to take the process down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiLoginOutcome {
    Accepted,
    Rejected { status: String },
    Unreachable { reason: String },
}

impl ApiLoginOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ApiLoginOutcome::Accepted)
    }
}

/// What a full orchestrator pass produced. `api` is `None` exactly when the
/// UI path succeeded and the fallback was never invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginReport {
    pub ui: UiLoginOutcome,
    pub api: Option<ApiLoginOutcome>,
}

impl LoginReport {
    pub fn succeeded(&self) -> bool {
        self.ui.is_success()
            || self
                .api
                .as_ref()
                .map(ApiLoginOutcome::is_accepted)
                .unwrap_or(false)
    }
}
