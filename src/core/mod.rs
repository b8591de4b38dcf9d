pub mod api_login;
pub mod orchestrator;
pub mod ui_login;

pub use crate::domain::model::{ApiLoginOutcome, LoginReport, UiLoginOutcome};
pub use crate::domain::ports::{BrowserDriver, BrowserSession, ConfigProvider};
pub use crate::utils::error::Result;
