pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::chromium::ChromiumDriver;
pub use config::{CliConfig, LoginConfig};
pub use core::{api_login::ApiLogin, orchestrator::LoginEngine, ui_login::UiLogin};
pub use domain::model::{ApiLoginOutcome, LoginReport, UiLoginOutcome};
pub use utils::error::{LoginError, Result};
