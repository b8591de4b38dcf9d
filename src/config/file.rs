use crate::domain::model::{ApiTarget, UiTarget};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LoginError, Result};
use crate::utils::validation::{
    validate_non_empty, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_retries() -> u32 {
    3
}

fn default_headless() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_headless")]
    pub headless: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self { headless: true }
    }
}

/// The whole configuration document. Loaded once at startup and never
/// mutated afterwards; components receive it by clone or reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default)]
    pub browser: BrowserConfig,
    pub ui: UiTarget,
    pub api: ApiTarget,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            browser: BrowserConfig::default(),
            ui: UiTarget {
                login_url: "https://example.com/login".to_string(),
                username_field: "#username".to_string(),
                password_field: "#password".to_string(),
                submit_button: "#loginButton".to_string(),
                success_indicator: "#successElement".to_string(),
                username: "user".to_string(),
                password: "password".to_string(),
            },
            api: ApiTarget {
                login_url: "https://example.com/api/login".to_string(),
                username: "user".to_string(),
                password: "password".to_string(),
            },
        }
    }
}

impl LoginConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LoginError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LoginError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` references with environment variable values, so
    /// credentials can stay out of the file. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for LoginConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("retries", self.retries, 1)?;

        validate_url("ui.login_url", &self.ui.login_url)?;
        validate_non_empty("ui.username_field", &self.ui.username_field)?;
        validate_non_empty("ui.password_field", &self.ui.password_field)?;
        validate_non_empty("ui.submit_button", &self.ui.submit_button)?;
        validate_non_empty("ui.success_indicator", &self.ui.success_indicator)?;
        validate_non_empty("ui.username", &self.ui.username)?;

        validate_url("api.login_url", &self.api.login_url)?;
        validate_non_empty("api.username", &self.api.username)?;

        Ok(())
    }
}

impl ConfigProvider for LoginConfig {
    fn retry_limit(&self) -> u32 {
        self.retries
    }

    fn ui(&self) -> &UiTarget {
        &self.ui
    }

    fn api(&self) -> &ApiTarget {
        &self.api
    }
}
