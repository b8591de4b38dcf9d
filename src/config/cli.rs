use crate::config::file::LoginConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "autologin")]
#[command(about = "Automated login: browser UI attempts with an API fallback")]
pub struct CliConfig {
    /// TOML configuration file; the built-in example target is used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the retry limit from the configuration file
    #[arg(long)]
    pub retries: Option<u32>,

    /// Run the browser with a visible window
    #[arg(long)]
    pub headed: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolve the effective configuration: file (or defaults) plus flag
    /// overrides. Validation happens in main, after this.
    pub fn load(&self) -> Result<LoginConfig> {
        let mut config = match &self.config {
            Some(path) => LoginConfig::from_file(path)?,
            None => LoginConfig::default(),
        };

        if let Some(retries) = self.retries {
            config.retries = retries;
        }
        if self.headed {
            config.browser.headless = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_apply() {
        let cli = CliConfig {
            config: None,
            retries: Some(7),
            headed: true,
            verbose: false,
        };

        let config = cli.load().unwrap();

        assert_eq!(config.retries, 7);
        assert!(!config.browser.headless);
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let cli = CliConfig {
            config: None,
            retries: None,
            headed: false,
            verbose: false,
        };

        let config = cli.load().unwrap();

        assert_eq!(config.retries, 3);
        assert!(config.browser.headless);
    }

    #[test]
    fn test_missing_config_file_is_an_io_error() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/nonexistent/autologin.toml")),
            retries: None,
            headed: false,
            verbose: false,
        };

        assert!(cli.load().is_err());
    }
}
