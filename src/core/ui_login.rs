use crate::core::{BrowserDriver, BrowserSession, ConfigProvider, UiLoginOutcome};
use crate::utils::error::Result;
use std::time::Duration;

/// How long one attempt waits for the success indicator before giving up.
/// Fixed per attempt, not scaled by the retry count.
const SUCCESS_WAIT: Duration = Duration::from_millis(5000);

/// The bounded-retry UI login loop, generic over the browser port so the
/// retry semantics are testable without a real browser.
pub struct UiLogin<D: BrowserDriver, C: ConfigProvider> {
    driver: D,
    config: C,
}

impl<D: BrowserDriver, C: ConfigProvider> UiLogin<D, C> {
    pub fn new(driver: D, config: C) -> Self {
        Self { driver, config }
    }

    /// Run the retry loop against a fresh browser session. Per-attempt
    /// failures never escape the loop; only a session launch failure
    /// propagates. The session is closed exactly once on every path.
    pub async fn run(&self) -> Result<UiLoginOutcome> {
        let session = self.driver.launch().await?;

        let outcome = self.attempt_all(&session).await;

        if let Err(e) = session.close().await {
            tracing::warn!("Failed to close browser session: {}", e);
        }

        Ok(outcome)
    }

    async fn attempt_all(&self, session: &D::Session) -> UiLoginOutcome {
        let limit = self.config.retry_limit();

        for attempt in 1..=limit {
            tracing::info!("Attempt {}: trying to login via UI", attempt);

            match self.attempt_once(session).await {
                Ok(()) => {
                    tracing::info!("Login successful with UI automation");
                    return UiLoginOutcome::Success { attempts: attempt };
                }
                Err(e) => {
                    tracing::error!("UI login attempt {} failed: {}", attempt, e);
                }
            }
        }

        UiLoginOutcome::Exhausted { attempts: limit }
    }

    /// One full navigation-to-indicator cycle. Any failing step aborts this
    /// attempt only.
    async fn attempt_once(&self, session: &D::Session) -> Result<()> {
        let ui = self.config.ui();

        session.goto(&ui.login_url).await?;
        session.fill(&ui.username_field, &ui.username).await?;
        session.fill(&ui.password_field, &ui.password).await?;
        session.click(&ui.submit_button).await?;
        session
            .wait_for_selector(&ui.success_indicator, SUCCESS_WAIT)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ApiTarget, UiTarget};
    use crate::utils::error::LoginError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct TestConfig {
        retries: u32,
        ui: UiTarget,
        api: ApiTarget,
    }

    fn test_config(retries: u32) -> TestConfig {
        TestConfig {
            retries,
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

    impl ConfigProvider for TestConfig {
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

    /// Scripted session: the success indicator "appears" only on the given
    /// attempt number, and `goto` can be made to fail outright.
    #[derive(Clone, Default)]
    struct MockSession {
        succeed_on: Option<u32>,
        fail_goto: bool,
        attempts: Arc<Mutex<u32>>,
        closed: Arc<Mutex<u32>>,
    }

    #[async_trait]
    impl BrowserSession for MockSession {
        async fn goto(&self, _url: &str) -> Result<()> {
            *self.attempts.lock().unwrap() += 1;
            if self.fail_goto {
                return Err(LoginError::browser("net::ERR_CONNECTION_REFUSED"));
            }
            Ok(())
        }

        async fn fill(&self, _selector: &str, _value: &str) -> Result<()> {
            Ok(())
        }

        async fn click(&self, _selector: &str) -> Result<()> {
            Ok(())
        }

        async fn wait_for_selector(&self, selector: &str, _timeout: Duration) -> Result<()> {
            let current = *self.attempts.lock().unwrap();
            if self.succeed_on == Some(current) {
                Ok(())
            } else {
                Err(LoginError::browser(format!(
                    "timed out waiting for selector {}",
                    selector
                )))
            }
        }

        async fn close(&self) -> Result<()> {
            *self.closed.lock().unwrap() += 1;
            Ok(())
        }
    }

    struct MockDriver {
        session: MockSession,
        fail_launch: bool,
    }

    #[async_trait]
    impl BrowserDriver for MockDriver {
        type Session = MockSession;

        async fn launch(&self) -> Result<MockSession> {
            if self.fail_launch {
                return Err(LoginError::browser("could not start browser"));
            }
            Ok(self.session.clone())
        }
    }

    #[tokio::test]
    async fn test_exhausts_all_attempts_when_indicator_never_appears() {
        let session = MockSession::default();
        let driver = MockDriver {
            session: session.clone(),
            fail_launch: false,
        };
        let login = UiLogin::new(driver, test_config(3));

        let outcome = login.run().await.unwrap();

        assert_eq!(outcome, UiLoginOutcome::Exhausted { attempts: 3 });
        assert_eq!(*session.attempts.lock().unwrap(), 3);
        assert_eq!(*session.closed.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stops_retrying_after_success_on_second_attempt() {
        let session = MockSession {
            succeed_on: Some(2),
            ..MockSession::default()
        };
        let driver = MockDriver {
            session: session.clone(),
            fail_launch: false,
        };
        let login = UiLogin::new(driver, test_config(3));

        let outcome = login.run().await.unwrap();

        assert_eq!(outcome, UiLoginOutcome::Success { attempts: 2 });
        assert_eq!(*session.attempts.lock().unwrap(), 2);
        assert_eq!(*session.closed.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_first_attempt_success_needs_no_retries() {
        let session = MockSession {
            succeed_on: Some(1),
            ..MockSession::default()
        };
        let driver = MockDriver {
            session: session.clone(),
            fail_launch: false,
        };
        let login = UiLogin::new(driver, test_config(5));

        let outcome = login.run().await.unwrap();

        assert_eq!(outcome, UiLoginOutcome::Success { attempts: 1 });
        assert_eq!(*session.attempts.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_single_retry_limit_is_respected() {
        let session = MockSession::default();
        let driver = MockDriver {
            session: session.clone(),
            fail_launch: false,
        };
        let login = UiLogin::new(driver, test_config(1));

        let outcome = login.run().await.unwrap();

        assert_eq!(outcome, UiLoginOutcome::Exhausted { attempts: 1 });
        assert_eq!(*session.attempts.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_session_closed_once_even_when_every_step_errors() {
        let session = MockSession {
            fail_goto: true,
            ..MockSession::default()
        };
        let driver = MockDriver {
            session: session.clone(),
            fail_launch: false,
        };
        let login = UiLogin::new(driver, test_config(3));

        let outcome = login.run().await.unwrap();

        assert_eq!(outcome, UiLoginOutcome::Exhausted { attempts: 3 });
        assert_eq!(*session.closed.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_launch_failure_propagates() {
        let driver = MockDriver {
            session: MockSession::default(),
            fail_launch: true,
        };
        let login = UiLogin::new(driver, test_config(3));

        let result = login.run().await;

        assert!(result.is_err());
    }
}
