//! Marketing/login capture scenario
//!
//! Screenshots the marketing page, signs in through the accessible-label
//! locators, asserts the post-login URL, and screenshots the authenticated
//! expenses view. Any step failure aborts the remaining steps; the URL
//! assertion failing is reported as `VerifyError::UrlMismatch`.

use crate::browser::{
    BrowserConfig, BrowserController, CaptureOptions, NavigationOptions, PageActions, PageCapture,
    PageNavigator,
};
use crate::error::{Result, VerifyError};
use crate::scenario::Target;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Artifact name for the marketing-page screenshot
pub const MARKETING_SHOT: &str = "marketing.png";

/// Artifact name for the authenticated-view screenshot
pub const APP_VIEW_SHOT: &str = "app-view-expenses.png";

/// Default sign-in email
pub const DEFAULT_EMAIL: &str = "user@example.com";

/// Default sign-in password
pub const DEFAULT_PASSWORD: &str = "password";

/// How long the post-login URL assertion keeps polling before failing
const URL_ASSERT_TIMEOUT_MS: u64 = 5000;

/// The marketing/login verification procedure
#[derive(Debug, Clone)]
pub struct LoginCapture {
    /// Target server and artifact directory
    pub target: Target,
    /// Email filled into the control labelled "Email address"
    pub email: String,
    /// Password filled into the control labelled "Password"
    pub password: String,
    /// Browser launch configuration
    pub browser: BrowserConfig,
}

impl Default for LoginCapture {
    fn default() -> Self {
        Self::new(Target::default())
    }
}

/// Outcome of a successful login capture
#[derive(Debug)]
pub struct LoginReport {
    /// Path of the marketing-page screenshot
    pub marketing_shot: PathBuf,
    /// Path of the authenticated-view screenshot
    pub app_shot: PathBuf,
    /// URL observed after sign-in
    pub final_url: String,
}

impl LoginCapture {
    /// Create the scenario with the fixture credentials
    pub fn new(target: Target) -> Self {
        Self {
            target,
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            browser: BrowserConfig::default(),
        }
    }

    /// Run the procedure end to end
    ///
    /// The browser is closed on every exit path before the outcome is
    /// returned, so a failed assertion never leaks the browser process.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<LoginReport> {
        let browser = BrowserController::with_config(self.browser.clone()).await?;

        let outcome = self.capture(&browser).await;
        let closed = browser.close().await;

        let report = outcome?;
        closed?;

        info!(
            final_url = %report.final_url,
            "Login capture complete"
        );
        Ok(report)
    }

    async fn capture(&self, browser: &BrowserController) -> Result<LoginReport> {
        let page = browser.new_page().await?;
        let nav = NavigationOptions::from_config(&self.browser);

        // Marketing page
        PageNavigator::goto(&page, &self.target.root_url(), Some(nav.clone())).await?;
        let marketing_shot = self.target.artifact(MARKETING_SHOT);
        PageCapture::screenshot_to_file(&page, &CaptureOptions::png(), &marketing_shot).await?;

        // Login
        PageNavigator::goto(&page, &self.target.app_url(), Some(nav)).await?;
        PageActions::fill_by_label(&page, "Email address", &self.email).await?;
        PageActions::fill_by_label(&page, "Password", &self.password).await?;
        PageActions::click_by_role(&page, "button", "Sign in").await?;

        // The sign-in must land back on the app route
        let pattern = super::app_url_pattern()?;
        let final_url =
            match PageNavigator::wait_for_url(&page, &pattern, URL_ASSERT_TIMEOUT_MS).await {
                Ok(url) => url,
                Err(err) if err.is_navigation_timeout() => {
                    let actual = PageNavigator::current_href(&page)
                        .await
                        .unwrap_or_else(|_| "<unavailable>".to_string());
                    return Err(VerifyError::UrlMismatch {
                        pattern: pattern.as_str().to_string(),
                        actual,
                    }
                    .into());
                }
                Err(err) => return Err(err),
            };

        // App - view expenses
        let app_shot = self.target.artifact(APP_VIEW_SHOT);
        PageCapture::screenshot_to_file(&page, &CaptureOptions::png(), &app_shot).await?;

        Ok(LoginReport {
            marketing_shot,
            app_shot,
            final_url,
        })
    }
}
