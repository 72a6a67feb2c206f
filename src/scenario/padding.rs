//! Responsive padding capture scenario
//!
//! With a mobile viewport, performs the two-step login (email, then a
//! one-time code), waits bounded for navigation to settle on the app
//! route, injects filler paragraphs to force vertical scroll, and
//! screenshots the result. An expired bounded wait triggers a diagnostic
//! capture (error screenshot plus a markup dump on the diagnostic stream)
//! before the original timeout is re-raised.

use crate::browser::{
    BrowserConfig, BrowserController, CaptureOptions, NavigationOptions, PageActions, PageCapture,
    PageHandle, PageNavigator,
};
use crate::error::Result;
use crate::scenario::Target;
use std::path::PathBuf;
use tracing::{error, info, instrument, warn};

/// Artifact name for the verification screenshot
pub const VERIFICATION_SHOT: &str = "verification.png";

/// Artifact name for the diagnostic screenshot on the timeout path
pub const ERROR_SHOT: &str = "error.png";

/// Default two-step login email
pub const DEFAULT_EMAIL: &str = "test@example.com";

/// Default one-time code
pub const DEFAULT_CODE: &str = "123456";

/// Mobile viewport (iPhone 8)
pub const MOBILE_VIEWPORT: (u32, u32) = (375, 667);

/// Selector of the content container the filler is appended to
pub const CONTENT_CONTAINER: &str = r".p-4.lg\:p-8.pb-20.lg\:pb-8";

/// Number of filler paragraphs injected to force scroll
pub const FILLER_PARAGRAPHS: u32 = 20;

/// Default bound on the post-login navigation wait
pub const DEFAULT_NAV_TIMEOUT_MS: u64 = 5000;

/// Bound on the waits for the login form fields to appear
const ELEMENT_WAIT_MS: u64 = 30000;

/// The responsive padding verification procedure
#[derive(Debug, Clone)]
pub struct PaddingCapture {
    /// Target server and artifact directory
    pub target: Target,
    /// Email filled into `input[type="email"]`
    pub email: String,
    /// One-time code filled into `input[type="text"]`
    pub code: String,
    /// Bound on the post-login navigation wait, in milliseconds
    pub nav_timeout_ms: u64,
    /// Browser launch configuration; the viewport is forced to 375×667
    pub browser: BrowserConfig,
}

impl Default for PaddingCapture {
    fn default() -> Self {
        Self::new(Target::default())
    }
}

/// Outcome of a successful padding capture
#[derive(Debug)]
pub struct PaddingReport {
    /// Path of the verification screenshot
    pub verification_shot: PathBuf,
    /// URL observed once navigation settled
    pub final_url: String,
    /// Paragraphs actually injected (0 when the container was absent)
    pub injected: u32,
}

impl PaddingCapture {
    /// Create the scenario with the fixture credentials
    pub fn new(target: Target) -> Self {
        Self {
            target,
            email: DEFAULT_EMAIL.to_string(),
            code: DEFAULT_CODE.to_string(),
            nav_timeout_ms: DEFAULT_NAV_TIMEOUT_MS,
            browser: BrowserConfig::default(),
        }
    }

    /// Browser configuration with the mobile viewport applied
    fn browser_config(&self) -> BrowserConfig {
        let (width, height) = MOBILE_VIEWPORT;
        let mut config = self.browser.clone();
        config.width = width;
        config.height = height;
        config.mobile = true;
        config
    }

    /// Run the procedure end to end
    ///
    /// The browser is closed on every exit path, including the diagnostic
    /// one, before the outcome is returned.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<PaddingReport> {
        let browser = BrowserController::with_config(self.browser_config()).await?;

        let outcome = self.capture(&browser).await;
        let closed = browser.close().await;

        let report = outcome?;
        closed?;

        info!(
            final_url = %report.final_url,
            injected = report.injected,
            "Padding capture complete"
        );
        Ok(report)
    }

    async fn capture(&self, browser: &BrowserController) -> Result<PaddingReport> {
        let page = browser.new_page().await?;

        match self.drive(&page).await {
            Ok(report) => Ok(report),
            Err(err) if err.is_navigation_timeout() => {
                // Diagnostics are best effort; the original timeout is
                // what the caller sees.
                self.capture_diagnostics(&page).await;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    async fn drive(&self, page: &PageHandle) -> Result<PaddingReport> {
        let nav = NavigationOptions::from_config(&self.browser);
        PageNavigator::goto(page, &self.target.app_url(), Some(nav)).await?;

        // Step one: email
        PageNavigator::wait_for_selector(page, r#"input[type="email"]"#, ELEMENT_WAIT_MS).await?;
        PageActions::fill(page, r#"input[type="email"]"#, &self.email).await?;
        PageActions::click(page, r#"button[type="submit"]"#).await?;

        // Step two: one-time code
        PageNavigator::wait_for_selector(page, r#"input[type="text"]"#, ELEMENT_WAIT_MS).await?;
        PageActions::fill(page, r#"input[type="text"]"#, &self.code).await?;
        PageActions::click(page, r#"button[type="submit"]"#).await?;

        // Navigation must settle back on the app route within the bound
        let pattern = super::app_url_pattern()?;
        let final_url = PageNavigator::wait_for_url(page, &pattern, self.nav_timeout_ms).await?;

        // Force vertical scroll so the bottom padding is visible
        let injected =
            PageActions::inject_filler(page, CONTENT_CONTAINER, FILLER_PARAGRAPHS).await?;
        if injected == 0 {
            warn!(
                "content container {} not found; screenshot reflects the unmodified page",
                CONTENT_CONTAINER
            );
        }

        let verification_shot = self.target.artifact(VERIFICATION_SHOT);
        PageCapture::screenshot_to_file(page, &CaptureOptions::png(), &verification_shot).await?;

        Ok(PaddingReport {
            verification_shot,
            final_url,
            injected,
        })
    }

    /// Capture the error screenshot and dump the page markup
    async fn capture_diagnostics(&self, page: &PageHandle) {
        error!(
            "navigation did not settle within {}ms; capturing diagnostics",
            self.nav_timeout_ms
        );

        let shot = self.target.artifact(ERROR_SHOT);
        if let Err(e) =
            PageCapture::screenshot_to_file(page, &CaptureOptions::viewport_png(), &shot).await
        {
            warn!("diagnostic screenshot failed: {}", e);
        }

        match PageCapture::html(page).await {
            Ok(html) => eprintln!("{}", html),
            Err(e) => warn!("diagnostic markup dump failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_capture_defaults() {
        let scenario = PaddingCapture::default();
        assert_eq!(scenario.email, "test@example.com");
        assert_eq!(scenario.code, "123456");
        assert_eq!(scenario.nav_timeout_ms, 5000);
    }

    #[test]
    fn test_browser_config_forces_mobile_viewport() {
        let scenario = PaddingCapture::default();
        let config = scenario.browser_config();
        assert_eq!(config.width, 375);
        assert_eq!(config.height, 667);
        assert!(config.mobile);
        assert!(config.headless);
    }

    #[test]
    fn test_container_selector_is_tailwind_escaped() {
        // The selector targets escaped responsive utility classes
        assert!(CONTENT_CONTAINER.contains(r"lg\:p-8"));
        assert!(CONTENT_CONTAINER.contains("pb-20"));
    }

    #[test]
    fn test_artifact_names() {
        let scenario = PaddingCapture::default();
        assert_eq!(
            scenario.target.artifact(VERIFICATION_SHOT),
            PathBuf::from("./verification.png")
        );
        assert_eq!(
            scenario.target.artifact(ERROR_SHOT),
            PathBuf::from("./error.png")
        );
    }
}
