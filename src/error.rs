//! Error types for verishot
//!
//! This module provides the error type hierarchy using `thiserror`
//! for proper error handling across all components.

use thiserror::Error;

/// The main error type for verishot operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser-related errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Page interaction errors
    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    /// Capture errors (screenshots, HTML dumps)
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// Verification failures (assertion mismatches)
    #[error("Verification error: {0}")]
    Verify(#[from] VerifyError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Browser lifecycle and control errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),
}

/// Navigation errors
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Bounded wait expired (navigation, selector, or URL wait)
    #[error("Navigation timed out after {0}ms")]
    Timeout(u64),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),
}

/// Page interaction errors
#[derive(Error, Debug)]
pub enum ActionError {
    /// No element matched the locator
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Clicking an element failed
    #[error("Click failed for {0}")]
    ClickFailed(String),

    /// JavaScript execution failed
    #[error("JavaScript execution failed: {0}")]
    JsExecutionFailed(String),
}

/// Capture errors (screenshots, HTML dumps)
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Screenshot failed
    #[error("Screenshot capture failed: {0}")]
    ScreenshotFailed(String),

    /// HTML capture failed
    #[error("HTML capture failed: {0}")]
    HtmlFailed(String),

    /// Capture produced no data
    #[error("Capture produced an empty artifact: {0}")]
    EmptyArtifact(String),

    /// Writing the artifact to disk failed
    #[error("Failed to write artifact {path}: {message}")]
    WriteFailed {
        /// Destination path
        path: String,
        /// Failure detail
        message: String,
    },
}

/// Verification failures
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The post-login URL did not match the expected pattern
    #[error("URL assertion failed: expected match for `{pattern}`, got `{actual}`")]
    UrlMismatch {
        /// The pattern the URL was asserted against
        pattern: String,
        /// The URL actually observed
        actual: String,
    },
}

/// Result type alias for verishot operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }

    /// True when this error is an expired bounded navigation wait.
    ///
    /// The padding scenario handles exactly this condition (diagnostic
    /// capture, then re-raise); every other error propagates untouched.
    pub fn is_navigation_timeout(&self) -> bool {
        matches!(self, Error::Navigation(NavigationError::Timeout(_)))
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Browser(BrowserError::LaunchFailed("no chrome".to_string()));
        assert!(err.to_string().contains("Failed to launch browser"));
        assert!(err.to_string().contains("no chrome"));
    }

    #[test]
    fn test_action_error() {
        let err = ActionError::ElementNotFound("label: Email address".to_string());
        assert!(err.to_string().contains("Element not found"));
        assert!(err.to_string().contains("Email address"));
    }

    #[test]
    fn test_verify_error() {
        let err = VerifyError::UrlMismatch {
            pattern: "/app$".to_string(),
            actual: "http://localhost:5173/login".to_string(),
        };
        assert!(err.to_string().contains("/app$"));
        assert!(err.to_string().contains("/login"));
    }

    #[test]
    fn test_is_navigation_timeout() {
        let timeout = Error::Navigation(NavigationError::Timeout(5000));
        assert!(timeout.is_navigation_timeout());

        let other = Error::Navigation(NavigationError::LoadFailed("refused".to_string()));
        assert!(!other.is_navigation_timeout());

        let capture = Error::Capture(CaptureError::ScreenshotFailed("boom".to_string()));
        assert!(!capture.is_navigation_timeout());

        // CDP failures are not timeouts; expired bounded waits must reach
        // callers as NavigationError::Timeout, never as a Cdp error.
        let cdp = Error::cdp("evaluate failed");
        assert!(!cdp.is_navigation_timeout());
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
