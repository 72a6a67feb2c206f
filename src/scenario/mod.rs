//! Capture scenarios
//!
//! Each scenario is one linear verification procedure against the locally
//! running target application: navigate, drive the login form, wait, and
//! write review screenshots. Scenarios launch a fresh browser per run and
//! close it on every exit path, success or failure.

pub mod login;
pub mod padding;

pub use login::{LoginCapture, LoginReport};
pub use padding::{PaddingCapture, PaddingReport};

use crate::error::{Error, NavigationError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use url::Url;

/// Default address of the locally running target server
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

/// Route of the authenticated application view
pub const APP_ROUTE: &str = "/app";

/// Pattern the post-login URL is asserted against
pub const APP_URL_PATTERN: &str = r"/app$";

/// Compile the post-login URL pattern
pub(crate) fn app_url_pattern() -> Result<Regex> {
    Regex::new(APP_URL_PATTERN).map_err(|e| Error::generic(format!("invalid URL pattern: {}", e)))
}

/// The target server and the directory verification artifacts land in
#[derive(Debug, Clone)]
pub struct Target {
    /// Base URL of the running application
    pub base_url: Url,
    /// Directory screenshots are written to
    pub out_dir: PathBuf,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            out_dir: PathBuf::from("."),
        }
    }
}

impl Target {
    /// Create a target from a base URL string and output directory
    pub fn new<P: AsRef<Path>>(base_url: &str, out_dir: P) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| NavigationError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            base_url,
            out_dir: out_dir.as_ref().to_path_buf(),
        })
    }

    /// URL of the site root
    pub fn root_url(&self) -> String {
        self.base_url.as_str().to_string()
    }

    /// URL of the authenticated app route
    pub fn app_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{}{}", base, APP_ROUTE)
    }

    /// Path of a named artifact under the output directory
    pub fn artifact(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_default() {
        let target = Target::default();
        assert_eq!(target.root_url(), "http://localhost:5173/");
        assert_eq!(target.app_url(), "http://localhost:5173/app");
        assert_eq!(target.out_dir, PathBuf::from("."));
    }

    #[test]
    fn test_target_new_rejects_bad_url() {
        assert!(Target::new("not a url", ".").is_err());
    }

    #[test]
    fn test_target_app_url_with_trailing_slash() {
        let target = Target::new("http://127.0.0.1:8080/", "/tmp/shots").unwrap();
        assert_eq!(target.app_url(), "http://127.0.0.1:8080/app");
    }

    #[test]
    fn test_target_artifact_path() {
        let target = Target::new("http://localhost:5173", "/tmp/shots").unwrap();
        assert_eq!(
            target.artifact("marketing.png"),
            PathBuf::from("/tmp/shots/marketing.png")
        );
    }

    #[test]
    fn test_app_url_pattern() {
        let pattern = app_url_pattern().unwrap();
        assert!(pattern.is_match("http://localhost:5173/app"));
        assert!(!pattern.is_match("http://localhost:5173/app/expenses"));
        assert!(!pattern.is_match("http://localhost:5173/login"));
    }
}
