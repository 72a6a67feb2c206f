//! Page navigation and bounded waits
//!
//! This module handles URL navigation with timeout handling, plus the
//! bounded waits the capture scenarios rely on: wait-for-selector and
//! wait-for-URL. Waits fail with `NavigationError::Timeout` when the
//! target state is not reached within the allotted duration.

use crate::browser::{BrowserConfig, PageHandle};
use crate::error::{Error, NavigationError, Result};
use regex::Regex;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Poll interval for bounded waits
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Options for page navigation
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// Wait until condition (default: load)
    pub wait_until: WaitUntil,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            wait_until: WaitUntil::Load,
        }
    }
}

impl NavigationOptions {
    /// Options honoring a browser config's navigation timeout
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self {
            timeout_ms: config.timeout_ms,
            ..Self::default()
        }
    }
}

/// Condition to wait for after navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitUntil {
    /// Wait until load event fires
    Load,
    /// Wait until DOMContentLoaded event fires
    DomContentLoaded,
}

/// Result of a navigation operation
#[derive(Debug)]
pub struct NavigationResult {
    /// Final URL after any redirects
    pub final_url: String,
    /// Page title
    pub title: Option<String>,
    /// Navigation duration in milliseconds
    pub duration_ms: u64,
}

/// Script polling for a selector; resolves `true` when the element exists,
/// `false` when the bound expires. It never rejects: a rejected promise
/// would surface as a CDP error and hide the timeout condition.
fn selector_wait_script(selector: &str, timeout_ms: u64) -> String {
    format!(
        r#"
            new Promise((resolve) => {{
                const timeout = {};
                const start = Date.now();

                function check() {{
                    const el = document.querySelector('{}');
                    if (el) {{
                        resolve(true);
                    }} else if (Date.now() - start > timeout) {{
                        resolve(false);
                    }} else {{
                        requestAnimationFrame(check);
                    }}
                }}
                check();
            }})
        "#,
        timeout_ms,
        selector.replace('\\', "\\\\").replace('\'', "\\'")
    )
}

/// Page navigator with bounded-wait capabilities
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL
    ///
    /// A single attempt, bounded by the configured timeout. Verification
    /// runs never retry: a failed step aborts the whole procedure.
    #[instrument(skip(page))]
    pub async fn goto(
        page: &PageHandle,
        url: &str,
        options: Option<NavigationOptions>,
    ) -> Result<NavigationResult> {
        let opts = options.unwrap_or_default();
        let start = Instant::now();

        if !url.starts_with("http://")
            && !url.starts_with("https://")
            && !url.starts_with("file://")
        {
            return Err(NavigationError::InvalidUrl(format!(
                "URL must start with http://, https://, or file://: {}",
                url
            ))
            .into());
        }

        info!("Navigating to: {}", url);

        let timeout = Duration::from_millis(opts.timeout_ms);
        let nav_future = page.page.goto(url);
        tokio::time::timeout(timeout, nav_future)
            .await
            .map_err(|_| NavigationError::Timeout(opts.timeout_ms))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        Self::wait_for_ready(&page.page, &opts).await?;

        let final_url = page
            .page
            .url()
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .unwrap_or_else(|| url.to_string());

        let title = page
            .page
            .evaluate("document.title")
            .await
            .ok()
            .and_then(|v| v.into_value::<String>().ok());

        page.set_url(final_url.clone()).await;

        let duration_ms = start.elapsed().as_millis() as u64;
        debug!("Navigation complete: {} -> {}", url, final_url);

        Ok(NavigationResult {
            final_url,
            title,
            duration_ms,
        })
    }

    /// Wait for page readiness based on the wait_until condition
    async fn wait_for_ready(page: &chromiumoxide::Page, opts: &NavigationOptions) -> Result<()> {
        let script = match opts.wait_until {
            WaitUntil::Load => {
                r#"
                    new Promise(resolve => {
                        if (document.readyState === 'complete') {
                            resolve(true);
                        } else {
                            window.addEventListener('load', () => resolve(true));
                        }
                    })
                "#
            }
            WaitUntil::DomContentLoaded => {
                r#"
                    new Promise(resolve => {
                        if (document.readyState !== 'loading') {
                            resolve(true);
                        } else {
                            document.addEventListener('DOMContentLoaded', () => resolve(true));
                        }
                    })
                "#
            }
        };

        let timeout = Duration::from_millis(opts.timeout_ms);
        tokio::time::timeout(timeout, page.evaluate(script))
            .await
            .map_err(|_| NavigationError::Timeout(opts.timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        Ok(())
    }

    /// Wait for a specific element to appear
    ///
    /// Expiry is `NavigationError::Timeout`, the same condition an expired
    /// URL wait produces, so callers classify both with one check.
    #[instrument(skip(page))]
    pub async fn wait_for_selector(
        page: &PageHandle,
        selector: &str,
        timeout_ms: u64,
    ) -> Result<()> {
        let script = selector_wait_script(selector, timeout_ms);

        let timeout = Duration::from_millis(timeout_ms + 1000);
        let found = tokio::time::timeout(timeout, page.page.evaluate(script.as_str()))
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?
            .into_value::<bool>()
            .map_err(|e| Error::cdp(e.to_string()))?;

        if !found {
            return Err(NavigationError::Timeout(timeout_ms).into());
        }

        debug!("Selector appeared: {}", selector);
        Ok(())
    }

    /// Wait for the page URL to match a pattern
    ///
    /// Polls `window.location.href` until the pattern matches, returning the
    /// matched URL. Expiry is `NavigationError::Timeout` carrying the bound.
    #[instrument(skip(page, pattern), fields(pattern = pattern.as_str()))]
    pub async fn wait_for_url(
        page: &PageHandle,
        pattern: &Regex,
        timeout_ms: u64,
    ) -> Result<String> {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);

        loop {
            let href = Self::current_href(page).await?;
            if pattern.is_match(&href) {
                page.set_url(href.clone()).await;
                debug!("URL matched: {}", href);
                return Ok(href);
            }

            if Instant::now() >= deadline {
                debug!("URL wait expired at: {}", href);
                return Err(NavigationError::Timeout(timeout_ms).into());
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Read the live location of the page
    pub async fn current_href(page: &PageHandle) -> Result<String> {
        page.page
            .evaluate("window.location.href")
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .into_value::<String>()
            .map_err(|e| Error::cdp(e.to_string()))
    }
}
