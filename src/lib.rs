//! verishot - Headless Browser Verification Harness
//!
//! This crate drives a locally running web application through its login
//! flows with a headless Chromium browser and captures review screenshots.
//!
//! # Scenarios
//!
//! - **Login capture**: screenshots the marketing page, signs in through
//!   accessible-label locators, asserts the post-login URL, and screenshots
//!   the authenticated expenses view.
//! - **Padding capture**: with a 375×667 mobile viewport, performs the
//!   two-step login (email, then one-time code), waits bounded for navigation
//!   to settle, injects filler paragraphs to force vertical scroll, and
//!   screenshots the result. Expired waits produce an error screenshot and a
//!   markup dump before the failure propagates.
//!
//! # Architecture
//!
//! ```text
//! CLI ──▶ Scenario (login / padding)
//!              │
//!              ▼
//!      Browser Controller (CDP)
//!       │        │        │
//!       ▼        ▼        ▼
//!  Navigation  Actions  Capture
//!  goto/waits  fill/    screenshots
//!              click    HTML dumps
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use verishot::scenario::LoginCapture;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = LoginCapture::default().run().await?;
//!     println!("Signed in at {}", report.final_url);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod error;
pub mod scenario;

// Re-exports for convenience
pub use browser::BrowserController;
pub use error::{Error, Result};
pub use scenario::{LoginCapture, PaddingCapture};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
