//! Browser automation module
//!
//! High-level browser control through ChromiumOxide: lifecycle management,
//! navigation with bounded waits, page interaction, and capture.

pub mod actions;
pub mod capture;
pub mod controller;
pub mod navigation;

pub use actions::PageActions;
pub use capture::{CaptureFormat, CaptureOptions, CaptureResult, PageCapture};
pub use controller::{BrowserConfig, BrowserController, PageHandle};
pub use navigation::{NavigationOptions, NavigationResult, PageNavigator, WaitUntil};
