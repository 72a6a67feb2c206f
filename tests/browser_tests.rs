//! Browser module tests
//!
//! These tests verify the browser configuration, capture, and navigation
//! types. Full browser integration tests require a running Chrome/Chromium
//! instance and the target web application.

use verishot::browser::{
    BrowserConfig, CaptureFormat, CaptureOptions, CaptureResult, NavigationOptions,
    NavigationResult, WaitUntil,
};

#[test]
fn test_browser_config_default() {
    let config = BrowserConfig::default();
    assert!(config.headless);
    assert_eq!(config.width, 1280);
    assert_eq!(config.height, 800);
    assert!(!config.mobile);
    assert!(config.sandbox);
    assert_eq!(config.timeout_ms, 30000);
    assert!(config.chrome_path.is_none());
    assert!(config.extra_args.is_empty());
}

#[test]
fn test_browser_config_builder() {
    let config = BrowserConfig::builder()
        .headless(false)
        .viewport(375, 667)
        .mobile(true)
        .sandbox(false)
        .timeout_ms(60000)
        .chrome_path("/usr/bin/chromium")
        .arg("--disable-gpu")
        .arg("--no-first-run")
        .build();

    assert!(!config.headless);
    assert_eq!(config.width, 375);
    assert_eq!(config.height, 667);
    assert!(config.mobile);
    assert!(!config.sandbox);
    assert_eq!(config.timeout_ms, 60000);
    assert_eq!(config.chrome_path, Some("/usr/bin/chromium".to_string()));
    assert_eq!(config.extra_args.len(), 2);
}

#[test]
fn test_capture_format_default() {
    let format = CaptureFormat::default();
    assert_eq!(format, CaptureFormat::Png);
}

#[test]
fn test_capture_format_serialization() {
    let formats = [
        (CaptureFormat::Png, "\"png\""),
        (CaptureFormat::Jpeg, "\"jpeg\""),
    ];

    for (format, expected) in formats {
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, expected);
    }
}

#[test]
fn test_capture_options_default() {
    let opts = CaptureOptions::default();
    assert_eq!(opts.format, CaptureFormat::Png);
    assert_eq!(opts.quality, 85);
    assert!(opts.full_page);
}

#[test]
fn test_capture_options_factories() {
    let png = CaptureOptions::png();
    assert_eq!(png.format, CaptureFormat::Png);
    assert!(png.full_page);

    let viewport = CaptureOptions::viewport_png();
    assert_eq!(viewport.format, CaptureFormat::Png);
    assert!(!viewport.full_page);

    let jpeg = CaptureOptions::jpeg(90);
    assert_eq!(jpeg.format, CaptureFormat::Jpeg);
    assert_eq!(jpeg.quality, 90);
}

#[test]
fn test_capture_options_serialization() {
    let opts = CaptureOptions {
        format: CaptureFormat::Jpeg,
        quality: 75,
        full_page: false,
    };

    let json = serde_json::to_string(&opts).unwrap();
    assert!(json.contains("\"format\":\"jpeg\""));
    assert!(json.contains("\"quality\":75"));
    assert!(json.contains("\"full_page\":false"));

    let parsed: CaptureOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.format, CaptureFormat::Jpeg);
    assert_eq!(parsed.quality, 75);
    assert!(!parsed.full_page);
}

#[test]
fn test_capture_options_deserialization_defaults() {
    // Missing fields fall back to the PNG full-page defaults
    let parsed: CaptureOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.format, CaptureFormat::Png);
    assert_eq!(parsed.quality, 85);
    assert!(parsed.full_page);
}

#[test]
fn test_capture_result_methods() {
    let result = CaptureResult {
        data: b"hello world".to_vec(),
        format: CaptureFormat::Png,
        size: 11,
    };

    assert_eq!(result.mime_type(), "image/png");
    assert_eq!(result.extension(), "png");
    assert_eq!(result.to_base64(), "aGVsbG8gd29ybGQ=");
}

#[test]
fn test_capture_result_jpeg_mime_type() {
    let result = CaptureResult {
        data: vec![],
        format: CaptureFormat::Jpeg,
        size: 0,
    };
    assert_eq!(result.mime_type(), "image/jpeg");
    assert_eq!(result.extension(), "jpg");
}

#[test]
fn test_navigation_options_default() {
    let opts = NavigationOptions::default();
    assert_eq!(opts.timeout_ms, 30000);
    assert_eq!(opts.wait_until, WaitUntil::Load);
}

#[test]
fn test_wait_until_variants() {
    assert_ne!(WaitUntil::Load, WaitUntil::DomContentLoaded);
    assert_eq!(WaitUntil::Load, WaitUntil::Load);
}

#[test]
fn test_navigation_result_structure() {
    let result = NavigationResult {
        final_url: "http://localhost:5173/app".to_string(),
        title: Some("Expenses".to_string()),
        duration_ms: 1500,
    };

    assert_eq!(result.final_url, "http://localhost:5173/app");
    assert_eq!(result.title, Some("Expenses".to_string()));
    assert_eq!(result.duration_ms, 1500);
}
