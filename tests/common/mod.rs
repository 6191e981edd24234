// Shared test helpers for integration tests
#![allow(dead_code)]

use apitest_report::collector::ResultCollector;
use apitest_report::models::TestStatus;
use apitest_report::reporting::html::ReportContext;
use chrono::{TimeZone, Utc};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds the two-result "Auth" run used across the reporting tests.
pub fn auth_collector() -> ResultCollector {
    let mut collector = ResultCollector::new("practice");
    collector.record("Auth", "login-ok", TestStatus::Passed, 120, None);
    collector.record(
        "Auth",
        "login-fail",
        TestStatus::Failed,
        80,
        Some("expected 200 got 401".to_string()),
    );
    collector
}

/// A collector spanning several suites, endpoints of the user API.
pub fn user_api_collector() -> ResultCollector {
    let mut collector = ResultCollector::new("staging");
    collector.record("Health", "health-check", TestStatus::Passed, 15, None);
    collector.record("Users", "register-user", TestStatus::Passed, 210, None);
    collector.record("Auth", "login-valid", TestStatus::Passed, 95, None);
    collector.record("Users", "get-profile", TestStatus::Passed, 60, None);
    collector.record(
        "Users",
        "change-password",
        TestStatus::Failed,
        130,
        Some("expected 204 got 500".to_string()),
    );
    collector.record("Auth", "logout", TestStatus::Skipped, 0, None);
    collector.record("Users", "delete-account", TestStatus::Passed, 75, None);
    collector
}

/// A context with a pinned generation time so renders are comparable.
pub fn fixed_context(locale: &str) -> ReportContext {
    let generated_at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
    ReportContext::new("API Test Report", "practice", locale).with_generated_at(generated_at)
}

/// Writes a results file with the given JSON body into `temp_dir`.
pub fn write_results_json(temp_dir: &TempDir, body: &str) -> PathBuf {
    let path = temp_dir.path().join("results.json");
    fs::write(&path, body).expect("Failed to write results file");
    path
}

/// The `{ stats: ... }` document produced by a typical run.
pub const STATS_ONLY_JSON: &str = r#"{
  "stats": {
    "passed": 6,
    "failed": 1,
    "skipped": 1,
    "total": 8,
    "duration": 4250
  }
}"#;
