//! # Collector Module Unit Tests / Collector 模块单元测试
//!
//! Tests for `ResultCollector` and `SharedCollector`: lazy suite creation,
//! first-seen ordering, counter arithmetic and the persisted conversion.
//!
//! `ResultCollector` 和 `SharedCollector` 的测试：惰性创建套件、首次出现顺序、
//! 计数器运算以及持久化转换。

mod common;

use apitest_report::collector::{ResultCollector, SharedCollector};
use apitest_report::models::{TestStatus, TestSuite};
use chrono::Utc;
use std::thread;

fn assert_counts_consistent(suite: &TestSuite) {
    assert_eq!(
        suite.total(),
        suite.passed() + suite.failed() + suite.skipped(),
        "suite '{}' counters do not add up",
        suite.name()
    );
    assert_eq!(suite.total() as usize, suite.results().len());
}

#[cfg(test)]
mod collector_tests {
    use super::*;

    #[test]
    fn test_login_scenario_totals() {
        let collector = common::auth_collector();
        let summary = collector.summary();

        assert_eq!(summary.total_passed, 1);
        assert_eq!(summary.total_failed, 1);
        assert_eq!(summary.total_skipped, 0);
        assert_eq!(summary.total_tests, 2);
        assert_eq!(summary.total_duration_ms, 200);
        assert_eq!(summary.success_rate_display(), "50.0");
    }

    #[test]
    fn test_new_collector_is_empty() {
        let collector = ResultCollector::new("production");
        assert!(collector.is_empty());
        assert_eq!(collector.environment(), "production");
        assert_eq!(collector.summary().total_tests, 0);
        assert_eq!(collector.summary().success_rate, 0.0);
    }

    #[test]
    fn test_suites_keep_first_seen_order() {
        let collector = common::user_api_collector();
        let names: Vec<_> = collector.suites().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Health", "Users", "Auth"]);
    }

    #[test]
    fn test_results_are_grouped_by_suite() {
        let collector = common::user_api_collector();

        let users = collector.suite("Users").expect("Users suite should exist");
        let names: Vec<_> = users.results().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["register-user", "get-profile", "change-password", "delete-account"]
        );
        assert_eq!(users.passed(), 3);
        assert_eq!(users.failed(), 1);
        assert_eq!(users.duration(), 475);

        let auth = collector.suite("Auth").expect("Auth suite should exist");
        assert_eq!(auth.skipped(), 1);
        assert!(collector.suite("Billing").is_none());
    }

    #[test]
    fn test_counts_consistent_after_every_record() {
        let mut collector = ResultCollector::new("practice");
        let statuses = [TestStatus::Passed, TestStatus::Failed, TestStatus::Skipped];

        for i in 0..60u64 {
            let suite = format!("suite-{}", i % 4);
            let status = statuses[(i % 3) as usize];
            collector.record(&suite, &format!("test-{}", i), status, i * 7, None);

            for suite in collector.suites() {
                assert_counts_consistent(suite);
            }
        }

        let summary = collector.summary();
        assert_eq!(summary.total_tests, 60);
        assert_eq!(summary.total_passed, 20);
        assert_eq!(summary.total_failed, 20);
        assert_eq!(summary.total_skipped, 20);
        assert_eq!(summary.total_duration_ms, (0..60u64).map(|i| i * 7).sum::<u64>());
    }

    #[test]
    fn test_record_stamps_environment_and_time() {
        let before = Utc::now();
        let mut collector = ResultCollector::new("staging");
        let result = collector
            .record("Health", "health-check", TestStatus::Passed, 12, None)
            .clone();
        let after = Utc::now();

        assert_eq!(result.name, "health-check");
        assert_eq!(result.environment, "staging");
        assert_eq!(result.duration, 12);
        assert!(result.error.is_none());
        assert!(result.timestamp >= before && result.timestamp <= after);
    }

    #[test]
    fn test_record_keeps_error_text() {
        let collector = common::auth_collector();
        let auth = collector.suite("Auth").unwrap();
        assert_eq!(
            auth.results()[1].error.as_deref(),
            Some("expected 200 got 401")
        );
    }

    #[test]
    fn test_to_results_file_matches_summary() {
        let collector = common::user_api_collector();
        let file = collector.to_results_file();

        assert_eq!(file.stats.total, 7);
        assert_eq!(file.stats.passed, 5);
        assert_eq!(file.stats.failed, 1);
        assert_eq!(file.stats.skipped, 1);
        assert_eq!(file.stats.duration, 585);
        assert_eq!(file.suites.len(), 3);
        assert_eq!(file.suites, collector.suites());
    }

    #[test]
    fn test_into_suites_returns_owned_suites() {
        let suites = common::auth_collector().into_suites();
        assert_eq!(suites.len(), 1);
        assert_eq!(suites[0].name(), "Auth");
    }
}

#[cfg(test)]
mod shared_collector_tests {
    use super::*;

    #[test]
    fn test_shared_collector_serializes_parallel_workers() {
        const WORKERS: usize = 8;
        const PER_WORKER: usize = 25;

        let shared = SharedCollector::new("practice");
        let handles: Vec<_> = (0..WORKERS)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..PER_WORKER {
                        let status = if i % 5 == 0 {
                            TestStatus::Failed
                        } else {
                            TestStatus::Passed
                        };
                        shared.record(
                            "Parallel",
                            &format!("worker-{}-test-{}", worker, i),
                            status,
                            10,
                            None,
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let suites = shared.snapshot();
        assert_eq!(suites.len(), 1);
        assert_counts_consistent(&suites[0]);
        assert_eq!(suites[0].total() as usize, WORKERS * PER_WORKER);
        assert_eq!(suites[0].failed() as usize, WORKERS * (PER_WORKER / 5));
        assert_eq!(suites[0].duration(), (WORKERS * PER_WORKER * 10) as u64);
        assert_eq!(shared.summary().total_tests as usize, WORKERS * PER_WORKER);
    }

    #[test]
    fn test_shared_collector_from_existing_collector() {
        let shared = SharedCollector::from(common::auth_collector());
        shared.record("Auth", "logout", TestStatus::Passed, 20, None);

        let file = shared.to_results_file();
        assert_eq!(file.stats.total, 3);
        assert_eq!(file.stats.duration, 220);
    }

    #[test]
    fn test_shared_collector_recovers_poisoned_lock() {
        let shared = SharedCollector::new("practice");
        shared.record("Auth", "login-ok", TestStatus::Passed, 10, None);

        let worker = shared.clone();
        let outcome = thread::spawn(move || {
            worker.with_collector(|collector| {
                collector.record("Auth", "login-slow", TestStatus::Passed, 10, None);
                if collector.suite("Auth").is_some() {
                    panic!("worker crashed while holding the collector");
                }
            })
        })
        .join();
        assert!(outcome.is_err());

        // The result recorded before the panic stays in the run.
        assert_eq!(shared.summary().total_tests, 2);
        shared.record("Auth", "logout", TestStatus::Failed, 10, None);

        let suites = shared.snapshot();
        assert_counts_consistent(&suites[0]);
        assert_eq!(suites[0].total(), 3);
        assert_eq!(suites[0].failed(), 1);
        assert_eq!(shared.to_results_file().stats.total, 3);
    }
}
