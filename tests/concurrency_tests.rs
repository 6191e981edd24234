//! # Concurrency Tests using Loom
//!
//! This module uses loom to check that serialized access to a
//! `ResultCollector` keeps the per-suite counters consistent no matter how
//! recording workers interleave.

#[cfg(test)]
mod tests {
    use apitest_report::collector::ResultCollector;
    use apitest_report::models::TestStatus;
    use loom::sync::{Arc, Mutex};
    use loom::thread;

    /// Two workers race to record into the same suite while a third records
    /// into a different one. Every interleaving must end with both suites
    /// created exactly once and the arithmetic identity intact.
    #[test]
    fn test_serialized_recording_keeps_counts_consistent() {
        // We spawn a new thread with a larger stack size to prevent a stack overflow,
        // which can occur with loom's deep exploration of concurrent models.
        const STACK_SIZE: usize = 8 * 1024 * 1024; // 8 MB

        let builder = std::thread::Builder::new()
            .name("loom-test-thread".into())
            .stack_size(STACK_SIZE);

        let handle = builder
            .spawn(|| {
                loom::model(|| {
                    let collector = Arc::new(Mutex::new(ResultCollector::new("practice")));

                    let workers = [
                        ("Auth", "login-ok", TestStatus::Passed),
                        ("Auth", "login-fail", TestStatus::Failed),
                        ("Health", "health-check", TestStatus::Skipped),
                    ];

                    let handles: Vec<_> = workers
                        .into_iter()
                        .map(|(suite, test, status)| {
                            let collector = collector.clone();
                            thread::spawn(move || {
                                let mut guard = collector.lock().unwrap();
                                guard.record(suite, test, status, 40, None);
                            })
                        })
                        .collect();

                    for handle in handles {
                        handle.join().unwrap();
                    }

                    let guard = collector.lock().unwrap();
                    assert_eq!(guard.suites().len(), 2);

                    let auth = guard.suite("Auth").unwrap();
                    assert_eq!(auth.total(), 2);
                    assert_eq!(auth.passed(), 1);
                    assert_eq!(auth.failed(), 1);
                    assert_eq!(auth.duration(), 80);
                    assert_eq!(auth.total() as usize, auth.results().len());

                    let summary = guard.summary();
                    assert_eq!(summary.total_tests, 3);
                    assert_eq!(
                        summary.total_tests,
                        summary.total_passed + summary.total_failed + summary.total_skipped
                    );
                });
            })
            .unwrap();

        handle.join().unwrap();
    }
}
