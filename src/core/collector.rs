//! # Result Collector Module / 结果收集模块
//!
//! Accumulates test outcomes grouped by suite name for the lifetime of one
//! run. Suites are created lazily on the first result registered for a new
//! name and are kept in first-seen order, which is also the order in which
//! reports lay them out.
//!
//! 在一次运行的生命周期内，按套件名称累积测试结果。
//! 套件在首次注册新名称的结果时惰性创建，并保持首次出现的顺序，
//! 这也是报告中布局它们的顺序。

use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::models::{ResultsFile, RunStats, Summary, TestResult, TestStatus, TestSuite};

/// In-memory collection of suites for a single run.
///
/// `record` takes `&mut self`; callers that record from several workers
/// should go through [`SharedCollector`].
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    environment: String,
    suites: Vec<TestSuite>,
    index: HashMap<String, usize>,
}

impl ResultCollector {
    /// Creates an empty collector whose results are tagged with `environment`.
    /// 创建一个空收集器，其结果带有 `environment` 标签。
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            suites: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers one test outcome under `suite_name`.
    ///
    /// The result is stamped with the current UTC time and the collector's
    /// environment label. The suite's total, duration and the counter
    /// matching `status` are incremented.
    ///
    /// 在 `suite_name` 下注册一个测试结果。
    /// 结果带有当前 UTC 时间和收集器的环境标签。
    pub fn record(
        &mut self,
        suite_name: &str,
        test_name: &str,
        status: TestStatus,
        duration_ms: u64,
        error: Option<String>,
    ) -> &TestResult {
        let result = TestResult {
            name: test_name.to_string(),
            status,
            duration: duration_ms,
            error,
            timestamp: Utc::now(),
            environment: self.environment.clone(),
        };

        let suite = self.suite_mut(suite_name);
        suite.push(result);
        &suite.results()[suite.results().len() - 1]
    }

    fn suite_mut(&mut self, suite_name: &str) -> &mut TestSuite {
        let position = match self.index.get(suite_name) {
            Some(&position) => position,
            None => {
                self.suites.push(TestSuite::new(suite_name));
                let position = self.suites.len() - 1;
                self.index.insert(suite_name.to_string(), position);
                position
            }
        };
        &mut self.suites[position]
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Suites in first-seen order.
    pub fn suites(&self) -> &[TestSuite] {
        &self.suites
    }

    pub fn suite(&self, name: &str) -> Option<&TestSuite> {
        self.index.get(name).map(|&position| &self.suites[position])
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary::from_suites(&self.suites)
    }

    pub fn into_suites(self) -> Vec<TestSuite> {
        self.suites
    }

    /// Converts the collected state into the persisted results-file shape.
    /// 将收集到的状态转换为持久化的结果文件格式。
    pub fn to_results_file(&self) -> ResultsFile {
        ResultsFile {
            stats: RunStats::from(&self.summary()),
            suites: self.suites.clone(),
        }
    }
}

/// A cloneable handle that serializes access to one [`ResultCollector`].
///
/// Every clone records into the same run. A panic in another worker while
/// holding the lock does not invalidate the data, because each `record` is
/// a single append, so a poisoned lock is recovered.
///
/// 一个可克隆的句柄，串行化对同一个 [`ResultCollector`] 的访问。
#[derive(Debug, Clone, Default)]
pub struct SharedCollector {
    inner: Arc<Mutex<ResultCollector>>,
}

impl SharedCollector {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ResultCollector::new(environment))),
        }
    }

    /// Runs `f` with exclusive access to the underlying collector.
    ///
    /// A lock poisoned by a panicking holder is recovered, so results
    /// recorded before the panic stay in the run.
    ///
    /// 以独占方式访问底层收集器并运行 `f`；被恐慌的持有者毒化的锁会被恢复。
    pub fn with_collector<R>(&self, f: impl FnOnce(&mut ResultCollector) -> R) -> R {
        let mut collector = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *collector)
    }

    /// Registers one test outcome; see [`ResultCollector::record`].
    pub fn record(
        &self,
        suite_name: &str,
        test_name: &str,
        status: TestStatus,
        duration_ms: u64,
        error: Option<String>,
    ) -> TestResult {
        self.with_collector(|collector| {
            collector
                .record(suite_name, test_name, status, duration_ms, error)
                .clone()
        })
    }

    /// Copies out the suites collected so far.
    pub fn snapshot(&self) -> Vec<TestSuite> {
        self.with_collector(|collector| collector.suites().to_vec())
    }

    pub fn summary(&self) -> Summary {
        self.with_collector(|collector| collector.summary())
    }

    pub fn to_results_file(&self) -> ResultsFile {
        self.with_collector(|collector| collector.to_results_file())
    }
}

impl From<ResultCollector> for SharedCollector {
    fn from(collector: ResultCollector) -> Self {
        Self {
            inner: Arc::new(Mutex::new(collector)),
        }
    }
}
