//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures shared by the collector and
//! the renderers: individual test results, per-suite aggregates, the derived
//! run summary, and the persisted results-file shape.
//!
//! 此模块定义了收集器和渲染器共享的核心数据结构：
//! 单个测试结果、按套件聚合的数据、派生的运行摘要以及持久化的结果文件格式。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// The outcome of a single executed test.
/// 单个已执行测试的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// The test passed. / 测试通过。
    Passed,
    /// The test failed. / 测试失败。
    Failed,
    /// The test was not executed. / 测试未执行。
    Skipped,
}

impl TestStatus {
    /// Gets the CSS class used for the status badge in HTML reports.
    pub fn css_class(&self) -> &'static str {
        match self {
            TestStatus::Passed => "status-passed",
            TestStatus::Failed => "status-failed",
            TestStatus::Skipped => "status-skipped",
        }
    }

    /// Gets the lowercase name used in results files, e.g. `passed`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the recorded outcome of one executed test.
/// Results are created by the collector and never modified afterwards.
///
/// 表示一个已执行测试的记录结果。
/// 结果由收集器创建，之后不会再被修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// The test name, unique within its suite by convention / 测试名称
    pub name: String,
    /// The outcome of the test / 测试结果状态
    pub status: TestStatus,
    /// Execution time in milliseconds / 执行时间（毫秒）
    #[serde(deserialize_with = "deserialize_duration_ms")]
    pub duration: u64,
    /// Failure detail, usually the assertion message / 失败详情，通常为断言消息
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the result was recorded / 记录结果的时间
    pub timestamp: DateTime<Utc>,
    /// The deployment target label the run was executed against / 运行所针对的部署目标标签
    #[serde(default)]
    pub environment: String,
}

impl TestResult {
    /// Checks if the test failed.
    pub fn is_failure(&self) -> bool {
        self.status == TestStatus::Failed
    }

    /// Gets the duration formatted as seconds with two decimals, e.g. `0.12s`.
    pub fn duration_display(&self) -> String {
        format_duration_ms(self.duration)
    }
}

/// A named group of results with running totals.
///
/// The counters are private and only change through [`TestSuite::push`], so
/// `total == passed + failed + skipped == results.len()` holds for every
/// suite. Stored counters are ignored on deserialization and rebuilt from
/// `results`.
///
/// 一组带有累计统计的命名测试结果。
/// 计数器是私有的，只能通过 [`TestSuite::push`] 改变；反序列化时会根据 `results` 重新计算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredSuite")]
pub struct TestSuite {
    name: String,
    total: u64,
    passed: u64,
    failed: u64,
    skipped: u64,
    /// Summed milliseconds of all results.
    duration: u64,
    results: Vec<TestResult>,
}

/// The persisted shape of a suite; only the name and the results are read.
#[derive(Deserialize)]
struct StoredSuite {
    name: String,
    #[serde(default)]
    results: Vec<TestResult>,
}

impl From<StoredSuite> for TestSuite {
    fn from(stored: StoredSuite) -> Self {
        let mut suite = TestSuite::new(stored.name);
        for result in stored.results {
            suite.push(result);
        }
        suite
    }
}

impl TestSuite {
    /// Creates an empty suite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            duration: 0,
            results: Vec::new(),
        }
    }

    /// Appends a result and updates the running totals.
    /// 追加一个结果并更新累计统计。
    pub fn push(&mut self, result: TestResult) {
        self.total += 1;
        self.duration = self.duration.saturating_add(result.duration);
        match result.status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Skipped => self.skipped += 1,
        }
        self.results.push(result);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn passed(&self) -> u64 {
        self.passed
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Summed duration of the suite in milliseconds.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Results in registration order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Checks if no result in the suite failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Global totals derived from a set of suites or from persisted statistics.
/// It is never stored; it is recomputed whenever a report is produced.
///
/// 从一组套件或持久化统计数据派生出的全局统计。
/// 它从不被存储；每次生成报告时都会重新计算。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_tests: u64,
    pub total_passed: u64,
    pub total_failed: u64,
    pub total_skipped: u64,
    /// Total duration in milliseconds / 总持续时间（毫秒）
    pub total_duration_ms: u64,
    /// Percentage of passed tests rounded to one decimal, `0.0` when no tests ran.
    /// 通过测试的百分比，保留一位小数；没有测试时为 `0.0`。
    pub success_rate: f64,
}

impl Summary {
    /// Reduces the per-suite counters into global totals.
    pub fn from_suites(suites: &[TestSuite]) -> Self {
        let mut summary = suites.iter().fold(Summary::default(), |mut acc, suite| {
            acc.total_tests += suite.total;
            acc.total_passed += suite.passed;
            acc.total_failed += suite.failed;
            acc.total_skipped += suite.skipped;
            acc.total_duration_ms = acc.total_duration_ms.saturating_add(suite.duration);
            acc
        });
        summary.success_rate = success_rate(summary.total_passed, summary.total_tests);
        summary
    }

    /// Builds a summary from persisted statistics, trusting the stored `total`.
    pub fn from_stats(stats: &RunStats) -> Self {
        Self {
            total_tests: stats.total,
            total_passed: stats.passed,
            total_failed: stats.failed,
            total_skipped: stats.skipped,
            total_duration_ms: stats.duration,
            success_rate: success_rate(stats.passed, stats.total),
        }
    }

    /// Total duration as seconds with two decimals, e.g. `0.20s`.
    pub fn duration_display(&self) -> String {
        format_duration_ms(self.total_duration_ms)
    }

    /// Success rate with one decimal, e.g. `50.0`.
    pub fn success_rate_display(&self) -> String {
        format!("{:.1}", self.success_rate)
    }

    /// Checks if the run has no failed tests.
    pub fn all_passed(&self) -> bool {
        self.total_failed == 0
    }
}

/// The `stats` object of a persisted results file, all counters in
/// milliseconds or plain counts. Missing fields default to zero, and a
/// fractional duration is rounded to whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunStats {
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub total: u64,
    /// Total run duration in milliseconds.
    #[serde(deserialize_with = "deserialize_duration_ms")]
    pub duration: u64,
}

impl From<&Summary> for RunStats {
    fn from(summary: &Summary) -> Self {
        Self {
            passed: summary.total_passed,
            failed: summary.total_failed,
            skipped: summary.total_skipped,
            total: summary.total_tests,
            duration: summary.total_duration_ms,
        }
    }
}

/// The JSON results file exchanged between a test run and the standalone
/// report command.
///
/// 测试运行与独立报告命令之间交换的 JSON 结果文件。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultsFile {
    #[serde(default)]
    pub stats: RunStats,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suites: Vec<TestSuite>,
}

/// Reads a millisecond duration that may be written as an integer or a
/// float, rounding to the nearest millisecond. Negative values are rejected.
fn deserialize_duration_ms<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = f64::deserialize(deserializer)?;
    if !ms.is_finite() || ms < 0.0 {
        return Err(de::Error::custom(format!(
            "duration must be a non-negative number of milliseconds, got {}",
            ms
        )));
    }
    Ok(ms.round() as u64)
}

/// Computes `passed / total * 100` rounded to one decimal place, or `0.0`
/// when `total` is zero.
pub fn success_rate(passed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = passed as f64 / total as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Formats milliseconds as seconds with two decimals.
/// 将毫秒格式化为保留两位小数的秒数。
pub fn format_duration_ms(ms: u64) -> String {
    format!("{:.2}s", ms as f64 / 1000.0)
}
