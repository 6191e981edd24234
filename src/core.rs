//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the report kit:
//! the data models, the result collector and the report configuration.
//!
//! 此模块包含报告工具的核心功能：
//! 数据模型、结果收集器和报告配置。

pub mod collector;
pub mod config;
pub mod models;

// Re-exports
pub use collector::{ResultCollector, SharedCollector};
pub use config::ReportConfig;
pub use models::{ResultsFile, RunStats, Summary, TestResult, TestStatus, TestSuite};
