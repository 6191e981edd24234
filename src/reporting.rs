//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of test reports in multiple formats.
//! It renders self-contained HTML reports from collected suites or from a persisted
//! results file, and prints colorful, formatted summaries to the console with
//! internationalization support.
//!
//! 此模块处理多种格式的测试报告生成和显示。
//! 它从收集到的套件或持久化的结果文件渲染独立的 HTML 报告，
//! 并在控制台打印彩色格式化摘要，支持国际化。

pub mod console;
pub mod html;
pub mod standalone;

// Re-export common reporting functions
pub use console::{print_summary, print_warning};
pub use html::{ReportContext, generate_html_report, render_report};
pub use standalone::{load_results, render_standalone};
