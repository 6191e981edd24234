//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the report kit,
//! including file system operations, opening reports in a browser,
//! and i18n support.
//!
//! 此模块为报告工具提供基础设施服务，
//! 包括文件系统操作、在浏览器中打开报告以及国际化支持。

pub mod browser;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
