//! # 统一错误处理模块
//!
//! 定义 mpflow 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mpflow 统一错误类型
#[derive(Error, Debug)]
pub enum MpflowError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid INCAR setting '{setting}'\nReason: {reason}")]
    InvalidIncarSetting { setting: String, reason: String },

    #[error("Invalid band gap: {0} (must be finite and non-negative)")]
    InvalidBandGap(f64),

    // ─────────────────────────────────────────────────────────────
    // 工作流错误
    // ─────────────────────────────────────────────────────────────
    #[error("Flow '{name}' has neither an initial nor a final relax maker")]
    EmptyFlow { name: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MpflowError>;
