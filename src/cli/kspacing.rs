//! # kspacing 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/kspacing.rs`

use clap::Args;

/// kspacing 子命令参数
#[derive(Args, Debug)]
pub struct KspacingArgs {
    /// Electronic band gap in eV
    #[arg(long)]
    pub band_gap: f64,

    /// Gaps at or below this value (eV) are treated as metallic
    #[arg(long, default_value_t = 1e-4)]
    pub tol: f64,
}
