//! # flow 子命令 CLI 定义
//!
//! 规划 MP Meta-GGA 两步弛豫工作流
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/flow.rs`

use clap::Args;

/// flow 子命令参数
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// Flow name (defaults to "MP Meta-GGA Relax")
    #[arg(long)]
    pub name: Option<String>,

    /// Skip the GGA pre-relaxation step
    #[arg(long, default_value_t = false)]
    pub no_initial: bool,

    /// Skip the meta-GGA relaxation step
    #[arg(long, default_value_t = false)]
    pub no_final: bool,

    /// Band gap (eV) from the pre-relaxation, used for the final KSPACING
    #[arg(long)]
    pub band_gap: Option<f64>,

    /// Gaps at or below this value (eV) are treated as metallic
    #[arg(long, default_value_t = 1e-4)]
    pub tol: f64,

    /// Override an INCAR tag on every step (e.g. --set NSW=200), repeatable
    #[arg(long = "set", value_name = "TAG=VALUE")]
    pub overrides: Vec<String>,
}
