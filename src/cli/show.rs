//! # show 子命令 CLI 定义
//!
//! 展示单个 maker 解析后的 INCAR/KPOINTS/POTCAR 设置
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/show.rs`

use mpflow::models::MakerKind;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Maker 预设选择
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MakerChoice {
    /// MP PreRelax (PBEsol)
    PreRelax,
    /// MP Relax (r2SCAN)
    Relax,
}

impl From<MakerChoice> for MakerKind {
    fn from(choice: MakerChoice) -> Self {
        match choice {
            MakerChoice::PreRelax => MakerKind::PreRelax,
            MakerChoice::Relax => MakerKind::MetaGgaRelax,
        }
    }
}

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Maker preset to show
    #[arg(value_enum)]
    pub maker: MakerChoice,

    /// Band gap (eV) used to derive KSPACING, if the maker supports it
    #[arg(long)]
    pub band_gap: Option<f64>,

    /// Gaps at or below this value (eV) are treated as metallic
    #[arg(long, default_value_t = 1e-4)]
    pub tol: f64,

    /// Override an INCAR tag (e.g. --set EDIFFG=-0.05), repeatable
    #[arg(long = "set", value_name = "TAG=VALUE")]
    pub overrides: Vec<String>,

    /// Export the resolved INCAR to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
