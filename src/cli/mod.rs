//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `kspacing`: 由带隙推导 KSPACING
//! - `show`: 展示单个 maker 解析后的输入设置
//! - `flow`: 规划 MP Meta-GGA 两步弛豫工作流
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: kspacing, show, flow

pub mod flow;
pub mod kspacing;
pub mod show;

use clap::{Parser, Subcommand};

/// mpflow - Materials Project 风格 VASP 弛豫输入工具
#[derive(Parser)]
#[command(name = "mpflow")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Materials Project style VASP relaxation makers", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Derive the KSPACING INCAR tag from a band gap
    Kspacing(kspacing::KspacingArgs),

    /// Show the resolved input settings of a maker
    Show(show::ShowArgs),

    /// Plan the two-step MP Meta-GGA relaxation flow
    Flow(flow::FlowArgs),
}
