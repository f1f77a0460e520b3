//! # 作业与工作流规划数据模型
//!
//! `Job` 是某个 maker 在给定带隙下解析出的完整输入；
//! `FlowPlan` 是按顺序排列的作业列表。二者都不负责执行。
//!
//! ## 依赖关系
//! - 被 `makers/maker.rs`, `makers/flow.rs` 构造
//! - 被 `commands/flow.rs` 展示

use super::incar::IncarSettings;
use super::input_set::{KpointsSettings, PotcarSettings};
use serde::{Deserialize, Serialize};

/// Maker 种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MakerKind {
    /// GGA (PBEsol) 预弛豫
    PreRelax,
    /// meta-GGA (r2SCAN) 弛豫
    MetaGgaRelax,
}

impl std::fmt::Display for MakerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MakerKind::PreRelax => write!(f, "pre-relax"),
            MakerKind::MetaGgaRelax => write!(f, "meta-GGA relax"),
        }
    }
}

/// 单个已解析作业
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub kind: MakerKind,
    pub incar: IncarSettings,
    pub kpoints: KpointsSettings,
    pub potcar: PotcarSettings,
}

/// 工作流规划
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowPlan {
    pub name: String,
    pub jobs: Vec<Job>,
}

impl FlowPlan {
    /// 最后一个作业，即工作流的输出
    pub fn output(&self) -> Option<&Job> {
        self.jobs.last()
    }
}
