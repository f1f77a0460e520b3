//! # 数据模型模块
//!
//! 定义 INCAR 设置、输入配置类别以及作业规划的数据模型。
//!
//! ## 依赖关系
//! - 被 `makers/` 和 `commands/` 使用
//! - 子模块: incar, input_set, job

pub mod incar;
pub mod input_set;
pub mod job;

pub use incar::{IncarSettings, IncarValue};
pub use input_set::{
    ConfigCategory, KpointsSettings, PotcarFunctional, PotcarSettings, VaspInputConfig,
};
pub use job::{FlowPlan, Job, MakerKind};
