//! # Maker 模块
//!
//! Materials Project 风格的 VASP 弛豫 maker、KSPACING 推导以及两步弛豫工作流。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`
//! - 子模块: kspacing, generator, maker, flow

pub mod flow;
pub mod generator;
pub mod kspacing;
pub mod maker;

pub use flow::{MakerSlot, MetaGgaRelaxFlow};
pub use kspacing::{derive_kspacing, KspacingParams};
pub use maker::Maker;
