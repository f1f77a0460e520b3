//! # mpflow 库
//!
//! Materials Project 风格 VASP 弛豫 maker、KSPACING 推导与两步弛豫工作流。
//! 命令行程序 (`main.rs`) 只是这些接口的薄封装。
//!
//! ## 依赖关系
//! - 子模块: error, makers, models

pub mod error;
pub mod makers;
pub mod models;
