//! # mpflow - Materials Project 风格 VASP 弛豫输入工具
//!
//! 提供 MP 预弛豫 / r2SCAN 弛豫 maker 的默认参数、两步弛豫工作流规划，
//! 以及由带隙推导 KSPACING 的启发式公式。
//!
//! ## 子命令
//! - `kspacing` - 由带隙推导 KSPACING
//! - `show`     - 展示单个 maker 解析后的输入设置
//! - `flow`     - 规划 MP Meta-GGA 两步弛豫
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── mpflow (lib.rs: makers/, models/, error.rs)
//!   └── utils/      (工具函数)
//! ```

mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
