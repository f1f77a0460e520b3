//! # kspacing 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/kspacing.rs` 定义的参数
//! - 使用 `makers/kspacing.rs`, `utils/output.rs`

use super::validate_band_gap;
use crate::cli::kspacing::KspacingArgs;
use mpflow::error::Result;
use mpflow::makers::kspacing::MAX_KSPACING;
use mpflow::makers::{derive_kspacing, KspacingParams};
use crate::utils::output;

/// 执行 kspacing 命令
pub fn execute(args: KspacingArgs) -> Result<()> {
    let band_gap = validate_band_gap(args.band_gap)?;
    let params = derive_kspacing(band_gap, args.tol);

    if band_gap <= args.tol {
        output::print_info(&format!(
            "Band gap {} eV <= tolerance {} eV, treating as metal",
            band_gap, args.tol
        ));
    } else if params.kspacing >= MAX_KSPACING {
        output::print_info(&format!("KSPACING capped at {}", MAX_KSPACING));
    }

    output::print_success(&format!("{} = {:.8}", KspacingParams::TAG, params.kspacing));

    Ok(())
}
