//! # KSPACING 推导
//!
//! 由带隙估计倒空间采样间距（VASP `KSPACING` 标签）。
//!
//! ## 公式
//! Wisesa, McGill & Mueller, Phys. Rev. B 93, 155109 (2016)：
//! ```text
//! gap <= tol          : KSPACING = 0.22              (金属)
//! rmin     = max(1.5, 25.22 - 2.87 * gap)            (Eq. 25)
//! KSPACING = 2π · 1.0265 / (rmin - 1.0183)           (Eq. 29)
//! KSPACING = clamp(KSPACING, 0.22, 0.44)
//! ```
//!
//! ## 依赖关系
//! - 被 `makers/generator.rs` 使用
//! - 被 `commands/kspacing.rs` 使用

use crate::models::IncarSettings;
use std::f64::consts::PI;

/// 金属体系使用的 KSPACING (Å⁻¹)
pub const METALLIC_KSPACING: f64 = 0.22;

/// KSPACING 上限 (Å⁻¹)
pub const MAX_KSPACING: f64 = 0.44;

const RMIN_FLOOR: f64 = 1.5;

/// `derive_kspacing` 的结果，只含一个 KSPACING 值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KspacingParams {
    pub kspacing: f64,
}

impl KspacingParams {
    pub const TAG: &'static str = "KSPACING";
}

impl From<KspacingParams> for IncarSettings {
    fn from(params: KspacingParams) -> Self {
        IncarSettings::new().with(KspacingParams::TAG, params.kspacing)
    }
}

/// 由带隙推导 KSPACING
pub fn derive_kspacing(band_gap: f64, band_gap_tol: f64) -> KspacingParams {
    if band_gap <= band_gap_tol {
        return KspacingParams {
            kspacing: METALLIC_KSPACING,
        };
    }

    let rmin = (25.22 - 2.87 * band_gap).max(RMIN_FLOOR);
    let kspacing = 2.0 * PI * 1.0265 / (rmin - 1.0183);

    KspacingParams {
        kspacing: kspacing.clamp(METALLIC_KSPACING, MAX_KSPACING),
    }
}
