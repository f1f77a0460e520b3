//! # 输入集生成器
//!
//! 持有基础配置与用户覆盖项，按需解析出最终 INCAR。
//!
//! ## 解析顺序
//! 1. 基础配置中的 INCAR
//! 2. `auto_kspacing` 开启且给出带隙时，写入推导的 KSPACING
//! 3. 用户覆盖项（优先级最高）
//!
//! ## 依赖关系
//! - 使用 `models/`, `makers/kspacing.rs`
//! - 被 `makers/maker.rs` 使用

use super::kspacing::derive_kspacing;
use crate::models::{IncarSettings, VaspInputConfig};

/// 默认带隙容差 (eV)
pub const DEFAULT_BANDGAP_TOL: f64 = 1e-4;

/// VASP 输入集生成器
#[derive(Debug, Clone, PartialEq)]
pub struct InputSetGenerator {
    pub config: VaspInputConfig,
    pub user_incar_settings: IncarSettings,
    pub auto_kspacing: bool,
    pub bandgap_tol: f64,
}

impl InputSetGenerator {
    pub fn new(config: VaspInputConfig) -> Self {
        InputSetGenerator {
            config,
            user_incar_settings: IncarSettings::new(),
            auto_kspacing: false,
            bandgap_tol: DEFAULT_BANDGAP_TOL,
        }
    }

    pub fn with_auto_kspacing(mut self, enabled: bool) -> Self {
        self.auto_kspacing = enabled;
        self
    }

    pub fn with_bandgap_tol(mut self, tol: f64) -> Self {
        self.bandgap_tol = tol;
        self
    }

    pub fn with_user_incar_settings(mut self, settings: &IncarSettings) -> Self {
        self.user_incar_settings.update(settings);
        self
    }

    /// 解析最终 INCAR
    pub fn incar(&self, band_gap: Option<f64>) -> IncarSettings {
        let mut incar = self.config.incar.clone();

        if self.auto_kspacing {
            if let Some(gap) = band_gap {
                incar.update(&derive_kspacing(gap, self.bandgap_tol).into());
            }
        }

        incar.update(&self.user_incar_settings);
        incar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncarValue, KpointsSettings, PotcarFunctional, PotcarSettings};

    fn generator() -> InputSetGenerator {
        let incar = IncarSettings::new().with("KSPACING", 0.22).with("NSW", 99);
        InputSetGenerator::new(VaspInputConfig::new(
            incar,
            KpointsSettings::default(),
            PotcarSettings::new(PotcarFunctional::Pbe54),
        ))
    }

    #[test]
    fn test_band_gap_ignored_without_auto_kspacing() {
        let incar = generator().incar(Some(1.0));
        assert_eq!(incar.get("KSPACING"), Some(&IncarValue::Float(0.22)));
    }

    #[test]
    fn test_auto_kspacing_from_band_gap() {
        let input_set = generator().with_auto_kspacing(true).with_bandgap_tol(0.1);

        let k = input_set.incar(Some(1.0)).get("KSPACING").and_then(|v| v.as_f64()).unwrap();
        assert!((k - 0.30235235).abs() < 1e-6);

        // 无带隙时保留基础值
        assert_eq!(input_set.incar(None).get("KSPACING"), Some(&IncarValue::Float(0.22)));
    }

    #[test]
    fn test_user_settings_win() {
        let user = IncarSettings::new().with("KSPACING", 0.3).with("NSW", 0);
        let input_set = generator()
            .with_auto_kspacing(true)
            .with_user_incar_settings(&user);

        let incar = input_set.incar(Some(2.0));
        assert_eq!(incar.get("KSPACING"), Some(&IncarValue::Float(0.3)));
        assert_eq!(incar.get("NSW"), Some(&IncarValue::Int(0)));

        // 基础配置不受影响
        assert_eq!(input_set.config.incar.get("NSW"), Some(&IncarValue::Int(99)));
    }
}
