//! # VASP 输入配置数据模型
//!
//! 一个输入集由三个必需类别组成：INCAR、KPOINTS、POTCAR。
//! 三者均为结构体字段，因此"必须包含必需类别"在构造时即成立。
//!
//! ## 依赖关系
//! - 使用 `models/incar.rs`
//! - 被 `makers/` 使用

use super::incar::IncarSettings;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 输入配置类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfigCategory {
    Incar,
    Kpoints,
    Potcar,
}

impl std::fmt::Display for ConfigCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigCategory::Incar => write!(f, "INCAR"),
            ConfigCategory::Kpoints => write!(f, "KPOINTS"),
            ConfigCategory::Potcar => write!(f, "POTCAR"),
        }
    }
}

/// KPOINTS 设置（使用 KSPACING 时仅作回退）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpointsSettings {
    /// 每倒格子体积的 k 点密度
    pub reciprocal_density: u32,

    /// 是否使用 Γ 中心网格
    pub gamma_centered: bool,
}

impl Default for KpointsSettings {
    fn default() -> Self {
        KpointsSettings {
            reciprocal_density: 64,
            gamma_centered: true,
        }
    }
}

/// 赝势泛函族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotcarFunctional {
    Pbe,
    Pbe52,
    Pbe54,
}

impl std::fmt::Display for PotcarFunctional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotcarFunctional::Pbe => write!(f, "PBE"),
            PotcarFunctional::Pbe52 => write!(f, "PBE_52"),
            PotcarFunctional::Pbe54 => write!(f, "PBE_54"),
        }
    }
}

/// POTCAR 设置：泛函族与元素 → 赝势标签
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotcarSettings {
    pub functional: PotcarFunctional,
    pub symbols: BTreeMap<String, String>,
}

impl PotcarSettings {
    pub fn new(functional: PotcarFunctional) -> Self {
        PotcarSettings {
            functional,
            symbols: BTreeMap::new(),
        }
    }

    pub fn with_symbols(mut self, pairs: &[(&str, &str)]) -> Self {
        for (element, label) in pairs {
            self.symbols.insert(element.to_string(), label.to_string());
        }
        self
    }

    /// 查询元素对应的赝势标签
    pub fn symbol_for(&self, element: &str) -> Option<&str> {
        self.symbols.get(element).map(|s| s.as_str())
    }
}

/// 完整输入配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaspInputConfig {
    pub incar: IncarSettings,
    pub kpoints: KpointsSettings,
    pub potcar: PotcarSettings,
}

impl VaspInputConfig {
    pub fn new(incar: IncarSettings, kpoints: KpointsSettings, potcar: PotcarSettings) -> Self {
        VaspInputConfig {
            incar,
            kpoints,
            potcar,
        }
    }

    /// 配置中包含的类别
    pub fn categories(&self) -> BTreeSet<ConfigCategory> {
        [
            ConfigCategory::Incar,
            ConfigCategory::Kpoints,
            ConfigCategory::Potcar,
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_complete() {
        let config = VaspInputConfig::new(
            IncarSettings::new(),
            KpointsSettings::default(),
            PotcarSettings::new(PotcarFunctional::Pbe54),
        );
        let names: Vec<String> = config.categories().iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["INCAR", "KPOINTS", "POTCAR"]);
    }

    #[test]
    fn test_potcar_lookup() {
        let potcar =
            PotcarSettings::new(PotcarFunctional::Pbe54).with_symbols(&[("Fe", "Fe_pv"), ("O", "O")]);
        assert_eq!(potcar.symbol_for("Fe"), Some("Fe_pv"));
        assert_eq!(potcar.symbol_for("Xx"), None);
        assert_eq!(potcar.functional.to_string(), "PBE_54");
    }
}
