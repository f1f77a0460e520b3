//! # Materials Project 弛豫 Maker 预设
//!
//! - `MP PreRelax`: PBEsol (GGA = PS) 预弛豫
//! - `MP Relax`:    r2SCAN meta-GGA 弛豫，开启 KSPACING 自动推导
//!
//! 两者共享同一组基础 INCAR 设置（收敛判据、弛豫算法、展宽等）。
//!
//! ## 依赖关系
//! - 使用 `models/`, `makers/generator.rs`
//! - 被 `makers/flow.rs`, `commands/` 使用

use super::generator::InputSetGenerator;
use crate::models::{
    IncarSettings, Job, KpointsSettings, MakerKind, PotcarFunctional, PotcarSettings,
    VaspInputConfig,
};

pub const PRE_RELAX_NAME: &str = "MP PreRelax";
pub const META_GGA_RELAX_NAME: &str = "MP Relax";

/// MP 使用的 PBE_54 赝势选择
const MP_POTCAR_SYMBOLS: &[(&str, &str)] = &[
    ("H", "H"),
    ("He", "He"),
    ("Li", "Li_sv"),
    ("Be", "Be_sv"),
    ("B", "B"),
    ("C", "C"),
    ("N", "N"),
    ("O", "O"),
    ("F", "F"),
    ("Ne", "Ne"),
    ("Na", "Na_pv"),
    ("Mg", "Mg_pv"),
    ("Al", "Al"),
    ("Si", "Si"),
    ("P", "P"),
    ("S", "S"),
    ("Cl", "Cl"),
    ("Ar", "Ar"),
    ("K", "K_sv"),
    ("Ca", "Ca_sv"),
    ("Sc", "Sc_sv"),
    ("Ti", "Ti_pv"),
    ("V", "V_pv"),
    ("Cr", "Cr_pv"),
    ("Mn", "Mn_pv"),
    ("Fe", "Fe_pv"),
    ("Co", "Co"),
    ("Ni", "Ni_pv"),
    ("Cu", "Cu_pv"),
    ("Zn", "Zn"),
    ("Ga", "Ga_d"),
    ("Ge", "Ge_d"),
    ("As", "As"),
    ("Se", "Se"),
    ("Br", "Br"),
    ("Kr", "Kr"),
    ("Rb", "Rb_sv"),
    ("Sr", "Sr_sv"),
    ("Y", "Y_sv"),
    ("Zr", "Zr_sv"),
    ("Nb", "Nb_pv"),
    ("Mo", "Mo_pv"),
    ("Tc", "Tc_pv"),
    ("Ru", "Ru_pv"),
    ("Rh", "Rh_pv"),
    ("Pd", "Pd"),
    ("Ag", "Ag"),
    ("Cd", "Cd"),
    ("In", "In_d"),
    ("Sn", "Sn_d"),
    ("Sb", "Sb"),
    ("Te", "Te"),
    ("I", "I"),
    ("Xe", "Xe"),
    ("Cs", "Cs_sv"),
    ("Ba", "Ba_sv"),
    ("La", "La"),
    ("Hf", "Hf_pv"),
    ("Ta", "Ta_pv"),
    ("W", "W_pv"),
    ("Re", "Re_pv"),
    ("Os", "Os_pv"),
    ("Ir", "Ir"),
    ("Pt", "Pt"),
    ("Au", "Au"),
    ("Hg", "Hg"),
    ("Tl", "Tl_d"),
    ("Pb", "Pb_d"),
    ("Bi", "Bi_d"),
];

/// 两个预设共享的基础 INCAR
fn base_incar() -> IncarSettings {
    IncarSettings::new()
        .with("ISIF", 3)
        .with("IBRION", 2)
        .with("NSW", 99)
        .with("ISMEAR", 0)
        .with("SIGMA", 0.05)
        .with("LREAL", false)
        .with("LWAVE", false)
        .with("LCHARG", true)
        .with("EDIFF", 1e-5)
        .with("EDIFFG", -0.02)
        .with("GGA", "PS")
        .with("ENCUT", 680)
        .with("ENAUG", 1360)
        .with("PREC", "Accurate")
        .with("LASPH", true)
        .with("ISPIN", 2)
        .with("NELM", 200)
        .with("KSPACING", 0.22)
        .with("LAECHG", true)
        .with("LORBIT", 11)
        .with("LVTOT", true)
}

fn base_config(incar: IncarSettings) -> VaspInputConfig {
    VaspInputConfig::new(
        incar,
        KpointsSettings::default(),
        PotcarSettings::new(PotcarFunctional::Pbe54).with_symbols(MP_POTCAR_SYMBOLS),
    )
}

/// 生成 VASP 输入的 Maker
#[derive(Debug, Clone, PartialEq)]
pub struct Maker {
    pub kind: MakerKind,
    pub name: String,
    pub input_set_generator: InputSetGenerator,
}

impl Maker {
    /// `MP PreRelax` 预设
    pub fn mp_pre_relax() -> Self {
        let incar = base_incar().with("ALGO", "Fast");

        Maker {
            kind: MakerKind::PreRelax,
            name: PRE_RELAX_NAME.to_string(),
            input_set_generator: InputSetGenerator::new(base_config(incar)),
        }
    }

    /// `MP Relax` 预设 (r2SCAN)
    pub fn mp_meta_gga_relax() -> Self {
        let incar = base_incar()
            .with("ALGO", "All")
            .with("METAGGA", "R2SCAN")
            .with("LMIXTAU", true);

        Maker {
            kind: MakerKind::MetaGgaRelax,
            name: META_GGA_RELAX_NAME.to_string(),
            input_set_generator: InputSetGenerator::new(base_config(incar))
                .with_auto_kspacing(true),
        }
    }

    /// 按种类构造默认预设
    pub fn for_kind(kind: MakerKind) -> Self {
        match kind {
            MakerKind::PreRelax => Self::mp_pre_relax(),
            MakerKind::MetaGgaRelax => Self::mp_meta_gga_relax(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_bandgap_tol(mut self, tol: f64) -> Self {
        self.input_set_generator = self.input_set_generator.with_bandgap_tol(tol);
        self
    }

    pub fn with_user_incar_settings(mut self, settings: &IncarSettings) -> Self {
        self.input_set_generator = self.input_set_generator.with_user_incar_settings(settings);
        self
    }

    /// 解析为单个作业
    pub fn make(&self, band_gap: Option<f64>) -> Job {
        let config = &self.input_set_generator.config;
        Job {
            name: self.name.clone(),
            kind: self.kind,
            incar: self.input_set_generator.incar(band_gap),
            kpoints: config.kpoints.clone(),
            potcar: config.potcar.clone(),
        }
    }
}
