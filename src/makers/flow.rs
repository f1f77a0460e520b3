//! # MP Meta-GGA 弛豫工作流
//!
//! 两步弛豫：GGA 预弛豫 → r2SCAN 弛豫。预弛豫得到的带隙用于
//! 推导第二步的 KSPACING。
//!
//! ## 可选 Maker 的三种状态
//! ```text
//! MakerSlot::Unset         → 使用默认预设
//! MakerSlot::ExplicitNone  → 该步骤留空 (None)
//! MakerSlot::Explicit(m)   → 原样保存传入的 Arc，不复制
//! ```
//!
//! ## 依赖关系
//! - 使用 `makers/maker.rs`, `models/job.rs`
//! - 被 `commands/flow.rs` 使用

use super::maker::Maker;
use crate::error::{MpflowError, Result};
use crate::models::{FlowPlan, MakerKind};
use std::sync::Arc;

pub const META_GGA_RELAX_FLOW_NAME: &str = "MP Meta-GGA Relax";

/// 构造时传入的 Maker 参数
#[derive(Debug, Clone, Default)]
pub enum MakerSlot {
    /// 未传入，使用默认预设
    #[default]
    Unset,
    /// 显式传入 None
    ExplicitNone,
    /// 显式传入的 Maker
    Explicit(Arc<Maker>),
}

impl MakerSlot {
    fn resolve(self, default_kind: MakerKind) -> Option<Arc<Maker>> {
        match self {
            MakerSlot::Unset => Some(Arc::new(Maker::for_kind(default_kind))),
            MakerSlot::ExplicitNone => None,
            MakerSlot::Explicit(maker) => Some(maker),
        }
    }
}

impl From<Maker> for MakerSlot {
    fn from(maker: Maker) -> Self {
        MakerSlot::Explicit(Arc::new(maker))
    }
}

impl From<Arc<Maker>> for MakerSlot {
    fn from(maker: Arc<Maker>) -> Self {
        MakerSlot::Explicit(maker)
    }
}

impl From<Option<Maker>> for MakerSlot {
    fn from(maker: Option<Maker>) -> Self {
        match maker {
            Some(m) => m.into(),
            None => MakerSlot::ExplicitNone,
        }
    }
}

impl From<Option<Arc<Maker>>> for MakerSlot {
    fn from(maker: Option<Arc<Maker>>) -> Self {
        match maker {
            Some(m) => MakerSlot::Explicit(m),
            None => MakerSlot::ExplicitNone,
        }
    }
}

/// MP Meta-GGA 弛豫工作流
#[derive(Debug, Clone)]
pub struct MetaGgaRelaxFlow {
    pub name: String,
    pub initial_relax_maker: Option<Arc<Maker>>,
    pub final_relax_maker: Option<Arc<Maker>>,
}

impl Default for MetaGgaRelaxFlow {
    fn default() -> Self {
        Self::new(None, MakerSlot::Unset, MakerSlot::Unset)
    }
}

impl MetaGgaRelaxFlow {
    pub fn new(
        name: Option<String>,
        initial_relax_maker: impl Into<MakerSlot>,
        final_relax_maker: impl Into<MakerSlot>,
    ) -> Self {
        MetaGgaRelaxFlow {
            name: name.unwrap_or_else(|| META_GGA_RELAX_FLOW_NAME.to_string()),
            initial_relax_maker: initial_relax_maker.into().resolve(MakerKind::PreRelax),
            final_relax_maker: final_relax_maker.into().resolve(MakerKind::MetaGgaRelax),
        }
    }

    /// 规划作业序列
    ///
    /// `prev_band_gap` 为预弛豫得到的带隙，仅作用于最终弛豫。
    pub fn make(&self, prev_band_gap: Option<f64>) -> Result<FlowPlan> {
        let mut jobs = Vec::with_capacity(2);

        if let Some(ref maker) = self.initial_relax_maker {
            jobs.push(maker.make(None));
        }
        if let Some(ref maker) = self.final_relax_maker {
            jobs.push(maker.make(prev_band_gap));
        }

        if jobs.is_empty() {
            return Err(MpflowError::EmptyFlow {
                name: self.name.clone(),
            });
        }

        Ok(FlowPlan {
            name: self.name.clone(),
            jobs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(present: bool, maker: fn() -> Maker) -> MakerSlot {
        if present {
            maker().into()
        } else {
            MakerSlot::ExplicitNone
        }
    }

    #[test]
    fn test_default_values_all_combinations() {
        for (with_initial, with_final) in [(true, true), (true, false), (false, true), (false, false)]
        {
            let flow = MetaGgaRelaxFlow::new(
                None,
                slot(with_initial, Maker::mp_pre_relax),
                slot(with_final, Maker::mp_meta_gga_relax),
            );

            assert_eq!(flow.initial_relax_maker.is_some(), with_initial);
            if let Some(ref m) = flow.initial_relax_maker {
                assert_eq!(m.kind, MakerKind::PreRelax);
                assert_eq!(m.name, "MP PreRelax");
            }

            assert_eq!(flow.final_relax_maker.is_some(), with_final);
            if let Some(ref m) = flow.final_relax_maker {
                assert_eq!(m.kind, MakerKind::MetaGgaRelax);
                assert_eq!(m.name, "MP Relax");
            }

            assert_eq!(flow.name, "MP Meta-GGA Relax");
        }
    }

    #[test]
    fn test_unset_slots_use_defaults() {
        let flow = MetaGgaRelaxFlow::default();
        assert_eq!(flow.name, "MP Meta-GGA Relax");
        assert_eq!(
            flow.initial_relax_maker.as_deref(),
            Some(&Maker::mp_pre_relax())
        );
        assert_eq!(
            flow.final_relax_maker.as_deref(),
            Some(&Maker::mp_meta_gga_relax())
        );
    }

    #[test]
    fn test_option_none_stays_none() {
        let flow = MetaGgaRelaxFlow::new(None, None::<Maker>, MakerSlot::Unset);
        assert!(flow.initial_relax_maker.is_none());
        assert!(flow.final_relax_maker.is_some());
    }

    #[test]
    fn test_custom_values_keep_identity() {
        let initial = Arc::new(Maker::mp_pre_relax());
        let last = Arc::new(Maker::mp_meta_gga_relax());

        let flow = MetaGgaRelaxFlow::new(
            Some("Test".to_string()),
            Arc::clone(&initial),
            Arc::clone(&last),
        );

        assert_eq!(flow.name, "Test");
        assert!(Arc::ptr_eq(flow.initial_relax_maker.as_ref().unwrap(), &initial));
        assert!(Arc::ptr_eq(flow.final_relax_maker.as_ref().unwrap(), &last));
    }

    #[test]
    fn test_make_plan_order_and_band_gap() {
        let plan = MetaGgaRelaxFlow::default().make(Some(1.0)).unwrap();

        assert_eq!(plan.name, "MP Meta-GGA Relax");
        assert_eq!(plan.jobs.len(), 2);
        assert_eq!(plan.jobs[0].kind, MakerKind::PreRelax);
        assert_eq!(plan.jobs[1].kind, MakerKind::MetaGgaRelax);

        let k0 = plan.jobs[0].incar.get("KSPACING").and_then(|v| v.as_f64()).unwrap();
        let k1 = plan.output().unwrap().incar.get("KSPACING").and_then(|v| v.as_f64()).unwrap();
        assert!((k0 - 0.22).abs() < 1e-12);
        assert!((k1 - 0.30235235).abs() < 1e-6);
    }

    #[test]
    fn test_make_skips_missing_makers() {
        let flow = MetaGgaRelaxFlow::new(None, MakerSlot::ExplicitNone, MakerSlot::Unset);
        let plan = flow.make(None).unwrap();
        assert_eq!(plan.jobs.len(), 1);
        assert_eq!(plan.jobs[0].name, "MP Relax");
    }

    #[test]
    fn test_make_empty_flow_fails() {
        let flow = MetaGgaRelaxFlow::new(None, MakerSlot::ExplicitNone, MakerSlot::ExplicitNone);
        assert!(matches!(
            flow.make(Some(1.0)),
            Err(MpflowError::EmptyFlow { .. })
        ));
    }
}
