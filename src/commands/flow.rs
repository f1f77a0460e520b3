//! # flow 命令实现
//!
//! 规划 MP Meta-GGA 两步弛豫并逐步展示解析后的输入。
//!
//! ## 依赖关系
//! - 使用 `cli/flow.rs` 定义的参数
//! - 使用 `makers/flow.rs`, `commands/show.rs`, `utils/output.rs`

use super::show::print_job;
use super::{parse_overrides, validate_band_gap};
use crate::cli::flow::FlowArgs;
use mpflow::error::Result;
use mpflow::makers::{Maker, MakerSlot, MetaGgaRelaxFlow};
use mpflow::models::IncarSettings;
use crate::utils::output;

/// 执行 flow 命令
pub fn execute(args: FlowArgs) -> Result<()> {
    let band_gap = args.band_gap.map(validate_band_gap).transpose()?;
    let user = parse_overrides(&args.overrides)?;

    let initial = step_slot(args.no_initial, Maker::mp_pre_relax, args.tol, &user);
    let last = step_slot(args.no_final, Maker::mp_meta_gga_relax, args.tol, &user);
    let flow = MetaGgaRelaxFlow::new(args.name, initial, last);

    let plan = flow.make(band_gap)?;

    if band_gap.is_none() && flow.final_relax_maker.is_some() {
        output::print_warning("No band gap given, final step keeps the default KSPACING");
    }

    for (i, job) in plan.jobs.iter().enumerate() {
        output::print_info(&format!("Step {}/{}", i + 1, plan.jobs.len()));
        print_job(job);
    }

    output::print_separator();
    if let Some(job) = plan.output() {
        if let Some(k) = job.incar.get("KSPACING") {
            output::print_info(&format!("Output step '{}': KSPACING = {}", job.name, k));
        }
    }
    output::print_done(&format!(
        "Planned '{}' with {} step(s)",
        plan.name,
        plan.jobs.len()
    ));

    Ok(())
}

/// 根据命令行开关构造某一步的 maker 参数
fn step_slot(skip: bool, preset: fn() -> Maker, tol: f64, user: &IncarSettings) -> MakerSlot {
    if skip {
        MakerSlot::ExplicitNone
    } else {
        preset()
            .with_bandgap_tol(tol)
            .with_user_incar_settings(user)
            .into()
    }
}
