//! # show 命令实现
//!
//! 展示单个 maker 解析后的输入设置，可选导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/show.rs` 定义的参数
//! - 使用 `makers/maker.rs`, `utils/output.rs`

use super::{parse_overrides, validate_band_gap};
use crate::cli::show::ShowArgs;
use mpflow::error::{MpflowError, Result};
use mpflow::makers::Maker;
use mpflow::models::{IncarSettings, Job};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// INCAR 表格行
#[derive(Debug, Clone, Tabled)]
struct IncarRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Type")]
    kind: String,
}

/// 执行 show 命令
pub fn execute(args: ShowArgs) -> Result<()> {
    let band_gap = args.band_gap.map(validate_band_gap).transpose()?;
    let user = parse_overrides(&args.overrides)?;

    let maker = Maker::for_kind(args.maker.into())
        .with_bandgap_tol(args.tol)
        .with_user_incar_settings(&user);

    if band_gap.is_some() && !maker.input_set_generator.auto_kspacing {
        output::print_warning(&format!(
            "'{}' does not derive KSPACING, band gap ignored",
            maker.name
        ));
    }

    let job = maker.make(band_gap);
    print_job(&job);

    let categories: Vec<String> = maker
        .input_set_generator
        .config
        .categories()
        .iter()
        .map(|c| c.to_string())
        .collect();
    output::print_info(&format!("Categories: {}", categories.join(", ")));

    if let Some(ref path) = args.csv {
        save_incar_csv(&job.incar, path)?;
        output::print_success(&format!("INCAR saved to '{}'", path.display()));
    }

    Ok(())
}

/// 打印单个作业的输入设置
pub(crate) fn print_job(job: &Job) {
    output::print_header(&format!("{} ({})", job.name, job.kind));

    let rows: Vec<IncarRow> = job
        .incar
        .iter()
        .map(|(tag, value)| IncarRow {
            tag: tag.to_string(),
            value: value.to_string(),
            kind: value.type_name().to_string(),
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_info(&format!(
        "KPOINTS: reciprocal density {}{}",
        job.kpoints.reciprocal_density,
        if job.kpoints.gamma_centered {
            ", Gamma-centred"
        } else {
            ""
        }
    ));
    output::print_info(&format!(
        "POTCAR: {} ({} element mappings)",
        job.potcar.functional,
        job.potcar.symbols.len()
    ));
}

/// 保存 INCAR 到 CSV
fn save_incar_csv(incar: &IncarSettings, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["tag", "value", "type"])?;
    for (tag, value) in incar.iter() {
        wtr.write_record([tag, value.to_string().as_str(), value.type_name()])?;
    }

    wtr.flush().map_err(|e| MpflowError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
