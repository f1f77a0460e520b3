//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `makers/`, `models/`, `utils/`
//! - 子模块: kspacing, show, flow

pub mod flow;
pub mod kspacing;
pub mod show;

use crate::cli::Commands;
use mpflow::error::{MpflowError, Result};
use mpflow::models::incar::parse_assignment;
use mpflow::models::IncarSettings;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Kspacing(args) => kspacing::execute(args),
        Commands::Show(args) => show::execute(args),
        Commands::Flow(args) => flow::execute(args),
    }
}

/// 校验命令行给出的带隙
fn validate_band_gap(band_gap: f64) -> Result<f64> {
    if band_gap.is_finite() && band_gap >= 0.0 {
        Ok(band_gap)
    } else {
        Err(MpflowError::InvalidBandGap(band_gap))
    }
}

/// 将 `--set TAG=VALUE` 列表解析为 INCAR 覆盖项
fn parse_overrides(overrides: &[String]) -> Result<IncarSettings> {
    let mut settings = IncarSettings::new();
    for text in overrides {
        let (tag, value) = parse_assignment(text)?;
        settings.set(&tag, value);
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpflow::models::IncarValue;

    #[test]
    fn test_validate_band_gap() {
        assert_eq!(validate_band_gap(0.0).unwrap(), 0.0);
        assert_eq!(validate_band_gap(1.5).unwrap(), 1.5);
        assert!(validate_band_gap(-0.1).is_err());
        assert!(validate_band_gap(f64::NAN).is_err());
        assert!(validate_band_gap(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_overrides_last_wins() {
        let overrides = vec![
            "NSW=10".to_string(),
            "algo = Normal".to_string(),
            "nsw=20".to_string(),
        ];
        let settings = parse_overrides(&overrides).unwrap();
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get("NSW"), Some(&IncarValue::Int(20)));
        assert_eq!(settings.get("ALGO"), Some(&IncarValue::from("Normal")));

        assert!(parse_overrides(&["bogus".to_string()]).is_err());
    }
}
