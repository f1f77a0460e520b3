//! # INCAR 控制参数数据模型
//!
//! VASP INCAR 标签到取值的有序映射。标签不区分大小写，统一以大写存储。
//!
//! ## 取值约定
//! ```text
//! ISIF   = 3          # 整数
//! SIGMA  = 0.05       # 浮点数
//! LWAVE  = .FALSE.    # 布尔值 (.TRUE./.FALSE./T/F/True/False)
//! GGA    = PS         # 字符串
//! ```
//!
//! ## 依赖关系
//! - 被 `models/input_set.rs`, `makers/` 使用
//! - 被 `commands/` 用于展示和导出

use crate::error::{MpflowError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

/// 单个 INCAR 标签的取值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncarValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl IncarValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IncarValue::Int(v) => Some(*v as f64),
            IncarValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            IncarValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            IncarValue::Str(v) => Some(v),
            _ => None,
        }
    }

    /// 取值类型名，用于表格展示
    pub fn type_name(&self) -> &'static str {
        match self {
            IncarValue::Bool(_) => "bool",
            IncarValue::Int(_) => "int",
            IncarValue::Float(_) => "float",
            IncarValue::Str(_) => "string",
        }
    }
}

impl std::fmt::Display for IncarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncarValue::Bool(true) => write!(f, ".TRUE."),
            IncarValue::Bool(false) => write!(f, ".FALSE."),
            IncarValue::Int(v) => write!(f, "{}", v),
            IncarValue::Float(v) => write!(f, "{}", v),
            IncarValue::Str(v) => write!(f, "{}", v),
        }
    }
}

impl FromStr for IncarValue {
    type Err = MpflowError;

    /// 按 VASP 习惯解析：布尔 → 整数 → 浮点 → 字符串
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty() {
            return Err(MpflowError::InvalidIncarSetting {
                setting: s.to_string(),
                reason: "Empty value".to_string(),
            });
        }

        match text.to_uppercase().as_str() {
            ".TRUE." | ".T." | "TRUE" | "T" => return Ok(IncarValue::Bool(true)),
            ".FALSE." | ".F." | "FALSE" | "F" => return Ok(IncarValue::Bool(false)),
            _ => {}
        }

        if let Ok(v) = text.parse::<i64>() {
            return Ok(IncarValue::Int(v));
        }

        // inf/nan 在 INCAR 中没有意义，按字符串保留
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(IncarValue::Float(v)),
            _ => Ok(IncarValue::Str(text.to_string())),
        }
    }
}

impl From<bool> for IncarValue {
    fn from(v: bool) -> Self {
        IncarValue::Bool(v)
    }
}

impl From<i64> for IncarValue {
    fn from(v: i64) -> Self {
        IncarValue::Int(v)
    }
}

impl From<i32> for IncarValue {
    fn from(v: i32) -> Self {
        IncarValue::Int(v as i64)
    }
}

impl From<f64> for IncarValue {
    fn from(v: f64) -> Self {
        IncarValue::Float(v)
    }
}

impl From<&str> for IncarValue {
    fn from(v: &str) -> Self {
        IncarValue::Str(v.to_string())
    }
}

impl From<String> for IncarValue {
    fn from(v: String) -> Self {
        IncarValue::Str(v)
    }
}

/// INCAR 标签集合
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncarSettings {
    tags: BTreeMap<String, IncarValue>,
}

impl IncarSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式设置标签（用于预设构造）
    pub fn with(mut self, tag: &str, value: impl Into<IncarValue>) -> Self {
        self.set(tag, value);
        self
    }

    pub fn set(&mut self, tag: &str, value: impl Into<IncarValue>) {
        self.tags.insert(tag.trim().to_uppercase(), value.into());
    }

    pub fn get(&self, tag: &str) -> Option<&IncarValue> {
        self.tags.get(&tag.trim().to_uppercase())
    }

    pub fn remove(&mut self, tag: &str) -> Option<IncarValue> {
        self.tags.remove(&tag.trim().to_uppercase())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// 合并另一组设置，冲突时以 `other` 为准
    pub fn update(&mut self, other: &IncarSettings) {
        for (tag, value) in &other.tags {
            self.tags.insert(tag.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IncarValue)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn assignment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_]*)\s*=\s*(.*?)\s*$").unwrap())
}

/// 解析 `TAG=VALUE` 形式的命令行覆盖项
pub fn parse_assignment(text: &str) -> Result<(String, IncarValue)> {
    let caps = assignment_pattern()
        .captures(text)
        .ok_or_else(|| MpflowError::InvalidIncarSetting {
            setting: text.to_string(),
            reason: "Expected TAG=VALUE".to_string(),
        })?;

    let tag = caps[1].to_uppercase();
    let value = caps[2].parse::<IncarValue>().map_err(|e| match e {
        MpflowError::InvalidIncarSetting { reason, .. } => MpflowError::InvalidIncarSetting {
            setting: text.to_string(),
            reason: format!("{} for {}", reason, tag),
        },
        other => other,
    })?;

    Ok((tag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_incar_value_kinds() {
        assert_eq!("3".parse::<IncarValue>().unwrap(), IncarValue::Int(3));
        assert_eq!("-0.02".parse::<IncarValue>().unwrap(), IncarValue::Float(-0.02));
        assert_eq!("1E-05".parse::<IncarValue>().unwrap(), IncarValue::Float(1e-5));
        assert_eq!(".FALSE.".parse::<IncarValue>().unwrap(), IncarValue::Bool(false));
        assert_eq!("T".parse::<IncarValue>().unwrap(), IncarValue::Bool(true));
        assert_eq!("True".parse::<IncarValue>().unwrap(), IncarValue::Bool(true));
        assert_eq!("PS".parse::<IncarValue>().unwrap(), IncarValue::from("PS"));
        assert_eq!("nan".parse::<IncarValue>().unwrap(), IncarValue::from("nan"));
        assert!("   ".parse::<IncarValue>().is_err());
    }

    #[test]
    fn test_incar_tags_case_insensitive() {
        let mut incar = IncarSettings::new().with("encut", 520);
        assert_eq!(incar.get("ENCUT"), Some(&IncarValue::Int(520)));
        assert!(incar.contains(" Encut "));

        incar.set("ENCUT", 680);
        assert_eq!(incar.len(), 1);
        assert_eq!(incar.remove("encut"), Some(IncarValue::Int(680)));
        assert!(incar.is_empty());
    }

    #[test]
    fn test_incar_update_overrides() {
        let mut base = IncarSettings::new().with("ISMEAR", 0).with("SIGMA", 0.05);
        let user = IncarSettings::new().with("SIGMA", 0.1).with("LORBIT", 11);
        base.update(&user);

        assert_eq!(base.get("ISMEAR"), Some(&IncarValue::Int(0)));
        assert_eq!(base.get("SIGMA"), Some(&IncarValue::Float(0.1)));
        assert_eq!(base.get("LORBIT"), Some(&IncarValue::Int(11)));
    }

    #[test]
    fn test_incar_value_display() {
        assert_eq!(IncarValue::Bool(true).to_string(), ".TRUE.");
        assert_eq!(IncarValue::Bool(false).to_string(), ".FALSE.");
        assert_eq!(IncarValue::Int(99).to_string(), "99");
        assert_eq!(IncarValue::from("R2SCAN").to_string(), "R2SCAN");
    }

    #[test]
    fn test_assignment_pattern_reused() {
        assert!(std::ptr::eq(assignment_pattern(), assignment_pattern()));
    }

    #[test]
    fn test_parse_assignment() {
        let (tag, value) = parse_assignment("ediffg = -0.05").unwrap();
        assert_eq!(tag, "EDIFFG");
        assert_eq!(value, IncarValue::Float(-0.05));

        let (tag, value) = parse_assignment("LWAVE=.TRUE.").unwrap();
        assert_eq!(tag, "LWAVE");
        assert_eq!(value, IncarValue::Bool(true));

        assert!(parse_assignment("NSW").is_err());
        match parse_assignment("NSW=") {
            Err(MpflowError::InvalidIncarSetting { setting, reason }) => {
                assert_eq!(setting, "NSW=");
                assert_eq!(reason, "Empty value for NSW");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_assignment("=3").is_err());
    }
}
