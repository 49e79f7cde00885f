use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// 环境变量：显式指定消息配置文件路径
pub const PROFILE_ENV_VAR: &str = "DRIVER_MESSAGES_PROFILE";

/// 消息配置（持久化对象）
///
/// 存储位置：JSON 文件，缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageProfile {
    /// 挂车号前缀（已带前缀则不重复添加）
    pub trailer_prefix: String,

    /// 燃油密码表中找不到车辆时的占位密码
    pub unknown_pin: String,

    /// 司机姓名为空时的称呼
    pub default_driver_name: String,

    /// 卸货行缺少开始时间时使用的时刻（之后再减一小时）
    pub default_tip_start: String,

    /// 需要附加预约号的目的地关键字（区分大小写）
    pub booking_ref_destination: String,

    /// 备注中的预约号标记（区分大小写）
    pub booking_ref_marker: String,

    /// 集货计划单元格分隔符
    pub schedule_delimiter: char,
}

impl Default for MessageProfile {
    fn default() -> Self {
        Self {
            trailer_prefix: "SLH".to_string(),
            unknown_pin: "XXXX".to_string(),
            default_driver_name: "Driver".to_string(),
            default_tip_start: "07:00".to_string(),
            booking_ref_destination: "Morrisons".to_string(),
            booking_ref_marker: "X01".to_string(),
            schedule_delimiter: '\t',
        }
    }
}

impl MessageProfile {
    /// 从 JSON 文件读取配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("cannot read profile {}: {}", path.as_ref().display(), e))?;
        Self::from_json(&raw)
    }

    /// 从 JSON 文本读取配置
    pub fn from_json(raw: &str) -> Result<Self, Box<dyn Error>> {
        let profile: MessageProfile = serde_json::from_str(raw)?;
        if !profile.schedule_delimiter.is_ascii() {
            return Err(format!(
                "schedule_delimiter must be a single ASCII character, got {:?}",
                profile.schedule_delimiter
            )
            .into());
        }
        Ok(profile)
    }

    /// 读取默认位置的配置；文件不存在时返回默认值
    pub fn load_or_default() -> Result<Self, Box<dyn Error>> {
        match default_profile_path() {
            Some(path) if path.exists() => {
                tracing::debug!("读取消息配置: {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// 默认配置路径
///
/// 优先级: DRIVER_MESSAGES_PROFILE 环境变量 > <config_dir>/driver-messages/profile.json
pub fn default_profile_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(PROFILE_ENV_VAR) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    dirs::config_dir().map(|dir| dir.join("driver-messages").join("profile.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let profile = MessageProfile::from_json(r#"{"trailer_prefix": "TRL"}"#).unwrap();
        assert_eq!(profile.trailer_prefix, "TRL");
        assert_eq!(profile.unknown_pin, "XXXX");
        assert_eq!(profile.schedule_delimiter, '\t');
    }

    #[test]
    fn test_delimiter_must_be_ascii() {
        assert!(MessageProfile::from_json(r#"{"schedule_delimiter": "→"}"#).is_err());
        let profile = MessageProfile::from_json(r#"{"schedule_delimiter": ","}"#).unwrap();
        assert_eq!(profile.schedule_delimiter, ',');
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"unknown_pin": "0000", "booking_ref_marker": "X02"}}"#).unwrap();

        let profile = MessageProfile::load(temp_file.path()).unwrap();
        assert_eq!(profile.unknown_pin, "0000");
        assert_eq!(profile.booking_ref_marker, "X02");
        assert_eq!(profile.booking_ref_destination, "Morrisons");
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(MessageProfile::load("no_such_profile.json").is_err());
    }
}
