// ==========================================
// 司机派车消息生成 - 配置层
// ==========================================
// 职责: 消息中的固定字面量,可由 JSON 配置覆写
// ==========================================

pub mod message_profile;

pub use message_profile::{default_profile_path, MessageProfile, PROFILE_ENV_VAR};
