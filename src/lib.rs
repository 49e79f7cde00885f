// ==========================================
// 司机派车消息生成 - 核心库
// ==========================================
// 输入: 燃油密码表（Excel）+ 集货计划（粘贴文本）
// 输出: 单车司机指令消息（纯文本）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部表格数据
pub mod importer;

// 引擎层 - 时间工具与消息组装
pub mod engine;

// 配置层 - 消息配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{CollectionRecord, FuelEntry, FuelReference, LoadView, ScheduleField};

// 导入
pub use importer::{FuelReferenceLoader, ImportError, ScheduleParser};

// 引擎
pub use engine::{ComposeError, MessageComposer};

// 配置
pub use config::MessageProfile;

// API
pub use api::{ApiError, DriverMessageApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Driver Message Generator";
