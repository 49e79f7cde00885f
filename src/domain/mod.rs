// ==========================================
// 司机派车消息生成 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含文件读取逻辑,不含消息组装逻辑
// ==========================================

pub mod collection;
pub mod fuel;
pub mod types;

// 重导出核心类型
pub use collection::{CollectionRecord, LoadView};
pub use fuel::{short_code, FuelEntry, FuelReference};
pub use types::ScheduleField;
