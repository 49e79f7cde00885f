// ==========================================
// 司机派车消息生成 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行调用
// ==========================================

pub mod driver_message_api;
pub mod error;

// 重导出核心类型
pub use driver_message_api::DriverMessageApi;
pub use error::{ApiError, ApiResult};
