// ==========================================
// 司机派车消息生成 - 引擎层
// ==========================================
// 职责: 时间工具 / 路线措辞 / 消息组装
// 红线: 纯函数,不读系统时钟,不做文件 I/O
// ==========================================

pub mod composer;
pub mod error;
pub mod routing;
pub mod temporal;

// 重导出核心引擎
pub use composer::MessageComposer;
pub use error::ComposeError;
pub use routing::{build_delivery_routing, delivery_order};
pub use temporal::{
    minutes_to_time, parse_collection_date, same_calendar_day, subtract_one_hour, time_to_minutes,
};
