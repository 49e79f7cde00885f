// ==========================================
// 司机派车消息生成 - 导入层
// ==========================================
// 职责: 外部表格数据 → 领域对象
// 支持: Excel, CSV, 制表符分隔文本
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod fuel_loader;
pub mod schedule_parser;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::{ColumnMap, FieldMapper};
pub use file_parser::{read_grid, read_text, CellGrid, CsvGridReader, ExcelGridReader};
pub use fuel_loader::FuelReferenceLoader;
pub use schedule_parser::ScheduleParser;
