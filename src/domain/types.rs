// ==========================================
// 司机派车消息生成 - 领域类型定义
// ==========================================
// 依据: 集货计划表头约定（列顺序不固定，按表头文本匹配）
// ==========================================

use std::fmt;

// ==========================================
// 集货计划逻辑字段 (Schedule Field)
// ==========================================
// 每个字段按固定检索词在表头中做不区分大小写的子串匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleField {
    LoadNumber,          // 装载编号
    CollectionSite,      // 集货点
    DeliveryDestination, // 送货目的地
    Pallets,             // 托盘数
    Driver,              // 司机
    Vehicle,             // 车头短码
    Trailer,             // 挂车号
    Notes,               // 备注
    TimeFrom,            // 计划集货开始时间
    Date,                // 集货日期
}

impl ScheduleField {
    /// 全部字段（顺序即解析顺序）
    pub const ALL: [ScheduleField; 10] = [
        ScheduleField::LoadNumber,
        ScheduleField::CollectionSite,
        ScheduleField::DeliveryDestination,
        ScheduleField::Pallets,
        ScheduleField::Driver,
        ScheduleField::Vehicle,
        ScheduleField::Trailer,
        ScheduleField::Notes,
        ScheduleField::TimeFrom,
        ScheduleField::Date,
    ];

    /// 表头检索词（小写）
    pub fn search_term(&self) -> &'static str {
        match self {
            ScheduleField::LoadNumber => "load",
            ScheduleField::CollectionSite => "collection site",
            ScheduleField::DeliveryDestination => "delivery destination",
            ScheduleField::Pallets => "pallets",
            ScheduleField::Driver => "driver",
            ScheduleField::Vehicle => "vehicle",
            ScheduleField::Trailer => "trailer",
            ScheduleField::Notes => "notes",
            ScheduleField::TimeFrom => "time from",
            ScheduleField::Date => "date",
        }
    }

    /// 在 ColumnMap 中的槽位
    pub(crate) fn slot(&self) -> usize {
        match self {
            ScheduleField::LoadNumber => 0,
            ScheduleField::CollectionSite => 1,
            ScheduleField::DeliveryDestination => 2,
            ScheduleField::Pallets => 3,
            ScheduleField::Driver => 4,
            ScheduleField::Vehicle => 5,
            ScheduleField::Trailer => 6,
            ScheduleField::Notes => 7,
            ScheduleField::TimeFrom => 8,
            ScheduleField::Date => 9,
        }
    }
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.search_term())
    }
}
