// ==========================================
// 司机派车消息生成 - 集货计划领域模型
// ==========================================
// 用途: 集货计划行 (CollectionRecord) 与单车视图 (LoadView)
// 红线: 记录顺序 = 源数据行顺序,视图只筛选不修改
// ==========================================

use crate::engine::temporal::same_calendar_day;
use chrono::NaiveDate;

// ==========================================
// CollectionRecord - 集货计划单行
// ==========================================
// 缺失列 → 空字符串；日期无法解析 → None
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRecord {
    pub load_number: String,          // 装载编号（非空）
    pub collection_site: String,      // 集货点
    pub delivery_destination: String, // 送货目的地
    pub pallet_count: String,         // 托盘数
    pub driver_name: String,          // 司机全名
    pub vehicle_code: String,         // 车头短码
    pub trailer_code: String,         // 挂车号
    pub notes: String,                // 备注
    pub collection_time_from: String, // 计划集货开始时间（HH:MM）
    pub collection_date: Option<NaiveDate>, // 集货日期（无时刻）
}

impl CollectionRecord {
    /// 备注是否包含关键字（不区分大小写）
    pub fn notes_contain(&self, keyword: &str) -> bool {
        !self.notes.is_empty() && self.notes.to_lowercase().contains(&keyword.to_lowercase())
    }

    /// 集货日期是否为指定日期
    pub fn collected_on(&self, date: NaiveDate) -> bool {
        self.collection_date
            .map(|d| same_calendar_day(&d, &date))
            .unwrap_or(false)
    }
}

// ==========================================
// LoadView - 单车视图
// ==========================================
// 临时对象: 每次生成消息时重新计算
#[derive(Debug, Clone)]
pub struct LoadView<'a> {
    load_number: String,
    records: Vec<&'a CollectionRecord>,
    reference_date: NaiveDate,
}

impl<'a> LoadView<'a> {
    /// 选取某装载编号的全部记录
    ///
    /// # 参数
    /// - records: 全部集货记录
    /// - load_number: 装载编号（与 CollectionRecord.load_number 精确比较）
    /// - reference_date: 参考日期（"明天"）
    ///
    /// # 返回
    /// - None: 没有匹配记录
    pub fn select(
        records: &'a [CollectionRecord],
        load_number: &str,
        reference_date: NaiveDate,
    ) -> Option<Self> {
        let selected: Vec<&CollectionRecord> = records
            .iter()
            .filter(|r| r.load_number == load_number)
            .collect();

        if selected.is_empty() {
            return None;
        }

        Some(Self {
            load_number: load_number.to_string(),
            records: selected,
            reference_date,
        })
    }

    pub fn load_number(&self) -> &str {
        &self.load_number
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// 全部记录（源顺序）
    pub fn records(&self) -> &[&'a CollectionRecord] {
        &self.records
    }

    /// 首条记录（视图非空）
    pub fn first(&self) -> &'a CollectionRecord {
        self.records[0]
    }

    /// 今日集货（参考日期前一天）
    pub fn today(&self) -> Vec<&'a CollectionRecord> {
        match self.reference_date.pred_opt() {
            Some(today) => self.collected_on(today),
            None => Vec::new(),
        }
    }

    /// 明日集货（参考日期当天）
    pub fn tomorrow(&self) -> Vec<&'a CollectionRecord> {
        self.collected_on(self.reference_date)
    }

    fn collected_on(&self, date: NaiveDate) -> Vec<&'a CollectionRecord> {
        self.records
            .iter()
            .copied()
            .filter(|r| r.collected_on(date))
            .collect()
    }
}
