// ==========================================
// 司机派车消息 API
// ==========================================
// 职责: 封装 燃油密码表上传 → 集货计划粘贴 → 选择装载编号 → 生成消息
// 红线: 每次上传整体替换；失败时保留原有数据与上一条消息
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::MessageProfile;
use crate::domain::collection::CollectionRecord;
use crate::domain::fuel::FuelReference;
use crate::engine::MessageComposer;
use crate::importer::file_parser::{read_grid, read_text};
use crate::importer::{FuelReferenceLoader, ScheduleParser};
use chrono::NaiveDate;
use std::path::Path;

/// 司机派车消息 API
pub struct DriverMessageApi {
    composer: MessageComposer,
    fuel_reference: FuelReference,
    records: Vec<CollectionRecord>,
    last_message: Option<String>,
}

impl Default for DriverMessageApi {
    fn default() -> Self {
        Self::new(MessageProfile::default())
    }
}

impl DriverMessageApi {
    pub fn new(profile: MessageProfile) -> Self {
        Self {
            composer: MessageComposer::new(profile),
            fuel_reference: FuelReference::new(),
            records: Vec::new(),
            last_message: None,
        }
    }

    // ==========================================
    // 燃油密码表
    // ==========================================

    /// 加载燃油密码表（二维表）
    ///
    /// # 返回
    /// - Ok(usize): 登记的车辆数
    /// - Err: 缺少必需列，原有密码表保持不变
    pub fn load_fuel_reference<S: AsRef<str>>(&mut self, grid: &[Vec<S>]) -> ApiResult<usize> {
        let fuel = FuelReferenceLoader.load(grid)?;
        let count = fuel.len();
        self.fuel_reference = fuel;
        Ok(count)
    }

    /// 从 .xlsx/.xls/.csv 文件加载燃油密码表
    pub fn load_fuel_reference_file<P: AsRef<Path>>(&mut self, path: P) -> ApiResult<usize> {
        let grid = read_grid(path)?;
        self.load_fuel_reference(&grid)
    }

    pub fn fuel_reference(&self) -> &FuelReference {
        &self.fuel_reference
    }

    // ==========================================
    // 集货计划
    // ==========================================

    /// 加载集货计划文本
    ///
    /// # 返回
    /// - Ok(usize): 有效记录数
    pub fn load_schedule(&mut self, text: &str) -> ApiResult<usize> {
        let parser = ScheduleParser::with_delimiter(self.composer.profile().schedule_delimiter)?;
        let records = parser.parse(text)?;
        let count = records.len();
        self.records = records;
        Ok(count)
    }

    /// 从文本文件加载集货计划
    pub fn load_schedule_file<P: AsRef<Path>>(&mut self, path: P) -> ApiResult<usize> {
        let text = read_text(path)?;
        self.load_schedule(&text)
    }

    pub fn records(&self) -> &[CollectionRecord] {
        &self.records
    }

    /// 可选装载编号（去重,按数值升序,非数字排最后）
    pub fn available_loads(&self) -> Vec<String> {
        let mut loads: Vec<String> = Vec::new();
        for record in &self.records {
            if !loads.contains(&record.load_number) {
                loads.push(record.load_number.clone());
            }
        }

        // 稳定排序: 非数字编号保持首次出现顺序
        loads.sort_by_key(|load| match leading_integer(load) {
            Some(n) => (0, n),
            None => (1, 0),
        });
        loads
    }

    // ==========================================
    // 生成消息
    // ==========================================

    /// 生成指定装载编号的司机消息
    ///
    /// # 参数
    /// - load_number: 装载编号
    /// - reference_date: "明天"的日期（由调用方提供）
    ///
    /// # 返回
    /// - Ok(&str): 生成的消息
    /// - Err: 未选择装载编号 / 数据未就绪 / 没有该装载编号的记录
    ///   （失败时上一条消息保持不变）
    pub fn generate(&mut self, load_number: &str, reference_date: NaiveDate) -> ApiResult<&str> {
        let load_number = load_number.trim();
        if load_number.is_empty() {
            return Err(ApiError::InvalidInput("Please select a load number".to_string()));
        }
        if self.fuel_reference.is_empty() {
            return Err(ApiError::NotReady("Please upload the fuel pin file first".to_string()));
        }
        if self.records.is_empty() {
            return Err(ApiError::NotReady("Please paste the collection data first".to_string()));
        }

        let message = self.composer.compose_for_load(
            &self.records,
            load_number,
            reference_date,
            &self.fuel_reference,
        )?;

        tracing::info!(load = load_number, date = %reference_date, "生成司机消息");
        Ok(self.last_message.insert(message).as_str())
    }

    /// 最近一次成功生成的消息
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }
}

/// 解析开头的整数部分（"12A" → 12）
fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}
