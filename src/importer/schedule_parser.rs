// ==========================================
// 司机派车消息生成 - 集货计划解析器
// ==========================================
// 输入: 从 Excel 复制粘贴的制表符分隔文本（首行为表头）
// 红线: 单行异常不阻断后续行；空输入 → 空结果
// ==========================================

use crate::domain::collection::CollectionRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{ColumnMap, FieldMapper};
use crate::domain::types::ScheduleField;
use csv::ReaderBuilder;

/// 有效数据行的最少单元格数（需大于该值）
const MIN_CELLS_EXCLUSIVE: usize = 5;

pub struct ScheduleParser {
    delimiter: u8,
    mapper: FieldMapper,
}

impl Default for ScheduleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleParser {
    /// 制表符分隔
    pub fn new() -> Self {
        Self {
            delimiter: b'\t',
            mapper: FieldMapper,
        }
    }

    /// 自定义分隔符（须为 ASCII 字符）
    pub fn with_delimiter(delimiter: char) -> ImportResult<Self> {
        if !delimiter.is_ascii() {
            return Err(ImportError::MalformedInput(format!(
                "delimiter {:?} is not a single-byte character",
                delimiter
            )));
        }
        Ok(Self {
            delimiter: delimiter as u8,
            mapper: FieldMapper,
        })
    }

    /// 解析集货计划文本
    ///
    /// # 返回
    /// - Ok(Vec<CollectionRecord>): 按源行顺序的有效记录
    /// - Err(MalformedInput): 表头行无法读取
    pub fn parse(&self, text: &str) -> ImportResult<Vec<CollectionRecord>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .quoting(false) // 粘贴文本按原样切分,引号不做特殊处理
            .from_reader(text.as_bytes());

        let mut rows = reader.records();

        // 读取表头
        let headers = match rows.next() {
            Some(Ok(header_row)) => header_row,
            Some(Err(e)) => {
                return Err(ImportError::MalformedInput(format!(
                    "header row could not be read: {}",
                    e
                )))
            }
            None => return Ok(Vec::new()),
        };

        let header_cells: Vec<&str> = headers.iter().collect();
        let columns = ColumnMap::from_headers(&header_cells);
        let unresolved = columns.unresolved();
        if !unresolved.is_empty() {
            tracing::debug!(
                "集货计划未匹配列: {}",
                unresolved
                    .iter()
                    .map(ScheduleField::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        // 读取数据行
        let mut records = Vec::new();
        for (row_idx, result) in rows.enumerate() {
            let row_number = row_idx + 2; // 源文本行号（表头为第 1 行）
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!("集货计划第 {} 行无法读取,已跳过: {}", row_number, e);
                    continue;
                }
            };

            if row.len() <= MIN_CELLS_EXCLUSIVE {
                tracing::debug!("第 {} 行单元格不足 ({}),已跳过", row_number, row.len());
                continue;
            }

            let cells: Vec<&str> = row.iter().collect();
            if columns.cell(&cells, ScheduleField::LoadNumber).is_empty() {
                tracing::debug!("第 {} 行装载编号为空,已跳过", row_number);
                continue;
            }

            records.push(self.mapper.map_to_record(&columns, &cells));
        }

        tracing::info!("Parsed {} collection records", records.len());
        Ok(records)
    }
}
