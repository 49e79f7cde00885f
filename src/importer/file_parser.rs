// ==========================================
// 司机派车消息生成 - 文件读取
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv) → 单元格二维表
//       文本文件 → 集货计划原文
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::{self, File};
use std::path::Path;

/// 单元格二维表（行优先,首行为表头）
pub type CellGrid = Vec<Vec<String>>;

// ==========================================
// CSV 读取
// ==========================================
pub struct CsvGridReader;

impl CsvGridReader {
    pub fn read(&self, path: &Path) -> ImportResult<CellGrid> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut grid = Vec::new();
        for result in reader.records() {
            let record = result?;
            grid.push(record.iter().map(|v| v.to_string()).collect());
        }

        Ok(grid)
    }
}

// ==========================================
// Excel 读取（第一个工作表）
// ==========================================
pub struct ExcelGridReader;

impl ExcelGridReader {
    pub fn read(&self, path: &Path) -> ImportResult<CellGrid> {
        let mut workbook = open_workbook_auto(path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no sheets".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let grid = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        Ok(grid)
    }
}

// ==========================================
// 通用读取（根据扩展名自动选择）
// ==========================================

/// 读取燃油密码表文件为二维表
pub fn read_grid<P: AsRef<Path>>(file_path: P) -> ImportResult<CellGrid> {
    let path = file_path.as_ref();

    // 检查文件存在
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let grid = match ext.as_str() {
        "csv" => CsvGridReader.read(path)?,
        "xlsx" | "xls" => ExcelGridReader.read(path)?,
        _ => return Err(ImportError::UnsupportedFormat(ext)),
    };

    tracing::debug!("读取 {} 行: {}", grid.len(), path.display());
    Ok(grid)
}

/// 读取集货计划文本文件
pub fn read_text<P: AsRef<Path>>(file_path: P) -> ImportResult<String> {
    let path = file_path.as_ref();

    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| {
        ImportError::MalformedInput(format!("{} is not valid UTF-8 text: {}", path.display(), e))
    })
}
