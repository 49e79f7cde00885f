// ==========================================
// 司机派车消息生成 - 燃油密码表加载器
// ==========================================
// 输入: 单元格二维表（首行为表头,列顺序不固定）
// 红线: 缺少 Registration / Pin 列 → 直接失败,不产生部分结果
// ==========================================

use crate::domain::fuel::FuelReference;
use crate::importer::error::{ImportError, ImportResult};

const REGISTRATION_HEADER: &str = "registration";
const PIN_HEADER: &str = "pin";

pub struct FuelReferenceLoader;

impl FuelReferenceLoader {
    /// 从二维表构建燃油密码表
    ///
    /// # 规则
    /// - 表头包含 "registration" / "pin"（不区分大小写）的第一列
    /// - 两列均非空的行才登记；短码 = 车牌末尾 3 位
    /// - 短码重复时后出现者覆盖
    pub fn load<S: AsRef<str>>(&self, grid: &[Vec<S>]) -> ImportResult<FuelReference> {
        let headers: &[S] = grid.first().map(|row| row.as_slice()).unwrap_or(&[]);

        let reg_idx = find_column(headers, REGISTRATION_HEADER)
            .ok_or_else(|| ImportError::MissingColumn("Registration".to_string()))?;
        let pin_idx = find_column(headers, PIN_HEADER)
            .ok_or_else(|| ImportError::MissingColumn("Pin".to_string()))?;

        let mut fuel = FuelReference::new();
        for (row_idx, row) in grid.iter().enumerate().skip(1) {
            let registration = row.get(reg_idx).map(|v| v.as_ref().trim()).unwrap_or("");
            let pin = row.get(pin_idx).map(|v| v.as_ref().trim()).unwrap_or("");

            if registration.is_empty() || pin.is_empty() {
                tracing::debug!("燃油密码表第 {} 行缺少车牌或密码,已跳过", row_idx + 1);
                continue;
            }

            fuel.insert(registration, pin);
        }

        tracing::info!("Successfully loaded {} truck records", fuel.len());
        Ok(fuel)
    }
}

fn find_column<S: AsRef<str>>(headers: &[S], term: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.as_ref().to_lowercase().contains(term))
}
