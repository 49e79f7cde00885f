// ==========================================
// 司机派车消息生成 - 燃油密码领域模型
// ==========================================
// 用途: 车头短码 → (燃油密码, 完整车牌)
// 生命周期: 每次上传整体替换,构建后只读
// ==========================================

use std::collections::HashMap;

/// 短码长度（完整车牌末尾 3 位）
pub const SHORT_CODE_LEN: usize = 3;

// ==========================================
// FuelEntry - 单车燃油信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelEntry {
    pub pin: String,               // 燃油密码（加油机授权码）
    pub full_registration: String, // 完整车牌
}

// ==========================================
// FuelReference - 燃油密码表
// ==========================================
// 红线: 同一短码至多一条（后出现者覆盖）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuelReference {
    entries: HashMap<String, FuelEntry>,
}

impl FuelReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按完整车牌登记一条记录，返回所用短码
    pub(crate) fn insert(&mut self, full_registration: &str, pin: &str) -> String {
        let code = short_code(full_registration);
        self.entries.insert(
            code.clone(),
            FuelEntry {
                pin: pin.to_string(),
                full_registration: full_registration.to_string(),
            },
        );
        code
    }

    /// 按短码查找（区分大小写）
    pub fn get(&self, code: &str) -> Option<&FuelEntry> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FuelEntry)> {
        self.entries.iter()
    }
}

/// 取车牌末尾 3 个字符作为短码（不足 3 个字符时取整串）
pub fn short_code(registration: &str) -> String {
    let count = registration.chars().count();
    registration
        .chars()
        .skip(count.saturating_sub(SHORT_CODE_LEN))
        .collect()
}
