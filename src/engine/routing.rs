// ==========================================
// 司机派车消息生成 - 送货路线措辞
// ==========================================
// 规则: 目的地按首次出现去重 → 整体倒序 → 按数量选择句式
// ==========================================

use crate::domain::collection::CollectionRecord;

/// 去重（保留首次出现顺序）后倒序
pub fn delivery_order<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a CollectionRecord>,
{
    let mut distinct: Vec<&'a str> = Vec::new();
    for record in records {
        let dest = record.delivery_destination.as_str();
        if !distinct.contains(&dest) {
            distinct.push(dest);
        }
    }
    distinct.reverse();
    distinct
}

/// 生成路线短语
///
/// - 1 个: "to X"
/// - 2 个: "first to X, then to Y"
/// - 3 个及以上: "first to X, then to B, ..., and finally to Z"
pub fn build_delivery_routing<S: AsRef<str>>(destinations: &[S]) -> String {
    match destinations {
        [] => String::new(),
        [only] => format!("to {}", only.as_ref()),
        [first, second] => format!("first to {}, then to {}", first.as_ref(), second.as_ref()),
        [first, middle @ .., last] => {
            let middle = middle
                .iter()
                .map(|d| format!("then to {}", d.as_ref()))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "first to {}, {}, and finally to {}",
                first.as_ref(),
                middle,
                last.as_ref()
            )
        }
    }
}
