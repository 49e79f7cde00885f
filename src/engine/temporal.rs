// ==========================================
// 司机派车消息生成 - 时间工具
// ==========================================
// 职责: 日期比较 / 时刻 ↔ 分钟换算 / 集货日期解析
// 红线: 纯函数,不读取系统时钟
// ==========================================

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// 是否同一天（仅比较年/月/日）
pub fn same_calendar_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// "HH:MM" → 分钟数
///
/// 多余的 ":SS" 部分忽略；时或分不是整数时返回 None
pub fn time_to_minutes(time: &str) -> Option<i32> {
    let (hours, minutes) = split_clock(time)?;
    Some(hours * 60 + minutes)
}

/// 分钟数 → "HH:MM"（补零,24 小时制,不做回绕）
pub fn minutes_to_time(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// 小时减一
///
/// 只对小时做减法，不跨零点借位："00:15" → "-1:15"
pub fn subtract_one_hour(time: &str) -> Option<String> {
    let (hours, minutes) = split_clock(time)?;
    Some(format!("{:02}:{:02}", hours - 1, minutes))
}

fn split_clock(time: &str) -> Option<(i32, i32)> {
    let mut parts = time.trim().split(':');
    let hours = parts.next()?.trim().parse::<i32>().ok()?;
    let minutes = parts.next()?.trim().parse::<i32>().ok()?;
    Some((hours, minutes))
}

// ==========================================
// 集货日期解析
// ==========================================
// 1. 日/月/年（如 01/06/2025）
// 2. 其他常见格式兜底
// 3. 无法解析 → None

/// 兜底日期格式
const FALLBACK_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y", "%d %b %Y", "%d-%b-%Y"];

/// 兜底日期时间格式（取日期部分）
const FALLBACK_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

pub fn parse_collection_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() == 3 {
        return parse_day_month_year(&parts);
    }

    parse_fallback(value)
}

fn parse_day_month_year(parts: &[&str]) -> Option<NaiveDate> {
    let day = parts[0].trim().parse::<u32>().ok()?;
    let month = parts[1].trim().parse::<u32>().ok()?;
    let mut year = parts[2].trim().parse::<i32>().ok()?;

    // 两位年份按 20yy 处理
    if (0..100).contains(&year) && parts[2].trim().len() <= 2 {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_fallback(value: &str) -> Option<NaiveDate> {
    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }

    for fmt in FALLBACK_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
}
