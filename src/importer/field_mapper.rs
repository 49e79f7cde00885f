// ==========================================
// 司机派车消息生成 - 字段映射器实现
// ==========================================
// 依据: 集货计划表头约定（按检索词匹配,列顺序不固定）
// 职责: 表头 → 列号映射 + 行 → CollectionRecord
// ==========================================

use crate::domain::collection::CollectionRecord;
use crate::domain::types::ScheduleField;
use crate::engine::temporal::parse_collection_date;

// ==========================================
// ColumnMap - 字段 → 列号
// ==========================================
// 表头只解析一次,之后每行按列号直接取值
// 未匹配字段 = None,读取时返回空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [Option<usize>; 10],
}

impl ColumnMap {
    /// 从表头行解析列号（取第一个包含检索词的表头）
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let lowered: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .collect();

        let mut map = ColumnMap::default();
        for field in ScheduleField::ALL {
            let term = field.search_term();
            map.columns[field.slot()] = lowered.iter().position(|h| h.contains(term));
        }
        map
    }

    /// 字段所在列号
    pub fn index_of(&self, field: ScheduleField) -> Option<usize> {
        self.columns[field.slot()]
    }

    /// 未匹配到的字段
    pub fn unresolved(&self) -> Vec<ScheduleField> {
        ScheduleField::ALL
            .into_iter()
            .filter(|f| self.index_of(*f).is_none())
            .collect()
    }

    /// 读取单元格（去首尾空白；列缺失或行过短 → 空字符串）
    pub fn cell<'r, S: AsRef<str>>(&self, row: &'r [S], field: ScheduleField) -> &'r str {
        self.index_of(field)
            .and_then(|idx| row.get(idx))
            .map(|v| v.as_ref().trim())
            .unwrap_or("")
    }
}

pub struct FieldMapper;

impl FieldMapper {
    /// 将一行映射为 CollectionRecord
    pub fn map_to_record<S: AsRef<str>>(&self, columns: &ColumnMap, row: &[S]) -> CollectionRecord {
        let text = |field| columns.cell(row, field).to_string();

        CollectionRecord {
            load_number: text(ScheduleField::LoadNumber),
            collection_site: text(ScheduleField::CollectionSite),
            delivery_destination: text(ScheduleField::DeliveryDestination),
            pallet_count: text(ScheduleField::Pallets),
            driver_name: text(ScheduleField::Driver),
            vehicle_code: text(ScheduleField::Vehicle),
            trailer_code: text(ScheduleField::Trailer),
            notes: text(ScheduleField::Notes),
            collection_time_from: text(ScheduleField::TimeFrom),
            collection_date: parse_collection_date(columns.cell(row, ScheduleField::Date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADERS: [&str; 12] = [
        "Load Number",
        "Collection Site",
        "Delivery Destination",
        "Pallets Ordered",
        "Driver",
        "Vehicle",
        "Trailer",
        "Notes",
        "Planned Collect Time From",
        "Planned Collect Time By",
        "Deadline Time",
        "Collection Site Arrival Date",
    ];

    #[test]
    fn test_resolves_first_matching_header() {
        let columns = ColumnMap::from_headers(&HEADERS);

        assert_eq!(columns.index_of(ScheduleField::LoadNumber), Some(0));
        assert_eq!(columns.index_of(ScheduleField::CollectionSite), Some(1));
        assert_eq!(columns.index_of(ScheduleField::Pallets), Some(3));
        assert_eq!(columns.index_of(ScheduleField::TimeFrom), Some(8));
        assert_eq!(columns.index_of(ScheduleField::Date), Some(11));
        assert!(columns.unresolved().is_empty());
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let headers = ["DATE", "notes", "LOAD no", "vehicle reg"];
        let columns = ColumnMap::from_headers(&headers);

        assert_eq!(columns.index_of(ScheduleField::Date), Some(0));
        assert_eq!(columns.index_of(ScheduleField::Notes), Some(1));
        assert_eq!(columns.index_of(ScheduleField::LoadNumber), Some(2));
        assert_eq!(columns.index_of(ScheduleField::Vehicle), Some(3));
        assert_eq!(columns.index_of(ScheduleField::Trailer), None);
    }

    #[test]
    fn test_unresolved_field_reads_empty() {
        let columns = ColumnMap::from_headers(&["Load", "Driver"]);
        let row = ["5", "Jane Doe", "extra"];

        assert_eq!(columns.cell(&row, ScheduleField::Trailer), "");
        assert_eq!(columns.cell(&row, ScheduleField::Driver), "Jane Doe");
    }

    #[test]
    fn test_map_to_record_trims_and_parses_date() {
        let columns = ColumnMap::from_headers(&HEADERS);
        let row = [
            " 1 ", "GHS-Greenhouse", "Aldi-Darlington", "1", "Vygantas Bogusas", "XFH", "69DD",
            "Hitch up", "16:00", "17:00", "18:00", "01/06/2025",
        ];

        let record = FieldMapper.map_to_record(&columns, &row);
        assert_eq!(record.load_number, "1");
        assert_eq!(record.trailer_code, "69DD");
        assert_eq!(record.collection_time_from, "16:00");
        assert_eq!(
            record.collection_date,
            Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        );
    }

    #[test]
    fn test_short_row_yields_empty_fields() {
        let columns = ColumnMap::from_headers(&HEADERS);
        let row = ["3", "Site", "Dest", "2", "Ann", "ABC"];

        let record = FieldMapper.map_to_record(&columns, &row);
        assert_eq!(record.notes, "");
        assert_eq!(record.collection_date, None);
    }
}
