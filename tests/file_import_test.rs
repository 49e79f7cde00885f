// ==========================================
// 文件导入集成测试
// ==========================================
// 测试目标: Excel/CSV 燃油密码表 + 文本集货计划 → 消息
// ==========================================

mod helpers;

use chrono::NaiveDate;
use driver_messages::api::{ApiError, DriverMessageApi};
use driver_messages::importer::{read_grid, ImportError};
use helpers::{schedule_text, ScheduleRow};
use rust_xlsxwriter::Workbook;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn temp_with_suffix(suffix: &str) -> NamedTempFile {
    Builder::new().suffix(suffix).tempfile().unwrap()
}

/// 生成燃油密码表 Excel（密码以数字单元格存储）
fn write_fuel_workbook(rows: &[(&str, f64)]) -> NamedTempFile {
    let temp_file = temp_with_suffix(".xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Cab Phone").unwrap();
    worksheet.write_string(0, 1, "Vehicle Registration").unwrap();
    worksheet.write_string(0, 2, "Fuel PIN").unwrap();

    for (idx, (registration, pin)) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, "07700 900000").unwrap();
        worksheet.write_string(row, 1, *registration).unwrap();
        worksheet.write_number(row, 2, *pin).unwrap();
    }

    workbook.save(temp_file.path()).unwrap();
    temp_file
}

#[test]
fn test_fuel_reference_from_xlsx() {
    let workbook = write_fuel_workbook(&[("AB12CDE", 4321.0), ("LK19XFH", 8080.0)]);

    let grid = read_grid(workbook.path()).unwrap();
    assert_eq!(grid.len(), 3);
    assert_eq!(grid[0][1], "Vehicle Registration");

    let mut api = DriverMessageApi::default();
    let count = api.load_fuel_reference_file(workbook.path()).unwrap();
    assert_eq!(count, 2);

    let entry = api.fuel_reference().get("XFH").unwrap();
    assert_eq!(entry.full_registration, "LK19XFH");
    assert_eq!(entry.pin, "8080");
}

#[test]
fn test_fuel_reference_from_csv() {
    let mut csv_file = temp_with_suffix(".csv");
    writeln!(csv_file, "Registration,Pin").unwrap();
    writeln!(csv_file, "AB12CDE,4321").unwrap();
    writeln!(csv_file, "CD34CDE,9999").unwrap();

    let mut api = DriverMessageApi::default();
    let count = api.load_fuel_reference_file(csv_file.path()).unwrap();

    // 短码重复: 后出现者覆盖
    assert_eq!(count, 1);
    assert_eq!(api.fuel_reference().get("CDE").unwrap().pin, "9999");
}

#[test]
fn test_fuel_reference_missing_columns_in_file() {
    let mut csv_file = temp_with_suffix(".csv");
    writeln!(csv_file, "Vehicle,Phone").unwrap();
    writeln!(csv_file, "AB12CDE,0770").unwrap();

    let mut api = DriverMessageApi::default();
    let err = api.load_fuel_reference_file(csv_file.path()).unwrap_err();
    assert!(matches!(err, ApiError::Import(ImportError::MissingColumn(_))));
    assert!(api.fuel_reference().is_empty());
}

#[test]
fn test_generate_from_files() {
    let workbook = write_fuel_workbook(&[("AB12CDE", 4321.0)]);

    let mut schedule_file = temp_with_suffix(".tsv");
    let text = schedule_text(&[
        ScheduleRow::new("3").destination("DepotA").date("03/06/2025"),
        ScheduleRow::new("3").destination("DepotB").time_from("07:15").date("03/06/2025"),
    ]);
    write!(schedule_file, "{}", text).unwrap();

    let mut api = DriverMessageApi::default();
    api.load_fuel_reference_file(workbook.path()).unwrap();
    assert_eq!(api.load_schedule_file(schedule_file.path()).unwrap(), 2);
    assert_eq!(api.available_loads(), vec!["3"]);

    let date = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
    let message = api.generate("3", date).unwrap();

    assert!(message.starts_with("Hi Jane,\nAB12CDE with SLH99\nFuel Pin: 4321\n"));
    assert!(message.contains("first collection site for 07:15."));
    assert!(message.contains("deliver first to DepotB, then to DepotA."));
}

#[test]
fn test_schedule_file_not_found() {
    let mut api = DriverMessageApi::default();
    let err = api.load_schedule_file("no_such_plan.tsv").unwrap_err();
    assert!(matches!(err, ApiError::Import(ImportError::FileNotFound(_))));
}
