// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

/// 默认表头（列顺序与常见导出一致）
pub const DEFAULT_HEADERS: [&str; 12] = [
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

// ==========================================
// 集货计划行构建器
// ==========================================

#[derive(Clone)]
pub struct ScheduleRow {
    load: String,
    site: String,
    destination: String,
    pallets: String,
    driver: String,
    vehicle: String,
    trailer: String,
    notes: String,
    time_from: String,
    date: String,
}

impl ScheduleRow {
    pub fn new(load: &str) -> Self {
        Self {
            load: load.to_string(),
            site: "X - Site One".to_string(),
            destination: "DepotA".to_string(),
            pallets: "2".to_string(),
            driver: "Jane Doe".to_string(),
            vehicle: "CDE".to_string(),
            trailer: "99".to_string(),
            notes: String::new(),
            time_from: "08:00".to_string(),
            date: String::new(),
        }
    }

    pub fn site(mut self, site: &str) -> Self {
        self.site = site.to_string();
        self
    }

    pub fn destination(mut self, destination: &str) -> Self {
        self.destination = destination.to_string();
        self
    }

    pub fn pallets(mut self, pallets: &str) -> Self {
        self.pallets = pallets.to_string();
        self
    }

    pub fn driver(mut self, driver: &str) -> Self {
        self.driver = driver.to_string();
        self
    }

    pub fn vehicle(mut self, vehicle: &str) -> Self {
        self.vehicle = vehicle.to_string();
        self
    }

    pub fn trailer(mut self, trailer: &str) -> Self {
        self.trailer = trailer.to_string();
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn time_from(mut self, time_from: &str) -> Self {
        self.time_from = time_from.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// 按 DEFAULT_HEADERS 的列顺序输出
    fn cells(&self) -> Vec<String> {
        vec![
            self.load.clone(),
            self.site.clone(),
            self.destination.clone(),
            self.pallets.clone(),
            self.driver.clone(),
            self.vehicle.clone(),
            self.trailer.clone(),
            self.notes.clone(),
            self.time_from.clone(),
            String::new(),
            String::new(),
            self.date.clone(),
        ]
    }
}

/// 生成制表符分隔的集货计划文本
pub fn schedule_text(rows: &[ScheduleRow]) -> String {
    let mut lines = vec![DEFAULT_HEADERS.join("\t")];
    lines.extend(rows.iter().map(|r| r.cells().join("\t")));
    lines.join("\n")
}

/// 燃油密码表二维表
pub fn fuel_grid(entries: &[(&str, &str)]) -> Vec<Vec<String>> {
    let mut grid = vec![vec![
        "Cab Phone".to_string(),
        "Registration".to_string(),
        "Fuel Pin".to_string(),
    ]];
    for (registration, pin) in entries {
        grid.push(vec![
            "07700 900000".to_string(),
            registration.to_string(),
            pin.to_string(),
        ]);
    }
    grid
}
