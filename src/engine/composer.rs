// ==========================================
// 司机派车消息生成 - 消息组装器
// ==========================================
// 输入: 单车视图 + 燃油密码表 + 消息配置
// 输出: 一段纯文本消息
// 红线: 纯函数,相同输入 → 逐字节相同输出
// ==========================================
// 段落顺序（即输出顺序）:
// 1. 称呼  2. 车辆/挂车  3. 燃油密码  4. 先卸货（条件）
// 5. 今日集货  6. 明日集货  7. 送货路线  8. 预约号（条件）  9. 结束语
// ==========================================

use crate::config::MessageProfile;
use crate::domain::collection::{CollectionRecord, LoadView};
use crate::domain::fuel::FuelReference;
use crate::engine::error::ComposeError;
use crate::engine::routing::{build_delivery_routing, delivery_order};
use crate::engine::temporal::{minutes_to_time, subtract_one_hour, time_to_minutes};
use chrono::NaiveDate;

const HITCH_UP_KEYWORD: &str = "hitch up";
const TIP_KEYWORD: &str = "tip";

const CLOSING: &str = "Once empty please give the office a call.\nPlease confirm.\nThank you.";

pub struct MessageComposer {
    profile: MessageProfile,
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::new(MessageProfile::default())
    }
}

impl MessageComposer {
    pub fn new(profile: MessageProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &MessageProfile {
        &self.profile
    }

    /// 按装载编号生成消息
    ///
    /// # 返回
    /// - Err(EmptyLoad): 没有该装载编号的记录
    pub fn compose_for_load(
        &self,
        records: &[CollectionRecord],
        load_number: &str,
        reference_date: NaiveDate,
        fuel: &FuelReference,
    ) -> Result<String, ComposeError> {
        let view = LoadView::select(records, load_number, reference_date).ok_or_else(|| {
            ComposeError::EmptyLoad {
                load_number: load_number.to_string(),
            }
        })?;
        Ok(self.compose(&view, fuel))
    }

    /// 组装单车消息
    pub fn compose(&self, view: &LoadView<'_>, fuel: &FuelReference) -> String {
        let first = view.first();

        let mut message = format!(
            "Hi {},\n{}\nFuel Pin: {}",
            self.salutation(first),
            self.vehicle_clause(view, fuel),
            self.fuel_pin(first, fuel)
        );

        if let Some(tip) = self.tip_clause(view) {
            message.push_str(&tip);
        }

        let today = view.today();
        if !today.is_empty() {
            message.push_str("\n\nToday please load from: \n");
            message.push_str(&collection_lines(&today));
        }

        let tomorrow = view.tomorrow();
        if !tomorrow.is_empty() {
            message.push_str(&format!(
                "\n\nTomorrow, please be at your first collection site for {}. Please plan your start time accordingly.\nCollections list:\n",
                earliest_time(&tomorrow)
            ));
            message.push_str(&collection_lines(&tomorrow));
        }

        let destinations = delivery_order(view.records().iter().copied());
        message.push_str(&format!(
            "\n\nOnce loaded please deliver {}.",
            build_delivery_routing(&destinations)
        ));

        let booking_refs = self.booking_refs(view);
        if !booking_refs.is_empty() {
            message.push_str("\n\n");
            message.push_str(&booking_refs.join("\n"));
        }

        message.push_str("\n\n");
        message.push_str(CLOSING);
        message
    }

    // ===== 各段落 =====

    /// 司机名（第一个空格前）
    fn salutation<'r>(&'r self, first: &'r CollectionRecord) -> &'r str {
        if first.driver_name.is_empty() {
            return &self.profile.default_driver_name;
        }
        first.driver_name.split(' ').next().unwrap_or(&first.driver_name)
    }

    /// "<车牌> [hitch up ]with <挂车>"
    fn vehicle_clause(&self, view: &LoadView<'_>, fuel: &FuelReference) -> String {
        let first = view.first();
        let registration = fuel
            .get(&first.vehicle_code)
            .map(|entry| entry.full_registration.as_str())
            .unwrap_or(&first.vehicle_code);

        let prefix = &self.profile.trailer_prefix;
        let trailer = if first.trailer_code.starts_with(prefix.as_str()) {
            first.trailer_code.clone()
        } else {
            format!("{}{}", prefix, first.trailer_code)
        };

        let hitch_up = view
            .records()
            .iter()
            .any(|r| r.notes_contain(HITCH_UP_KEYWORD));
        let joiner = if hitch_up { "hitch up with" } else { "with" };

        format!("{} {} {}", registration, joiner, trailer)
    }

    fn fuel_pin<'r>(&'r self, first: &CollectionRecord, fuel: &'r FuelReference) -> &'r str {
        fuel.get(&first.vehicle_code)
            .map(|entry| entry.pin.as_str())
            .unwrap_or(&self.profile.unknown_pin)
    }

    /// 先卸货再集货（取第一条备注含 "tip" 的记录,开始时间提前 1 小时）
    fn tip_clause(&self, view: &LoadView<'_>) -> Option<String> {
        let tip_row = view
            .records()
            .iter()
            .find(|r| r.notes_contain(TIP_KEYWORD))?;

        let start = subtract_one_hour(&tip_row.collection_time_from)
            .or_else(|| subtract_one_hour(&self.profile.default_tip_start))
            .unwrap_or_default();

        Some(format!(
            "\nStart at {}\n\nFirst {}, once empty please start loading from:",
            start, tip_row.notes
        ))
    }

    /// 目的地含指定关键字且备注含预约标记的记录
    fn booking_refs(&self, view: &LoadView<'_>) -> Vec<String> {
        view.records()
            .iter()
            .filter(|r| {
                r.delivery_destination
                    .contains(self.profile.booking_ref_destination.as_str())
                    && r.notes.contains(self.profile.booking_ref_marker.as_str())
            })
            .map(|r| format!("{} booking ref: {}", r.delivery_destination, r.notes))
            .collect()
    }
}

/// "<集货点>  <托盘>p  <目的地>"（按源顺序,每行一条）
fn collection_lines(records: &[&CollectionRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{}  {}p  {}",
                strip_site_prefix(&r.collection_site),
                r.pallet_count,
                r.delivery_destination
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 去掉集货点第一个 '-' 及之前的前缀（不去空白）
fn strip_site_prefix(site: &str) -> &str {
    match site.split_once('-') {
        Some((_, rest)) => rest,
        None => site,
    }
}

/// 最早开始时间；无可解析时间时为空
fn earliest_time(records: &[&CollectionRecord]) -> String {
    records
        .iter()
        .filter_map(|r| time_to_minutes(&r.collection_time_from))
        .min()
        .map(minutes_to_time)
        .unwrap_or_default()
}
