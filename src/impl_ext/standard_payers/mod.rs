/// Custodian whose settlements are batched per area instead of per record.
/// Matched as a substring of the payer name.
pub const AREA_BATCH_PAYER: &str = "الماسی";

/// Couriers: expenses are booked to the head office, and "send"/"bring"
/// errands are always local transport.
pub const COURIER_PAYERS: [&str; 2] = ["اقا عطا", "خانم زابلی"];
pub const COURIER_ERRAND_KEYWORDS: [&str; 2] = ["ارسال", "اوردن"];

/// Project whose level-4 cost segment comes from the cost-center column.
pub const COST_CENTER_PROJECT: &str = "پرند";
/// Level-4 default for that project, for both cost and fee rows.
pub const COST_CENTER_PROJECT_DEFAULT_LEVEL4: &str = "005021";

/// Level-4 segment of each custodian's petty-cash account, used on settlement
/// rows.
pub const SETTLEMENT_LEVEL4: &[(&str, &str)] = &[
    ("آقای ویسی", "100094"),
    ("اقا عطا", "101026"),
    ("اقای نظرخانی", "101973"),
    ("اقای مستقیمی", "101381"),
    ("اقای وثوقی راد", "100388"),
    ("خانم فراهانی", "100424"),
    ("اقای الماسی", "101192"),
    ("اقای حقی", "101240"),
    ("اقای حبیب زاده", "102830"),
    ("اقای بهروز پور", "101720"),
    ("خانم زابلی", "101986"),
    ("اقای مصطفی زاده", "101373"),
    ("اقای اصلان", "100039"),
    ("اقای روان مهر", "101967"),
    ("اقای مشهدی ملک", "101520"),
];

pub fn is_area_batch_payer(payer: &str) -> bool {
    payer.contains(AREA_BATCH_PAYER)
}

pub fn is_courier_payer(payer: &str) -> bool {
    COURIER_PAYERS.contains(&payer.trim())
}

pub fn settlement_level4(payer: &str) -> Option<&'static str> {
    let payer = payer.trim();
    SETTLEMENT_LEVEL4
        .iter()
        .find(|(name, _)| *name == payer)
        .map(|(_, level4)| *level4)
}
