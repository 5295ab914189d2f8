use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

// KST has no daylight saving, so a fixed shift is exact.
const KST_OFFSET_SECS: i64 = 9 * 3600;

/// Calendar date in Korea at `now_utc`.
pub fn kst_date(now_utc: DateTime<Utc>) -> NaiveDate {
    (now_utc + Duration::seconds(KST_OFFSET_SECS)).date_naive()
}

/// Long Korean date, e.g. `2026년 1월 5일`.
pub fn format_korean_date(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

pub fn report_date(now_utc: DateTime<Utc>) -> String {
    format_korean_date(kst_date(now_utc))
}
