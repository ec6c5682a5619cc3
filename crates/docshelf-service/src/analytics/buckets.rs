//! Calendar bucketing in Korea Standard Time (UTC+9, no DST).

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};

use docshelf_entity::analytics::{AnalyticsPeriod, DayBucket, HourBucket, WeekdayBucket};

/// Korea Standard Time.
pub const KST: FixedOffset = match FixedOffset::east_opt(9 * 3600) {
    Some(offset) => offset,
    None => panic!("KST offset out of range"),
};

/// Days covered by the group detail trend.
pub const DETAIL_TREND_DAYS: i64 = 30;

/// Weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Wall-clock time in KST.
pub fn to_kst(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    ts.with_timezone(&KST)
}

/// Calendar date in KST.
pub fn kst_date(ts: DateTime<Utc>) -> NaiveDate {
    to_kst(ts).date_naive()
}

/// The UTC instant at which `date` begins in KST.
pub fn kst_day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc() - Duration::seconds(KST.local_minus_utc().into())
}

/// Start of the reporting window ending at `now`.
pub fn period_start(period: AnalyticsPeriod, now: DateTime<Utc>) -> DateTime<Utc> {
    let days_back = match period {
        AnalyticsPeriod::Today => 0,
        AnalyticsPeriod::Week => 7,
        AnalyticsPeriod::Month => 30,
    };
    kst_day_start(kst_date(now - Duration::days(days_back)))
}

/// 24 hourly buckets.
pub fn hourly(clicks: &[DateTime<Utc>]) -> Vec<HourBucket> {
    let mut counts = [0i64; 24];
    for ts in clicks {
        counts[to_kst(*ts).hour() as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(hour, count)| HourBucket {
            hour: hour as u32,
            count: *count,
        })
        .collect()
}

/// Days that saw clicks, ascending.
pub fn daily(clicks: &[DateTime<Utc>]) -> Vec<DayBucket> {
    let mut counts: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for ts in clicks {
        *counts.entry(kst_date(*ts)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(date, count)| DayBucket { date, count })
        .collect()
}

/// Every day in `[from, to]`, ascending, zero-filled.
pub fn daily_filled(clicks: &[DateTime<Utc>], from: NaiveDate, to: NaiveDate) -> Vec<DayBucket> {
    let mut counts: BTreeMap<NaiveDate, i64> = from
        .iter_days()
        .take_while(|d| *d <= to)
        .map(|d| (d, 0))
        .collect();
    for ts in clicks {
        if let Some(count) = counts.get_mut(&kst_date(*ts)) {
            *count += 1;
        }
    }
    counts
        .into_iter()
        .map(|(date, count)| DayBucket { date, count })
        .collect()
}

/// 7 weekday buckets, Sunday first.
pub fn weekday(clicks: &[DateTime<Utc>]) -> Vec<WeekdayBucket> {
    let mut counts = [0i64; 7];
    for ts in clicks {
        counts[to_kst(*ts).weekday().num_days_from_sunday() as usize] += 1;
    }
    WEEKDAY_LABELS
        .iter()
        .zip(counts)
        .map(|(label, count)| WeekdayBucket {
            weekday: label.to_string(),
            count,
        })
        .collect()
}

/// Hours reaching the maximum count, and that count.
///
/// No hours are reported when there were no clicks at all.
pub fn peak_hours(hours: &[HourBucket]) -> (Vec<u32>, i64) {
    let peak = hours.iter().map(|h| h.count).max().unwrap_or(0);
    if peak == 0 {
        return (Vec::new(), 0);
    }
    let peaks = hours
        .iter()
        .filter(|h| h.count == peak)
        .map(|h| h.hour)
        .collect();
    (peaks, peak)
}
