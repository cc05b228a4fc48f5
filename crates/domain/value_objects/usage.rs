use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// Fresh per-request usage counts for a workspace. Counted from persisted
/// rows on every read; never cached and never fed back into limit
/// resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageCounters {
    pub daily_leads_used: i64,
    pub monthly_leads_used: i64,
    pub team_members_used: i64,
    pub campaigns_used: i64,
    pub templates_used: i64,
    pub email_accounts_used: i64,
}

/// Start of the current UTC day, the lower bound for daily lead counts.
pub fn utc_day_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Start of the current UTC calendar month, the lower bound for monthly
/// lead counts.
pub fn utc_month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    first.and_time(NaiveTime::MIN).and_utc()
}
