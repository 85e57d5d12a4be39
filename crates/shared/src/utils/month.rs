use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// First and last instant of the current month in the server's local time
/// zone, expressed in UTC.
pub fn current_month_bounds() -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Local::now();
    let today = now.date_naive();

    let first_day =
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let first_of_next_month = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let last_day = first_of_next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(today);

    let end_of_day =
        NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN);

    let start = Local
        .from_local_datetime(&first_day.and_time(NaiveTime::MIN))
        .earliest()
        .unwrap_or(now);
    let end = Local
        .from_local_datetime(&last_day.and_time(end_of_day))
        .latest()
        .unwrap_or(now);

    (start.with_timezone(&Utc), end.with_timezone(&Utc))
}

/// Lower bound used when a time-window query omits it.
pub fn min_query_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1991, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
