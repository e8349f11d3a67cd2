use jiff::civil::Date;

/// Days from `today` until an ISO `YYYY-MM-DD` expiry date, floored at
/// zero. `None` when the string doesn't parse; callers then show the raw
/// value instead of a countdown.
pub fn days_until(expiry_date: &str, today: Date) -> Option<i32> {
    let expiry: Date = expiry_date.parse().ok()?;
    let span = today.until(expiry).ok()?;
    Some(span.get_days().max(0))
}

/// Today in the system timezone.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

/// Long-form date for display ("January 15, 2024"). Falls back to the raw
/// string when it isn't an ISO date.
pub fn format_date(date_str: &str) -> String {
    match date_str.parse::<Date>() {
        Ok(date) => date.strftime("%B %d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Countdown phrasing used next to expiring bundles.
pub fn expiry_label(days_left: i32) -> String {
    match days_left {
        0 => "Expires today".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{n} days left"),
    }
}
