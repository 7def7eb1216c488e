use chrono::DateTime;

/// Render a satoshi amount with comma thousands separators.
/// No currency symbol; negative amounts keep their sign.
pub fn format_sats(sats: i64) -> String {
    let digits = sats.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    let first_group = digits.len() % 3;
    if first_group > 0 {
        grouped.push_str(&digits[..first_group]);
    }
    for chunk in digits[first_group..].as_bytes().chunks(3) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }

    if sats < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Render a unix timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Absent and zero timestamps both render as "Pending" (a zero block_time
/// means the upstream source has no confirmation time for the transaction).
pub fn format_timestamp(unix_seconds: Option<i64>) -> String {
    let secs = match unix_seconds {
        Some(s) if s != 0 => s,
        _ => return "Pending".to_string(),
    };

    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "Pending".to_string(),
    }
}
