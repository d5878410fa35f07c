//! Fixed text formats for values that are written verbatim into the document.

/// 1st, 2nd, 3rd, 4th ... 11th, 12th, 13th ... 21st
pub fn ordinal(n: u32) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

/// Positive values carry an explicit plus sign
pub fn signed(n: i64) -> String {
    if n > 0 {
        format!("+{}", n)
    } else {
        n.to_string()
    }
}

/// A fraction in thousandths with a leading period: 0.915 -> `.915`.
///
/// Only the first three digits are kept, so 1.0 reads `.100`.
pub fn thousandths(fraction: f64) -> String {
    if fraction <= 0.0 {
        return ".000".to_string();
    }
    let digits = format!("{:03}", (fraction * 1000.0) as i64);
    format!(".{}", &digits[..3])
}

pub fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

/// One decimal and a percent sign
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Seconds as `m:ss`
pub fn minutes_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let minutes = (total / 60.0).floor() as u64;
    let secs = (total % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, secs)
}
