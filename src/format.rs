use chrono::{DateTime, Local, Utc};

pub const PLACEHOLDER: &str = "-";

/// `₦` plus a thousands-grouped amount, fractional kobo kept to at most
/// two digits and dropped when zero.
pub fn naira(amount: f64) -> String {
    format!("\u{20a6}{}", grouped(amount))
}

pub fn grouped(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut out = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if fraction != 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(".{}", fraction / 10));
        } else {
            out.push_str(&format!(".{fraction:02}"));
        }
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

pub fn local_datetime(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%d/%m/%Y %H:%M:%S").to_string()
}

pub fn opt_local_datetime(ts: Option<DateTime<Utc>>) -> String {
    ts.map(local_datetime).unwrap_or_else(|| PLACEHOLDER.into())
}

pub fn multiplier(value: Option<f64>) -> String {
    match value {
        Some(multiplier) => format!("{multiplier}x"),
        None => PLACEHOLDER.into(),
    }
}
