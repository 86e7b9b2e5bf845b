use chrono::{Duration, NaiveDate, NaiveTime};
use serde_json::{Value, json};

use crate::excel::CellValue;

const SECONDS_PER_DAY: f64 = 86_400.0;

// Excel serial date -> ISO string. Serial 1 is 1900-01-01 and Excel counts a
// non-existent 1900-02-29, so serials past 59 are one day ahead.
pub fn excel_date_to_iso_string(excel_date: f64) -> Option<String> {
    if !excel_date.is_finite() || excel_date < 0.0 {
        return None;
    }

    let days = if excel_date > 59.0 {
        excel_date - 1.0
    } else {
        excel_date
    };

    let base_date = NaiveDate::from_ymd_opt(1899, 12, 31)?;
    let date = base_date.checked_add_signed(Duration::try_days(days.trunc() as i64)?)?;

    let seconds = (days.fract() * SECONDS_PER_DAY).round() as u32;
    if seconds == 0 {
        return Some(date.format("%Y-%m-%d").to_string());
    }

    // rounding may land exactly on midnight of the next day
    let (date, seconds) = if seconds >= 86_400 {
        (date.succ_opt()?, seconds - 86_400)
    } else {
        (date, seconds)
    };
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;

    Some(date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string())
}

pub fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        json!(n as i64)
    } else {
        json!(n)
    }
}

/// Blank cells inside the grid become `""`, so a null written out comes back
/// as an empty string.
pub fn process_cell_value(value: &CellValue) -> Value {
    match value {
        CellValue::Empty => json!(""),
        CellValue::Text(s) | CellValue::DateTimeIso(s) | CellValue::Error(s) => json!(s),
        CellValue::Number(n) => number_to_json(*n),
        CellValue::Bool(b) => json!(b),
        CellValue::DateTime(serial) => match excel_date_to_iso_string(*serial) {
            Some(iso) => json!(iso),
            None => number_to_json(*serial),
        },
    }
}
