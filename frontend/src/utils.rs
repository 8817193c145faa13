use chrono::{DateTime, Utc};

/// Magnitude suffixes used when abbreviating counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberLocale {
    Korean,
    Japanese,
    English,
}

impl NumberLocale {
    pub fn for_region(region: &str) -> Self {
        match region {
            "KR" => NumberLocale::Korean,
            "JP" => NumberLocale::Japanese,
            _ => NumberLocale::English,
        }
    }

    /// (divisor, suffix), ascending
    fn units(&self) -> &'static [(u64, &'static str)] {
        match self {
            NumberLocale::Korean => &[(10_000, "만"), (100_000_000, "억")],
            NumberLocale::Japanese => &[(10_000, "万"), (100_000_000, "億")],
            NumberLocale::English => &[(1_000, "K"), (1_000_000, "M"), (1_000_000_000, "B")],
        }
    }
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Abbreviate a count with one decimal, e.g. `1.2만` or `3.4M`.
///
/// Values below the smallest unit are printed in full with separators.
pub fn format_compact_count(number: u64, locale: NumberLocale) -> String {
    let units = locale.units();
    let Some(mut idx) = units.iter().rposition(|(divisor, _)| number >= *divisor) else {
        return format_number(number);
    };

    loop {
        let (divisor, suffix) = units[idx];
        let divisor = divisor as u128;
        let tenths = (number as u128 * 10 + divisor / 2) / divisor;
        // 999,999 would round to "1000K"
        if tenths >= 10_000 && idx + 1 < units.len() {
            idx += 1;
            continue;
        }
        let whole = tenths / 10;
        let fraction = tenths % 10;
        return if fraction == 0 {
            format!("{whole}{suffix}")
        } else {
            format!("{whole}.{fraction}{suffix}")
        };
    }
}

pub fn format_relative_date(iso_date: &str, now: DateTime<Utc>) -> String {
    let Ok(published) = iso_date.parse::<DateTime<Utc>>() else {
        return iso_date.to_string();
    };
    let days = now.signed_duration_since(published).num_days();

    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => plural(d / 7, "week"),
        d if d < 365 => plural(d / 30, "month"),
        d => plural(d / 365, "year"),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
