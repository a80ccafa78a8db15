// Value formatting - summary display strings and axis tick labels

/// Maximum fraction digits shown by default formatting.
const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub enum ValueFormat {
    /// Thousands grouping, up to three fraction digits.
    Default,
    /// Thousands grouping, exactly this many fraction digits.
    Decimals(usize),
    Custom(fn(f64) -> String),
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Default => format_number(value, 0, DEFAULT_MAX_FRACTION_DIGITS),
            ValueFormat::Decimals(digits) => format_number(value, *digits, *digits),
            ValueFormat::Custom(formatter) => formatter(value),
        }
    }

    /// Like `format`, with an explicit `+` for increases.
    pub fn format_change(&self, change: f64) -> String {
        let text = self.format(change);
        if change > 0.0 && !text.starts_with('+') {
            format!("+{text}")
        } else {
            text
        }
    }
}

pub fn format_number(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };

    let mut frac = frac_part.to_string();
    while frac.len() > min_fraction && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = group_thousands(int_part);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }

    let is_zero = out.chars().all(|c| matches!(c, '0' | '.' | ','));
    if value < 0.0 && !is_zero {
        out.insert(0, '-');
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Minutes as `7h 05m`, or `45m` under an hour.
pub fn format_duration_minutes(minutes: f64) -> String {
    if !minutes.is_finite() {
        return minutes.to_string();
    }

    let total = minutes.abs().round() as u64;
    let sign = if minutes < 0.0 && total > 0 { "-" } else { "" };
    let (hours, mins) = (total / 60, total % 60);
    if hours == 0 {
        format!("{sign}{mins}m")
    } else {
        format!("{sign}{hours}h {mins:02}m")
    }
}

/// Whole hours, for sleep axis ticks.
pub fn format_hours_tick(minutes: f64) -> String {
    format!("{}h", format_number(minutes / 60.0, 0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_groups_and_trims() {
        assert_eq!(ValueFormat::Default.format(1234567.0), "1,234,567");
        assert_eq!(ValueFormat::Default.format(12.5), "12.5");
        assert_eq!(ValueFormat::Default.format(0.123456), "0.123");
        assert_eq!(ValueFormat::Default.format(-1500.25), "-1,500.25");
        assert_eq!(ValueFormat::Default.format(-0.0001), "0");
        assert_eq!(ValueFormat::Default.format(999.0), "999");
    }

    #[test]
    fn test_decimal_precision() {
        assert_eq!(ValueFormat::Decimals(1).format(96.0), "96.0");
        assert_eq!(ValueFormat::Decimals(0).format(72.6), "73");
        assert_eq!(ValueFormat::Decimals(2).format(1000.5), "1,000.50");
    }

    #[test]
    fn test_change_has_explicit_sign() {
        assert_eq!(ValueFormat::Default.format_change(1000.0), "+1,000");
        assert_eq!(ValueFormat::Default.format_change(-3.0), "-3");
        assert_eq!(ValueFormat::Default.format_change(0.0), "0");
        let duration = ValueFormat::Custom(format_duration_minutes);
        assert_eq!(duration.format_change(35.0), "+35m");
        assert_eq!(duration.format_change(-95.0), "-1h 35m");
    }

    #[test]
    fn test_duration_minutes() {
        assert_eq!(format_duration_minutes(425.0), "7h 05m");
        assert_eq!(format_duration_minutes(45.4), "45m");
        assert_eq!(format_duration_minutes(0.0), "0m");
    }

    #[test]
    fn test_hours_tick() {
        assert_eq!(format_hours_tick(480.0), "8h");
        assert_eq!(format_hours_tick(450.0), "7.5h");
    }
}
