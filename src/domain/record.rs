// Record normalizer - CSV export rows to camel-cased records, keeping raw text on bad cells
use super::error::NormalizeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::ser::{Serialize, SerializeMap, Serializer};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Largest magnitude at which every integer is exactly representable in an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Fallback layouts for the date column, tried in order.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y", "%B %d, %Y", "%d %b %Y"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank cell, kept distinct from zero.
    Empty,
    Number(f64),
    Text(String),
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_str(""),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// One normalized row; fields keep header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// A repeated key keeps its first position and takes the newer value.
    fn insert(&mut self, key: &str, value: CellValue) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Header label to a camelCase identifier, e.g. `"Fréquence Cardiaque"` to `"frequenceCardiaque"`.
///
/// Words break at non-alphanumerics, at lower-to-upper changes, before the last
/// capital of an acronym run (`HRVScore` is `HRV` + `Score`) and around digit
/// runs. Labels without any word pass through trimmed.
pub fn camel_case(label: &str) -> String {
    let folded: String = label.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let words: Vec<String> = folded
        .split(|c: char| !c.is_alphanumeric())
        .flat_map(split_words)
        .collect();
    if words.is_empty() {
        return label.trim().to_string();
    }

    let mut out = String::with_capacity(folded.len());
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                out.push(first);
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

fn is_lower(c: char) -> bool {
    c.is_alphabetic() && !c.is_uppercase()
}

/// Splits one alphanumeric run into words: digit runs, `Capitalized`, `lower`, `ACRONYM`.
fn split_words(run: &str) -> Vec<String> {
    let chars: Vec<char> = run.chars().collect();
    let take_while = |from: usize, pred: fn(char) -> bool| {
        from + chars[from..].iter().take_while(|c| pred(**c)).count()
    };

    let mut words: Vec<String> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let end = if chars[i].is_numeric() {
            take_while(i, char::is_numeric)
        } else if chars[i].is_uppercase() {
            let caps = take_while(i, char::is_uppercase);
            if caps < chars.len() && is_lower(chars[caps]) {
                if caps - i > 1 {
                    words.push(chars[i..caps - 1].iter().collect());
                    i = caps - 1;
                }
                take_while(caps, is_lower)
            } else {
                caps
            }
        } else {
            take_while(i, is_lower)
        };
        words.push(chars[i..end].iter().collect());
        i = end;
    }
    words
}

/// Strict `M/D/YYYY` to zero-padded `YYYY-MM-DD`. The shape alone decides, so
/// `13/45/2024` becomes `2024-13-45` and is rejected later as a sample date.
fn parse_us_date(raw: &str) -> Option<String> {
    let mut parts = raw.split('/');
    let (month, day, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let is_digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !is_digits(month, 1, 2) || !is_digits(day, 1, 2) || !is_digits(year, 4, 4) {
        return None;
    }

    Some(format!("{year}-{month:0>2}-{day:0>2}"))
}

fn parse_general_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc().date());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Unparsable cells keep their text exactly as exported, surrounding whitespace included.
pub fn normalize_date_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    let date = parse_us_date(trimmed).or_else(|| {
        parse_general_date(trimmed).map(|date| date.format("%Y-%m-%d").to_string())
    });
    CellValue::Text(date.unwrap_or_else(|| raw.to_string()))
}

pub fn normalize_number_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(raw.to_string()),
    }
}

/// Normalizes a whole export: first non-blank line is the header, the first column holds dates.
pub fn normalize_csv(text: &str) -> Result<Vec<Record>, NormalizeError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
        .collect();

    let Some((header, rows)) = lines.split_first().filter(|_| lines.len() >= 2) else {
        return Err(NormalizeError::InsufficientInput { lines: lines.len() });
    };

    let keys: Vec<String> = header.split(',').map(camel_case).collect();
    tracing::debug!(columns = keys.len(), rows = rows.len(), "normalizing export");

    let records = rows
        .iter()
        .map(|row| {
            let cells: Vec<&str> = row.split(',').collect();
            let mut record = Record::default();
            for (i, key) in keys.iter().enumerate() {
                let cell = cells.get(i).copied().unwrap_or("");
                let value = if i == 0 {
                    normalize_date_cell(cell)
                } else {
                    normalize_number_cell(cell)
                };
                record.insert(key, value);
            }
            record
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Record {
        fn get(&self, key: &str) -> Option<&CellValue> {
            self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
        }
    }

    #[test]
    fn test_camel_case_headers() {
        assert_eq!(camel_case("Heart Rate"), "heartRate");
        assert_eq!(camel_case("  Sleep Score (0-100) "), "sleepScore0100");
        assert_eq!(camel_case("Fréquence Cardiaque"), "frequenceCardiaque");
        assert_eq!(camel_case("SpO₂ Avg (%)"), "spO2Avg");
        assert_eq!(camel_case("STEPS"), "steps");
        assert_eq!(camel_case("HRV rMSSD"), "hrvRMssd");
        assert_eq!(camel_case("sleepMINUTES"), "sleepMinutes");
        assert_eq!(camel_case("HRVScore"), "hrvScore");
        assert_eq!(camel_case("heart_rate2x"), "heartRate2X");
        assert_eq!(camel_case("Calories (kcal)"), "caloriesKcal");
        assert_eq!(camel_case("date"), "date");
    }

    #[test]
    fn test_camel_case_is_idempotent() {
        for label in [
            "Heart Rate",
            "SpO₂ Avg (%)",
            "Sleep_minutes",
            "Calories (kcal)",
            "HRV rMSSD",
            "sleepMINUTES",
            "heart_rate2x",
            "Ünïcödé Hëädér",
            "   ",
            "%%",
        ] {
            let once = camel_case(label);
            assert_eq!(camel_case(&once), once, "label {label:?}");
        }
    }

    #[test]
    fn test_tokenless_header_passes_through_trimmed() {
        assert_eq!(camel_case("  (%) "), "(%)");
    }

    #[test]
    fn test_date_cells() {
        assert_eq!(normalize_date_cell("1/5/2024"), CellValue::Text("2024-01-05".into()));
        assert_eq!(normalize_date_cell("12/31/2023"), CellValue::Text("2023-12-31".into()));
        assert_eq!(normalize_date_cell("2024-02-29"), CellValue::Text("2024-02-29".into()));
        assert_eq!(
            normalize_date_cell("2024-03-01T23:30:00Z"),
            CellValue::Text("2024-03-01".into())
        );
        assert_eq!(normalize_date_cell("Jan 7, 2024"), CellValue::Text("2024-01-07".into()));
        assert_eq!(normalize_date_cell("13/45/2024"), CellValue::Text("2024-13-45".into()));
        assert_eq!(normalize_date_cell(" last week "), CellValue::Text(" last week ".into()));
        assert_eq!(normalize_date_cell(" 3/7/2024 "), CellValue::Text("2024-03-07".into()));
        assert_eq!(normalize_date_cell("  "), CellValue::Empty);
    }

    #[test]
    fn test_number_cells() {
        assert_eq!(normalize_number_cell("72"), CellValue::Number(72.0));
        assert_eq!(normalize_number_cell("96,5"), CellValue::Number(96.5));
        assert_eq!(normalize_number_cell(" 0 "), CellValue::Number(0.0));
        assert_eq!(normalize_number_cell(""), CellValue::Empty);
        assert_eq!(normalize_number_cell("--"), CellValue::Text("--".into()));
        assert_eq!(normalize_number_cell(" n/a"), CellValue::Text(" n/a".into()));
        assert_eq!(normalize_number_cell("NaN"), CellValue::Text("NaN".into()));
        assert_eq!(normalize_number_cell("inf"), CellValue::Text("inf".into()));
    }

    #[test]
    fn test_heart_rate_scenario() {
        let records = normalize_csv("Date,Heart Rate\n1/5/2024,72\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"date":"2024-01-05","heartRate":72}"#
        );
    }

    #[test]
    fn test_crlf_blank_lines_and_short_rows() {
        let text = "Date,Steps,Stress\r\n1/1/2024,1000,20\r\n\r\n1/2/2024,,x\r\n1/3/2024\r\n";
        let records = normalize_csv(text).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].get("steps"), Some(&CellValue::Empty));
        assert_eq!(records[1].get("stress"), Some(&CellValue::Text("x".into())));
        assert_eq!(records[2].get("steps"), Some(&CellValue::Empty));
        assert_eq!(
            serde_json::to_string(&records[1]).unwrap(),
            r#"{"date":"2024-01-02","steps":"","stress":"x"}"#
        );
    }

    #[test]
    fn test_fractional_numbers_stay_fractional() {
        let records = normalize_csv("Date,SpO2\n1/1/2024,96.5\n").unwrap();
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"date":"2024-01-01","spO2":96.5}"#
        );
    }

    #[test]
    fn test_duplicate_headers_keep_position() {
        let records = normalize_csv("Date,Steps,steps,Stress\n1/1/2024,1,2,3\n").unwrap();
        let keys: Vec<&str> = records[0].fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["date", "steps", "stress"]);
        assert_eq!(records[0].get("steps"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn test_insufficient_input_is_fatal() {
        assert_eq!(
            normalize_csv("").unwrap_err(),
            NormalizeError::InsufficientInput { lines: 0 }
        );
        assert_eq!(
            normalize_csv("Date,Steps\n\n  \n").unwrap_err(),
            NormalizeError::InsufficientInput { lines: 1 }
        );
    }
}
