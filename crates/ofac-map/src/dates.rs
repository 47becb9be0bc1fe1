//! Date normalization to `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use ofac_model::Element;
use regex::Regex;

/// Free-text layouts accepted for full dates, tried in order.
const TEXT_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%d %b %Y", "%d %B %Y", "%Y/%m/%d", "%m/%d/%Y", "%Y.%m.%d",
];

static ISO_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})(?:-([0-9]{2}))?").expect("Invalid ISO date prefix regex")
});

/// Format year/month/day components.
///
/// The year is required. Month and day are kept only when purely numeric
/// and are zero-padded to two digits; a day without a month is ignored.
pub fn format_date_parts(
    year: Option<&str>,
    month: Option<&str>,
    day: Option<&str>,
) -> Option<String> {
    let year = year.map(str::trim).filter(|year| !year.is_empty())?;
    let month = numeric(month);
    let day = numeric(day);
    Some(match (month, day) {
        (Some(month), Some(day)) => format!("{year}-{month:0>2}-{day:0>2}"),
        (Some(month), None) => format!("{year}-{month:0>2}"),
        _ => year.to_string(),
    })
}

fn numeric(component: Option<&str>) -> Option<&str> {
    component
        .map(str::trim)
        .filter(|value| !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit()))
}

/// Format the `Year`/`Month`/`Day` children of a date element.
pub fn date_from_parts(element: &Element) -> Option<String> {
    format_date_parts(
        element.find_text("Year"),
        element.find_text("Month"),
        element.find_text("Day"),
    )
}

/// Normalize a free-text date.
pub fn normalize_date_string(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for format in TEXT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    if value.len() == 4 && value.chars().all(|ch| ch.is_ascii_digit()) {
        return Some(value.to_string());
    }
    let captures = ISO_PREFIX.captures(value)?;
    format_date_parts(
        captures.get(1).map(|m| m.as_str()),
        captures.get(2).map(|m| m.as_str()),
        captures.get(3).map(|m| m.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_pick_the_most_precise_layout() {
        assert_eq!(format_date_parts(Some("1990"), Some("5"), Some("")), Some("1990-05".to_string()));
        assert_eq!(format_date_parts(Some("1990"), Some(""), Some("")), Some("1990".to_string()));
        assert_eq!(format_date_parts(Some("1990"), Some("5"), Some("3")), Some("1990-05-03".to_string()));
    }

    #[test]
    fn parts_ignore_non_numeric_and_orphan_components() {
        assert_eq!(format_date_parts(Some("1990"), Some("May"), Some("3")), Some("1990".to_string()));
        assert_eq!(format_date_parts(Some("1990"), None, Some("3")), Some("1990".to_string()));
        assert_eq!(format_date_parts(Some("1990"), Some("12"), Some("x")), Some("1990-12".to_string()));
        assert_eq!(format_date_parts(None, Some("5"), Some("3")), None);
        assert_eq!(format_date_parts(Some(" "), Some("5"), Some("3")), None);
    }

    #[test]
    fn free_text_formats() {
        let cases = [
            ("1975-03-04", "1975-03-04"),
            ("04 Mar 1975", "1975-03-04"),
            ("4 March 1975", "1975-03-04"),
            ("1975/03/04", "1975-03-04"),
            ("03/04/1975", "1975-03-04"),
            ("1975.03.04", "1975-03-04"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_date_string(input).as_deref(), Some(expected), "{input}");
        }
    }

    #[test]
    fn free_text_fallbacks() {
        assert_eq!(normalize_date_string(" 1962 ").as_deref(), Some("1962"));
        assert_eq!(normalize_date_string("1962-07").as_deref(), Some("1962-07"));
        assert_eq!(normalize_date_string("1962-07-45T00:00").as_deref(), Some("1962-07-45"));
        assert_eq!(normalize_date_string("circa 1962"), None);
        assert_eq!(normalize_date_string(""), None);
    }

    #[test]
    fn date_element_children() {
        let date = Element::new("Date")
            .with_child(Element::new("Year").with_text("2018"))
            .with_child(Element::new("Month").with_text("11"))
            .with_child(Element::new("Day").with_text("5"));
        assert_eq!(date_from_parts(&date).as_deref(), Some("2018-11-05"));
    }
}
