//! Formatting helpers for dates and other displayed values.

use time::{format_description::well_known::Rfc3339, Month, OffsetDateTime};

use super::language::Language;

const THAI_MONTHS_SHORT: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

const ENGLISH_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Offset between the Common Era and the Thai Buddhist Era.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Short date for a social post, e.g. `07 Oct 2025` or `07 ต.ค. 2568`.
/// Input that is not RFC 3339 is returned unchanged.
pub fn post_date(created_at: &str, lang: Language) -> String {
    match OffsetDateTime::parse(created_at, &Rfc3339) {
        Ok(ts) => short_date(ts, lang),
        Err(_) => created_at.to_string(),
    }
}

pub fn short_date(ts: OffsetDateTime, lang: Language) -> String {
    let month = month_index(ts.month());
    match lang {
        Language::En => format!("{:02} {} {}", ts.day(), ENGLISH_MONTHS_SHORT[month], ts.year()),
        Language::Th => format!(
            "{:02} {} {}",
            ts.day(),
            THAI_MONTHS_SHORT[month],
            ts.year() + BUDDHIST_ERA_OFFSET
        ),
    }
}

fn month_index(month: Month) -> usize {
    month as usize - 1
}

pub fn copyright_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Inline style delaying a reveal animation for the `index`-th card.
pub fn reveal_delay_style(index: usize, stagger_ms: u64) -> String {
    format!("animation-delay: {}ms;", index as u64 * stagger_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn english_post_date() {
        assert_eq!(post_date("2025-10-07T09:00:00Z", Language::En), "07 Oct 2025");
    }

    #[test]
    fn thai_post_date_uses_buddhist_era() {
        assert_eq!(post_date("2025-10-07T09:00:00Z", Language::Th), "07 ต.ค. 2568");
        assert_eq!(
            short_date(datetime!(2024-01-31 23:00 UTC), Language::Th),
            "31 ม.ค. 2567"
        );
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(post_date("yesterday", Language::En), "yesterday");
    }

    #[test]
    fn copyright_year_is_plausible() {
        assert!(copyright_year() >= 2024);
    }

    #[test]
    fn reveal_delay_scales_with_index() {
        assert_eq!(reveal_delay_style(0, 100), "animation-delay: 0ms;");
        assert_eq!(reveal_delay_style(3, 150), "animation-delay: 450ms;");
    }
}
