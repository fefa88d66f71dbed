//! Display Formatting
//!
//! Pure mappings from wire values to the text shown on cards and panels.
//! Unset or unknown inputs map to an empty string or an "Offline"-style default.

use chrono::NaiveDate;

use crate::types::ActivityStatus;

/// Label for an activity status.
pub const fn activity_text(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::Active => "Active",
        ActivityStatus::Recent => "Recently Active",
        ActivityStatus::Offline => "Offline",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Title-case a snake_case value (`technical_founder` -> `Technical Founder`).
///
/// Used for roles and networking intents.
pub fn format_label(raw: Option<&str>) -> String {
    raw.unwrap_or_default()
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalise an experience level (`senior` -> `Senior`).
pub fn format_experience(raw: Option<&str>) -> String {
    raw.map(capitalize).unwrap_or_default()
}

/// "Role • Experience" as shown under a name.
pub fn role_line(role: Option<&str>, experience: Option<&str>) -> String {
    format!("{} • {}", format_label(role), format_experience(experience))
}

/// Up to two uppercase initials.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// First word of a display name.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or_default()
}

fn plural(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Relative activity text for a `YYYY-MM-DD` last-active date.
pub fn activity_display_text(last_active: Option<&str>, today: NaiveDate) -> String {
    let Some(date) = last_active.and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
    else {
        return "Activity unknown".to_string();
    };

    let days = (today - date).num_days();
    match days {
        i64::MIN..=0 => "Active today".to_string(),
        1 => "Active yesterday".to_string(),
        2..=6 => format!("Active {days} days ago"),
        7..=29 => {
            let weeks = days / 7;
            format!("Active {weeks} week{} ago", plural(weeks))
        }
        30..=364 => {
            let months = days / 30;
            format!("Active {months} month{} ago", plural(months))
        }
        _ => {
            let months = days / 30;
            format!("Inactive for {months} month{}", plural(months))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(Some("technical_founder")), "Technical Founder");
        assert_eq!(format_label(Some("investor")), "Investor");
        assert_eq!(format_label(Some("open_to_opportunities")), "Open To Opportunities");
        assert_eq!(format_label(Some("")), "");
        assert_eq!(format_label(None), "");
    }

    #[test]
    fn test_format_experience() {
        assert_eq!(format_experience(Some("senior")), "Senior");
        assert_eq!(format_experience(Some("")), "");
        assert_eq!(format_experience(None), "");
    }

    #[test]
    fn test_role_line() {
        assert_eq!(
            role_line(Some("product_manager"), Some("mid")),
            "Product Manager • Mid"
        );
        assert_eq!(role_line(None, None), " • ");
    }

    #[test]
    fn test_activity_text() {
        assert_eq!(activity_text(ActivityStatus::Active), "Active");
        assert_eq!(activity_text(ActivityStatus::Recent), "Recently Active");
        assert_eq!(activity_text(ActivityStatus::Offline), "Offline");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("ada byron lovelace"), "AB");
        assert_eq!(initials("Grace"), "G");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Ada Lovelace"), "Ada");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn test_activity_display_text() {
        let cases = [
            ("2024-06-30", "Active today"),
            ("2024-06-29", "Active yesterday"),
            ("2024-06-27", "Active 3 days ago"),
            ("2024-06-23", "Active 1 week ago"),
            ("2024-06-10", "Active 2 weeks ago"),
            ("2024-05-31", "Active 1 month ago"),
            ("2024-01-01", "Active 6 months ago"),
            ("2023-01-01", "Inactive for 18 months"),
        ];
        for (date, expected) in cases {
            assert_eq!(activity_display_text(Some(date), today()), expected, "{date}");
        }
    }

    #[test]
    fn test_activity_display_text_unparseable() {
        assert_eq!(activity_display_text(Some("yesterday"), today()), "Activity unknown");
        assert_eq!(activity_display_text(None, today()), "Activity unknown");
    }
}
