//! Display Formatting
//!
//! Dates and names as the gallery pages print them.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::model::{Artwork, UserProfile};

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Parse an ISO date or timestamp, keeping the calendar date as written
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Join date on the profile page, e.g. "Oktober 2025"
pub fn month_year_id(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map(|d| format!("{} {}", MONTHS_ID[d.month0() as usize], d.year()))
        .unwrap_or_default()
}

/// Creation date on the artwork page, e.g. "5 March 2024"
pub fn long_date_en_gb(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map(|d| format!("{} {} {}", d.day(), MONTHS_EN[d.month0() as usize], d.year()))
        .unwrap_or_else(|| "-".to_string())
}

/// Profile handle, defaulting to `@username`
pub fn display_handle(profile: &UserProfile) -> String {
    match profile.handle.as_deref().map(str::trim) {
        Some(handle) if !handle.is_empty() => handle.to_string(),
        _ => format!("@{}", profile.username),
    }
}

pub fn full_name(profile: &UserProfile) -> String {
    [profile.first_name.as_deref(), profile.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Value or "-" for empty profile fields
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Letter shown in place of a missing avatar
pub fn avatar_initial(username: Option<&str>) -> String {
    username
        .and_then(|u| u.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Uploader line on the artwork page
pub fn artist_label(artwork: &Artwork) -> String {
    match artwork.artist_username.as_deref() {
        Some(u) if !u.is_empty() => format!("@{}", u),
        _ => "@Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_id() {
        assert_eq!(month_year_id(Some("2025-10-03T08:15:00.000Z")), "Oktober 2025");
        assert_eq!(month_year_id(Some("2024-01-31")), "Januari 2024");
        assert_eq!(month_year_id(Some("")), "");
        assert_eq!(month_year_id(Some("yesterday")), "");
        assert_eq!(month_year_id(None), "");
    }

    #[test]
    fn test_long_date_en_gb() {
        assert_eq!(long_date_en_gb(Some("2024-03-05T00:00:00Z")), "5 March 2024");
        assert_eq!(long_date_en_gb(Some("1889-06-18")), "18 June 1889");
        assert_eq!(long_date_en_gb(None), "-");
    }

    #[test]
    fn test_profile_names() {
        let mut profile = UserProfile {
            username: "lorem".into(),
            first_name: Some("Lorem".into()),
            ..Default::default()
        };
        assert_eq!(display_handle(&profile), "@lorem");
        assert_eq!(full_name(&profile), "Lorem");

        profile.handle = Some("@kece".into());
        profile.last_name = Some("Ipsum".into());
        assert_eq!(display_handle(&profile), "@kece");
        assert_eq!(full_name(&profile), "Lorem Ipsum");

        assert_eq!(or_dash(profile.email.as_deref()), "-");
        assert_eq!(or_dash(Some("a@b.co")), "a@b.co");
    }

    #[test]
    fn test_avatar_and_artist() {
        assert_eq!(avatar_initial(Some("vermeer")), "V");
        assert_eq!(avatar_initial(Some("")), "?");
        assert_eq!(avatar_initial(None), "?");

        let mut art: Artwork = serde_json::from_value(serde_json::json!({"id": 1})).unwrap();
        assert_eq!(artist_label(&art), "@Unknown");
        art.artist_username = Some("munch".into());
        assert_eq!(artist_label(&art), "@munch");
    }
}
