//! Catalog Data Types
//!
//! Defines the movie record as it is loaded from the dataset and returned by the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Ticks (100 ns units) in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Ticks between 0001-01-01T00:00:00 and the Unix epoch.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// A single movie entry.
///
/// Records carry no identifier and are never modified once loaded.
/// The original dataset's column names are accepted as aliases so an export
/// of the source table can be loaded without renaming fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(alias = "Release_Date", with = "release_date")]
    pub release_date: NaiveDateTime,
    #[serde(alias = "Title", default)]
    pub title: Option<String>,
    #[serde(alias = "Overview", default)]
    pub overview: Option<String>,
    #[serde(alias = "Popularity", default)]
    pub popularity: Option<f64>,
    #[serde(alias = "Vote_Count", default)]
    pub vote_count: Option<i16>,
    #[serde(alias = "Vote_Average", default)]
    pub vote_average: Option<f64>,
    #[serde(alias = "Original_Language", default)]
    pub original_language: Option<String>,
    /// Comma-separated list of genre tags, e.g. `"Action, Adventure"`.
    #[serde(alias = "Genre", default)]
    pub genre: Option<String>,
    #[serde(alias = "Poster_Url", default)]
    pub poster_url: Option<String>,
}

impl Movie {
    /// Release date as a tick count since 0001-01-01T00:00:00.
    ///
    /// Strictly increasing with the date, so it can be compared directly.
    /// Widened to `i128` so every date chrono can represent fits.
    pub fn release_ticks(&self) -> i128 {
        let utc = self.release_date.and_utc();
        let sub_second = i128::from(utc.timestamp_subsec_nanos() % 1_000_000_000) / 100;
        i128::from(utc.timestamp()) * i128::from(TICKS_PER_SECOND)
            + i128::from(UNIX_EPOCH_TICKS)
            + sub_second
    }

    /// Genre tags of this record, trimmed, with empty entries dropped.
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// Serde adapter for the release date.
///
/// Accepts a bare date or a date-time (`T` or space separated, optional
/// fractional seconds) and always writes `YYYY-MM-DDTHH:MM:SS`.
pub mod release_date {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(OUTPUT_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid release date: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }
}
