use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::application::CursorPage;

/// A catalog entry, optionally carrying box-office figures fetched at creation time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    /// Free-form date text; only the leading year is ever interpreted
    pub release_date: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpa_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_office: Option<BoxOffice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoxOffice {
    pub revenue: Revenue,
    pub currency: String,
    pub source: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Revenue {
    pub worldwide: i64,
    #[serde(
        rename = "openingWeekendUSA",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_weekend_usa: Option<i64>,
}

/// Movies ordered by id with a continuation cursor
pub type MoviePage = CursorPage<Movie>;
