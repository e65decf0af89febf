use serde::Deserialize;

use crate::modules::movie::domain::{BoxOfficeLookup, Revenue};

/// Raw `/boxoffice` payload; absent fields fall back to their zero value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxOfficeResponse {
    pub title: String,
    pub distributor: String,
    pub release_date: String,
    pub budget: i64,
    pub revenue: RevenueDto,
    pub mpa_rating: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RevenueDto {
    pub worldwide: i64,
    #[serde(rename = "openingWeekendUSA")]
    pub opening_weekend_usa: Option<i64>,
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl From<BoxOfficeResponse> for BoxOfficeLookup {
    fn from(dto: BoxOfficeResponse) -> Self {
        Self {
            title: dto.title,
            distributor: non_blank(dto.distributor),
            release_date: non_blank(dto.release_date),
            budget: (dto.budget > 0).then_some(dto.budget),
            revenue: Revenue {
                worldwide: dto.revenue.worldwide,
                opening_weekend_usa: dto.revenue.opening_weekend_usa,
            },
            mpa_rating: non_blank(dto.mpa_rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_maps_to_lookup() {
        let json = r#"{
            "title": "Inception",
            "distributor": "Warner Bros.",
            "releaseDate": "2010-07-16",
            "budget": 160000000,
            "revenue": { "worldwide": 836800000, "openingWeekendUSA": 62785337 },
            "mpaRating": "PG-13"
        }"#;

        let lookup: BoxOfficeLookup = serde_json::from_str::<BoxOfficeResponse>(json)
            .unwrap()
            .into();

        assert_eq!(lookup.distributor.as_deref(), Some("Warner Bros."));
        assert_eq!(lookup.budget, Some(160_000_000));
        assert_eq!(lookup.revenue.worldwide, 836_800_000);
        assert_eq!(lookup.revenue.opening_weekend_usa, Some(62_785_337));
        assert_eq!(lookup.mpa_rating.as_deref(), Some("PG-13"));
    }

    #[test]
    fn missing_and_empty_fields_become_none() {
        let json = r#"{ "title": "Obscure", "distributor": "", "revenue": { "worldwide": 1000 } }"#;

        let lookup: BoxOfficeLookup = serde_json::from_str::<BoxOfficeResponse>(json)
            .unwrap()
            .into();

        assert!(lookup.distributor.is_none());
        assert!(lookup.release_date.is_none());
        assert!(lookup.budget.is_none());
        assert!(lookup.mpa_rating.is_none());
        assert_eq!(lookup.revenue.worldwide, 1000);
        assert!(lookup.revenue.opening_weekend_usa.is_none());
    }
}
