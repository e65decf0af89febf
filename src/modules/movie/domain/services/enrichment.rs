use chrono::{DateTime, Utc};

use crate::modules::movie::domain::entities::{BoxOffice, Movie, Revenue};

pub const BOX_OFFICE_CURRENCY: &str = "USD";
pub const BOX_OFFICE_SOURCE: &str = "ExampleBoxOfficeAPI";

/// Figures returned by the box-office service for one title
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxOfficeLookup {
    pub title: String,
    pub distributor: Option<String>,
    pub release_date: Option<String>,
    pub budget: Option<i64>,
    pub revenue: Revenue,
    pub mpa_rating: Option<String>,
}

/// Outcome of the best-effort lookup performed while creating a movie
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment {
    Enriched(BoxOfficeLookup),
    Unavailable,
}

impl Enrichment {
    pub fn is_enriched(&self) -> bool {
        matches!(self, Enrichment::Enriched(_))
    }
}

/// Folds an enrichment result into a freshly built movie
///
/// Caller-supplied fields always win; a field the caller left unset is backfilled only
/// when the lookup carries a usable value (non-blank text, positive budget).
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieEnricher;

impl MovieEnricher {
    pub fn merge(mut movie: Movie, enrichment: Enrichment, now: DateTime<Utc>) -> Movie {
        let lookup = match enrichment {
            Enrichment::Enriched(lookup) => lookup,
            Enrichment::Unavailable => {
                movie.box_office = None;
                return movie;
            }
        };

        if movie.distributor.is_none() {
            movie.distributor = lookup.distributor.filter(|d| !d.trim().is_empty());
        }
        if movie.budget.is_none() {
            movie.budget = lookup.budget.filter(|b| *b > 0);
        }
        if movie.mpa_rating.is_none() {
            movie.mpa_rating = lookup.mpa_rating.filter(|r| !r.trim().is_empty());
        }

        movie.box_office = Some(BoxOffice {
            revenue: lookup.revenue,
            currency: BOX_OFFICE_CURRENCY.to_string(),
            source: BOX_OFFICE_SOURCE.to_string(),
            last_updated: now,
        });

        movie
    }
}
