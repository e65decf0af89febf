use crate::modules::movie::domain::{BoxOffice, Movie, Revenue};
use crate::schema::{box_office, movies};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

// ============= MOVIE MODELS =============

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieModel {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub release_date: String,
    pub distributor: Option<String>,
    pub budget: Option<i64>,
    pub mpa_rating: Option<String>,
    pub created_at: DateTime<Utc>,
}

// For inserting new movies (created_at comes from the column default)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovie<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub genre: &'a str,
    pub release_date: &'a str,
    pub distributor: Option<&'a str>,
    pub budget: Option<i64>,
    pub mpa_rating: Option<&'a str>,
}

// ============= BOX OFFICE MODELS =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(MovieModel, foreign_key = movie_id))]
#[diesel(table_name = box_office)]
#[diesel(primary_key(movie_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoxOfficeModel {
    pub movie_id: String,
    pub revenue_worldwide: i64,
    pub revenue_opening_weekend_usa: Option<i64>,
    pub currency: String,
    pub source: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = box_office)]
pub struct NewBoxOffice<'a> {
    pub movie_id: &'a str,
    pub revenue_worldwide: i64,
    pub revenue_opening_weekend_usa: Option<i64>,
    pub currency: &'a str,
    pub source: &'a str,
    pub last_updated: DateTime<Utc>,
}

// ============= MAPPING =============

impl<'a> From<&'a Movie> for NewMovie<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            id: &movie.id,
            title: &movie.title,
            genre: &movie.genre,
            release_date: &movie.release_date,
            distributor: movie.distributor.as_deref(),
            budget: movie.budget,
            mpa_rating: movie.mpa_rating.as_deref(),
        }
    }
}

impl<'a> NewBoxOffice<'a> {
    pub fn for_movie(movie_id: &'a str, box_office: &'a BoxOffice) -> Self {
        Self {
            movie_id,
            revenue_worldwide: box_office.revenue.worldwide,
            revenue_opening_weekend_usa: box_office.revenue.opening_weekend_usa,
            currency: &box_office.currency,
            source: &box_office.source,
            last_updated: box_office.last_updated,
        }
    }
}

impl From<BoxOfficeModel> for BoxOffice {
    fn from(model: BoxOfficeModel) -> Self {
        Self {
            revenue: Revenue {
                worldwide: model.revenue_worldwide,
                opening_weekend_usa: model.revenue_opening_weekend_usa,
            },
            currency: model.currency,
            source: model.source,
            last_updated: model.last_updated,
        }
    }
}

impl MovieModel {
    /// Rebuild the domain movie from a `movies LEFT JOIN box_office` row
    pub fn into_domain(self, box_office: Option<BoxOfficeModel>) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            release_date: self.release_date,
            genre: self.genre,
            distributor: self.distributor,
            budget: self.budget,
            mpa_rating: self.mpa_rating,
            box_office: box_office.map(BoxOffice::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_row_maps_back_to_domain() {
        let now = Utc::now();
        let movie = MovieModel {
            id: "m_42".to_string(),
            title: "Alien".to_string(),
            genre: "Horror".to_string(),
            release_date: "1979-05-25".to_string(),
            distributor: Some("20th Century Fox".to_string()),
            budget: None,
            mpa_rating: Some("R".to_string()),
            created_at: now,
        };
        let box_office = BoxOfficeModel {
            movie_id: "m_42".to_string(),
            revenue_worldwide: 184_000_000,
            revenue_opening_weekend_usa: None,
            currency: "USD".to_string(),
            source: "ExampleBoxOfficeAPI".to_string(),
            last_updated: now,
        };

        let domain = movie.into_domain(Some(box_office));
        assert_eq!(domain.id, "m_42");
        assert_eq!(domain.distributor.as_deref(), Some("20th Century Fox"));
        let attached = domain.box_office.unwrap();
        assert_eq!(attached.revenue.worldwide, 184_000_000);
        assert_eq!(attached.last_updated, now);
    }

    #[test]
    fn insert_model_borrows_domain_fields() {
        let movie = Movie {
            id: "m_7".to_string(),
            title: "Se7en".to_string(),
            release_date: "1995-09-22".to_string(),
            genre: "Thriller".to_string(),
            distributor: None,
            budget: Some(33_000_000),
            mpa_rating: None,
            box_office: None,
        };
        let row = NewMovie::from(&movie);
        assert_eq!(row.id, "m_7");
        assert_eq!(row.budget, Some(33_000_000));
        assert!(row.distributor.is_none());
    }
}
