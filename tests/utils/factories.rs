/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::Utc;
use marquee_lib::modules::movie::domain::{BoxOffice, Movie, Revenue};

pub struct MovieFactory {
    id: String,
    title: String,
    genre: String,
    release_date: String,
    distributor: Option<String>,
    budget: Option<i64>,
    mpa_rating: Option<String>,
    box_office: Option<BoxOffice>,
}

impl MovieFactory {
    /// Ids sort in the order the caller numbers them
    pub fn new(seq: u32, title: &str) -> Self {
        Self {
            id: format!("m_{:019}", seq),
            title: title.to_string(),
            genre: "Drama".to_string(),
            release_date: "2000-01-01".to_string(),
            distributor: None,
            budget: None,
            mpa_rating: None,
            box_office: None,
        }
    }

    pub fn genre(mut self, genre: &str) -> Self {
        self.genre = genre.to_string();
        self
    }

    pub fn release_date(mut self, date: &str) -> Self {
        self.release_date = date.to_string();
        self
    }

    pub fn distributor(mut self, distributor: &str) -> Self {
        self.distributor = Some(distributor.to_string());
        self
    }

    pub fn budget(mut self, budget: i64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn mpa_rating(mut self, rating: &str) -> Self {
        self.mpa_rating = Some(rating.to_string());
        self
    }

    pub fn box_office(mut self, worldwide: i64, opening_weekend_usa: Option<i64>) -> Self {
        self.box_office = Some(BoxOffice {
            revenue: Revenue {
                worldwide,
                opening_weekend_usa,
            },
            currency: "USD".to_string(),
            source: "ExampleBoxOfficeAPI".to_string(),
            last_updated: Utc::now(),
        });
        self
    }

    pub fn build(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            release_date: self.release_date,
            genre: self.genre,
            distributor: self.distributor,
            budget: self.budget,
            mpa_rating: self.mpa_rating,
            box_office: self.box_office,
        }
    }
}
