/// Conjunctive filter for movie listings
///
/// Every populated field narrows the result; an all-`None` filter matches every movie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Case-insensitive substring of the title
    pub title_contains: Option<String>,
    /// Leading year of the release date
    pub year: Option<i32>,
    /// Case-insensitive exact genre
    pub genre: Option<String>,
    /// Case-insensitive exact distributor
    pub distributor: Option<String>,
    /// Inclusive budget ceiling; movies without a budget never match
    pub max_budget: Option<i64>,
    /// Exact MPA rating
    pub mpa_rating: Option<String>,
}

impl MovieFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn with_title(mut self, fragment: impl Into<String>) -> Self {
        self.title_contains = Some(fragment.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_distributor(mut self, distributor: impl Into<String>) -> Self {
        self.distributor = Some(distributor.into());
        self
    }

    pub fn with_max_budget(mut self, budget: i64) -> Self {
        self.max_budget = Some(budget);
        self
    }

    pub fn with_mpa_rating(mut self, rating: impl Into<String>) -> Self {
        self.mpa_rating = Some(rating.into());
        self
    }

    /// `LIKE` pattern for the year predicate
    pub fn year_pattern(year: i32) -> String {
        format!("{:04}%", year)
    }

    /// `ILIKE` pattern matching `fragment` literally anywhere in the value
    pub fn contains_pattern(fragment: &str) -> String {
        let mut escaped = String::with_capacity(fragment.len() + 2);
        escaped.push('%');
        for ch in fragment.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        escaped.push('%');
        escaped
    }
}
