use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Bool, Double, Text};
use tokio::task;

use crate::modules::rating::application::ports::RatingRepository;
use crate::modules::rating::domain::{RatingAggregate, RatingValue};
use crate::shared::errors::AppResult;
use crate::shared::utils::TimedOperation;
use crate::shared::Database;

// xmax is zero only on a freshly inserted tuple, so it tells insert from update
const UPSERT_RATING_SQL: &str = "\
    INSERT INTO ratings (movie_id, rater_id, rating) \
    VALUES ($1, $2, $3) \
    ON CONFLICT (movie_id, rater_id) DO UPDATE SET rating = EXCLUDED.rating \
    RETURNING (xmax = 0) AS inserted";

const AGGREGATE_SQL: &str = "\
    SELECT COALESCE(AVG(rating), 0)::float8 AS average, COUNT(*) AS count \
    FROM ratings WHERE movie_id = $1";

#[derive(QueryableByName, Debug)]
struct UpsertOutcome {
    #[diesel(sql_type = Bool)]
    inserted: bool,
}

#[derive(QueryableByName, Debug)]
struct AggregateRow {
    #[diesel(sql_type = Double)]
    average: f64,
    #[diesel(sql_type = BigInt)]
    count: i64,
}

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn upsert(
        &self,
        movie_id: &str,
        rater_id: &str,
        rating: RatingValue,
    ) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let movie_id = movie_id.to_string();
        let rater_id = rater_id.to_string();

        task::spawn_blocking(move || -> AppResult<bool> {
            let timer = TimedOperation::new("upsert", "ratings");
            let mut conn = db.get_connection()?;

            let outcome = sql_query(UPSERT_RATING_SQL)
                .bind::<Text, _>(movie_id)
                .bind::<Text, _>(rater_id)
                .bind::<Double, _>(rating.value())
                .get_result::<UpsertOutcome>(&mut conn)?;

            timer.finish();
            Ok(outcome.inserted)
        })
        .await?
    }

    async fn aggregate(&self, movie_id: &str) -> AppResult<RatingAggregate> {
        let db = Arc::clone(&self.db);
        let movie_id = movie_id.to_string();

        let row = task::spawn_blocking(move || -> AppResult<AggregateRow> {
            let mut conn = db.get_connection()?;
            let row = sql_query(AGGREGATE_SQL)
                .bind::<Text, _>(movie_id)
                .get_result::<AggregateRow>(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(RatingAggregate::from_raw(row.average, row.count))
    }
}
