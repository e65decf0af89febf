use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use tokio::task;

use crate::log_debug;
use crate::modules::movie::application::ports::MovieRepository;
use crate::modules::movie::domain::{Movie, MovieFilter, MoviePage};
use crate::modules::movie::infrastructure::models::{
    BoxOfficeModel, MovieModel, NewBoxOffice, NewMovie,
};
use crate::schema::{box_office, movies};
use crate::shared::application::{CursorPage, CursorParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use crate::shared::Database;

diesel::define_sql_function!(fn lower(x: Text) -> Text);

diesel::define_sql_function! {
    #[sql_name = "lower"]
    fn lower_nullable(x: Nullable<Text>) -> Nullable<Text>;
}

type MovieRow = (MovieModel, Option<BoxOfficeModel>);

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn rows_to_domain(rows: Vec<MovieRow>) -> Vec<Movie> {
        rows.into_iter()
            .map(|(movie, box_office)| movie.into_domain(box_office))
            .collect()
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn create(&self, movie: &Movie) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let movie = movie.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("insert", "movies");
            let mut conn = db.get_connection()?;

            conn.transaction::<(), AppError, _>(|conn| {
                diesel::insert_into(movies::table)
                    .values(NewMovie::from(&movie))
                    .execute(conn)?;

                if let Some(figures) = movie.box_office.as_ref() {
                    diesel::insert_into(box_office::table)
                        .values(NewBoxOffice::for_movie(&movie.id, figures))
                        .execute(conn)?;
                }

                Ok(())
            })?;

            timer.finish();
            Ok(())
        })
        .await?
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);
        let title = title.to_string();

        let row = task::spawn_blocking(move || -> AppResult<Option<MovieRow>> {
            let mut conn = db.get_connection()?;
            let row = movies::table
                .left_join(box_office::table)
                .filter(movies::title.eq(&title))
                .order(movies::id.asc())
                .select((MovieModel::as_select(), Option::<BoxOfficeModel>::as_select()))
                .first::<MovieRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(|(movie, box_office)| movie.into_domain(box_office)))
    }

    async fn list(&self, filter: &MovieFilter, pagination: &CursorParams) -> AppResult<MoviePage> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();
        let params = pagination.clone();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<MovieRow>> {
            let timer = TimedOperation::new("select", "movies");
            let mut conn = db.get_connection()?;

            let mut query = movies::table
                .left_join(box_office::table)
                .select((MovieModel::as_select(), Option::<BoxOfficeModel>::as_select()))
                .into_boxed();

            if let Some(fragment) = filter.title_contains.as_deref() {
                query = query.filter(movies::title.ilike(MovieFilter::contains_pattern(fragment)));
            }
            if let Some(year) = filter.year {
                query = query.filter(movies::release_date.like(MovieFilter::year_pattern(year)));
            }
            if let Some(genre) = filter.genre.as_deref() {
                query = query.filter(lower(movies::genre).eq(lower(genre.to_string())));
            }
            if let Some(distributor) = filter.distributor.as_deref() {
                query = query.filter(
                    lower_nullable(movies::distributor)
                        .eq(lower_nullable(Some(distributor.to_string()))),
                );
            }
            if let Some(budget) = filter.max_budget {
                query = query.filter(movies::budget.le(budget));
            }
            if let Some(rating) = filter.mpa_rating.clone() {
                query = query.filter(movies::mpa_rating.eq(rating));
            }
            if let Some(cursor) = params.cursor.clone() {
                query = query.filter(movies::id.gt(cursor));
            }

            query = query.order(movies::id.asc());
            if let Some(fetch) = params.fetch_limit() {
                query = query.limit(fetch);
            }

            let rows = query.load::<MovieRow>(&mut conn)?;
            timer.finish();
            Ok(rows)
        })
        .await??;

        log_debug!("Loaded {} movie rows for listing", rows.len());

        let items = Self::rows_to_domain(rows);
        Ok(CursorPage::from_overfetch(items, pagination, |movie| movie.id.clone()))
    }
}
