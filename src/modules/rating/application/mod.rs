pub mod ports;
pub mod use_cases;

pub use ports::RatingRepository;
pub use use_cases::{
    GetRatingAggregateHandler, GetRatingAggregateQuery, SubmitRatingCommand,
    SubmitRatingHandler, SubmitRatingResult,
};
