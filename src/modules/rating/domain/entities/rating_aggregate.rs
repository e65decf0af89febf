use serde::{Deserialize, Serialize};

/// Average and count over every rating of one movie, computed on read
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub average: f64,
    pub count: i64,
}

impl RatingAggregate {
    /// Round the raw average to one decimal place, halves away from zero
    pub fn from_raw(average: f64, count: i64) -> Self {
        let average = if count == 0 {
            0.0
        } else {
            (average * 10.0).round() / 10.0
        };
        Self { average, count }
    }
}
