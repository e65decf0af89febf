use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;
use crate::shared::utils::Validator;

/// A score in half-point steps from 0.5 to 5.0
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RatingValue(f64);

impl RatingValue {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for RatingValue {
    type Error = AppError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Validator::validate_rating(value)?;
        Ok(Self(value))
    }
}

impl From<RatingValue> for f64 {
    fn from(rating: RatingValue) -> Self {
        rating.0
    }
}
