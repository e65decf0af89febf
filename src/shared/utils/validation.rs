use crate::shared::errors::AppError;

/// Largest page a caller may request from `GET /movies`
pub const MAX_PAGE_LIMIT: i64 = 100;

pub const DEFAULT_PAGE_LIMIT: i64 = 20;

pub struct Validator;

impl Validator {
    /// Reject missing or blank required text fields
    pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "Missing required field: {}",
                field
            )));
        }
        Ok(())
    }

    pub fn validate_page_limit(limit: i64) -> Result<(), AppError> {
        if limit <= 0 {
            return Err(AppError::ValidationError(
                "Limit must be positive".to_string(),
            ));
        }
        if limit > MAX_PAGE_LIMIT {
            return Err(AppError::ValidationError(format!(
                "Limit cannot exceed {}",
                MAX_PAGE_LIMIT
            )));
        }
        Ok(())
    }

    /// Ratings are accepted only in half-point steps from 0.5 to 5.0
    pub fn validate_rating(value: f64) -> Result<(), AppError> {
        let doubled = value * 2.0;
        if !value.is_finite() || !(0.5..=5.0).contains(&value) || doubled.fract() != 0.0 {
            return Err(AppError::ValidationError(
                "Invalid rating value".to_string(),
            ));
        }
        Ok(())
    }
}
