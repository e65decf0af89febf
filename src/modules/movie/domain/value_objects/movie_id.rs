use chrono::{DateTime, Utc};

const PREFIX: &str = "m_";

/// Movie identities are `m_<unix nanoseconds>`, so ids sort in creation order
pub struct MovieId;

impl MovieId {
    pub fn generate() -> String {
        Self::at(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> String {
        // Nanosecond timestamps overflow i64 only after 2262
        let nanos = instant
            .timestamp_nanos_opt()
            .unwrap_or_else(|| instant.timestamp_micros().saturating_mul(1_000));
        format!("{}{}", PREFIX, nanos)
    }

    pub fn is_well_formed(id: &str) -> bool {
        id.strip_prefix(PREFIX)
            .map(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false)
    }
}
