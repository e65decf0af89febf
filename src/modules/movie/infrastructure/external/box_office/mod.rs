mod client;
mod dto;

pub use client::BoxOfficeHttpClient;
pub use dto::{BoxOfficeResponse, RevenueDto};
