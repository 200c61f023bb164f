//! Client for the Fresh `LinkedIn` Profile Data API on `RapidAPI`.

pub mod client;
pub mod error;
pub mod types;

pub use client::{RapidApiClient, RAPIDAPI_HOST};
pub use error::RapidApiError;
