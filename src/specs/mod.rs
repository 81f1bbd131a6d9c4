// src/specs/mod.rs

pub mod listings;

pub use listings::{extract_listings, fetch_and_extract};
