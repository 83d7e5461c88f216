// src/fetch/mod.rs

pub mod matrix;
pub mod pages;

pub use matrix::{scrape_matrix, scrape_pair, MatrixSummary, ScrapeMode, ScrapePlan, UsageError};
pub use pages::{page_url, HttpFetcher, PageSource};
