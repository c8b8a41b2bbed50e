//! Scraper for the DXY pneumonia dashboard.
//!
//! The page embeds three JSON payloads in inline scripts: per-province case
//! counts, per-country case counts and a news timeline. [`Dashboard`] captures
//! them from one fetch and reshapes them into the records in [`records`].

pub mod config;
pub mod constants;
pub mod covid;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod fields;
pub mod license;
pub mod output;
pub mod records;
pub mod server;

#[cfg(test)]
mod test_support;

pub use dashboard::Dashboard;
pub use error::{CovidError, Result};
