//! Source-site access for pennant.
//!
//! [`HttpFetcher`] implements the page-fetcher seam over a shared HTTP
//! client; [`extract_schedule`] and [`extract_live_score`] turn fetched
//! page bodies into domain records. Extraction is pure and synchronous;
//! only the fetcher touches the network.

pub mod error;

mod doc;
mod fetcher;
mod live;
mod schedule;

pub use error::{Error, Result};
pub use fetcher::HttpFetcher;
pub use live::extract_live_score;
pub use schedule::extract_schedule;
