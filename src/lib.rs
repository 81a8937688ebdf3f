mod config;
mod description_fetcher;
mod enricher;
mod fetch_error;
mod job_id;
mod posting;
mod ratelimit;
mod requests;
mod text_manipulators;

pub use config::{EnrichConfig, LoadFromEnv};
pub use description_fetcher::{DescriptionFetcher, DescriptionSource};
pub use enricher::{EnrichSummary, Enricher, ProgressCallback};
pub use fetch_error::FetchError;
pub use job_id::JobIdExtractor;
pub use posting::{LINKEDIN_SITE, PostingRecord};
pub use ratelimit::{FixedDelay, MinInterval, PacingPolicy};
pub use text_manipulators::html_to_text;
