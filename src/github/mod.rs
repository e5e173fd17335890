pub mod client;
pub mod paginator;
pub mod rate_limit;
pub mod response;

pub use client::GitHubClient;
pub use paginator::{LinkRelation, Paginator, Rel};
pub use rate_limit::{RateLimit, RateLimitTracker};
pub use response::RawResponse;
