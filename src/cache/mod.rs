// Cache module for the local notification cache.
// Keeps the last API response on disk so the bar does not exhaust the rate limit.

pub mod paths;
pub mod store;

pub use paths::Paths;
pub use store::CacheStore;
