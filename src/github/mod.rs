// GitHub API module.
// Client and types for the notifications endpoint of the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::*;
