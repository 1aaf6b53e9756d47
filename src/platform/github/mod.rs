mod client;
mod mapper;

pub use client::GitHubPlatform;
pub use mapper::map_target;
