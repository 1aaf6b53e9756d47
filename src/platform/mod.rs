pub mod github;
pub mod types;

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::error::Result;

/// Everything the labeller needs from GitHub, scoped to one event's target item.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Labels currently on the target issue or pull request.
    fn labels(&self) -> BTreeSet<String>;

    /// Whether the actor belongs to any of `orgs`. Orgs are checked in order.
    async fn check_org_membership(&self, orgs: &[String]) -> Result<bool>;

    /// Whether the actor's login is in `logins_to_ignore` (lowercased logins).
    fn is_excluded_login(&self, logins_to_ignore: &BTreeSet<String>) -> bool;

    /// Create a repository label, succeeding if it already exists.
    async fn create_label(&self, name: &str, color: &str) -> Result<()>;

    /// Add a label to the target issue or pull request.
    async fn add_label(&self, name: &str) -> Result<()>;
}
