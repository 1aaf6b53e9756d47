use std::collections::BTreeSet;

/// The issue or pull request an event is about, plus who triggered it.
#[derive(Debug, Clone)]
pub struct Target {
    pub owner: String,
    pub repo: String,
    /// `None` when the event carries no issue or pull request.
    pub number: Option<u64>,
    pub actor: Option<String>,
    pub labels: BTreeSet<String>,
}

impl Target {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
