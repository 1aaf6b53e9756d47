use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{AppError, Result};

/// The subset of an `issues` / `pull_request` event payload the labeller reads.
#[derive(Debug, Default, Deserialize)]
pub struct EventPayload {
    pub action: Option<String>,
    pub issue: Option<ItemPayload>,
    pub pull_request: Option<ItemPayload>,
    pub sender: Option<UserPayload>,
}

/// An issue or pull request; both carry the same fields here.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub number: u64,
    pub user: Option<UserPayload>,
    #[serde(default)]
    pub labels: Vec<LabelPayload>,
}

#[derive(Debug, Deserialize)]
pub struct LabelPayload {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub login: String,
}

impl EventPayload {
    pub fn parse(payload: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(payload)?)
    }

    /// Read the payload file the runner wrote for this event.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::Event(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&bytes)
    }

    /// The pull request if there is one, otherwise the issue.
    pub fn item(&self) -> Option<&ItemPayload> {
        self.pull_request.as_ref().or(self.issue.as_ref())
    }

    /// Label names on the target item. Empty when the event has no item.
    pub fn labels(&self) -> BTreeSet<String> {
        self.item()
            .map(|item| item.labels.iter().map(|l| l.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Author of the item, falling back to whoever sent the event.
    pub fn actor(&self) -> Option<&str> {
        self.item()
            .and_then(|item| item.user.as_ref())
            .or(self.sender.as_ref())
            .map(|user| user.login.as_str())
    }
}
