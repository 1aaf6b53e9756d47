use async_trait::async_trait;
use octocrab::Octocrab;
use std::collections::BTreeSet;

use crate::error::{describe_octocrab_error, AppError, Result};
use crate::platform::types::Target;
use crate::platform::Platform;

pub struct GitHubPlatform {
    client: Octocrab,
    target: Target,
}

impl GitHubPlatform {
    /// Build a token-authenticated client, against `api_url` when given (GitHub Enterprise).
    pub fn new(token: &str, api_url: Option<&str>, target: Target) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(url) = api_url {
            builder = builder
                .base_uri(url.to_string())
                .map_err(|e| AppError::Config(format!("Invalid GitHub API URL {url}: {e}")))?;
        }

        let client = builder
            .build()
            .map_err(|e| AppError::GitHubApi(format!("Failed to build octocrab client: {e}")))?;

        Ok(Self { client, target })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    fn actor(&self) -> Result<&str> {
        self.target
            .actor
            .as_deref()
            .ok_or_else(|| AppError::Event("Event has no actor login".to_string()))
    }

    fn number(&self) -> Result<u64> {
        self.target
            .number
            .ok_or_else(|| AppError::Event("Event has no issue or pull request".to_string()))
    }
}

#[async_trait]
impl Platform for GitHubPlatform {
    fn labels(&self) -> BTreeSet<String> {
        self.target.labels.clone()
    }

    async fn check_org_membership(&self, orgs: &[String]) -> Result<bool> {
        let actor = self.actor()?;

        for org in orgs {
            let is_member = self
                .client
                .orgs(org.as_str())
                .check_membership(actor)
                .await
                .map_err(|e| {
                    AppError::GitHubApi(format!(
                        "Failed to check membership of {org}: {}",
                        describe_octocrab_error(&e)
                    ))
                })?;

            tracing::debug!(org = %org, actor = actor, is_member, "Checked org membership");

            if is_member {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn is_excluded_login(&self, logins_to_ignore: &BTreeSet<String>) -> bool {
        self.target
            .actor
            .as_deref()
            .is_some_and(|actor| logins_to_ignore.contains(&actor.to_ascii_lowercase()))
    }

    async fn create_label(&self, name: &str, color: &str) -> Result<()> {
        // Nothing to attach the label to, so don't create it either
        self.number()?;

        let result = self
            .client
            .issues(&self.target.owner, &self.target.repo)
            .create_label(name, color, "")
            .await;

        match result {
            Ok(_) => {
                tracing::info!(repo = %self.target.full_name(), label = name, "Created label");
                Ok(())
            }
            // 422 means the label already exists
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 422 => {
                tracing::debug!(label = name, "Label already exists");
                Ok(())
            }
            Err(e) => Err(AppError::GitHubApi(format!(
                "Failed to create label {name}: {}",
                describe_octocrab_error(&e)
            ))),
        }
    }

    async fn add_label(&self, name: &str) -> Result<()> {
        let number = self.number()?;

        self.client
            .issues(&self.target.owner, &self.target.repo)
            .add_labels(number, &[name.to_string()])
            .await?;

        Ok(())
    }
}
