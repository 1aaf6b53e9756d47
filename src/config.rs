use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Inputs as the runner hands them over: every value optional, untrimmed.
#[derive(Debug, Default, Deserialize)]
struct RawInputs {
    label_name: Option<String>,
    label_color: Option<String>,
    logins_to_ignore: Option<String>,
    fail_if_member: Option<String>,
    org_membership: Option<String>,
    token: Option<String>,
}

/// Resolved action inputs. Built once per run and passed down by reference.
#[derive(Clone)]
pub struct LabellerConfig {
    pub label_name: String,
    /// Six hex digits, no leading `#`.
    pub label_color: String,
    /// Lowercased logins that are always exempt.
    pub logins_to_ignore: BTreeSet<String>,
    pub org_membership: Vec<String>,
    pub fail_if_member: bool,
    pub token: String,
}

// Manual Debug impl to avoid leaking the token
impl std::fmt::Debug for LabellerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabellerConfig")
            .field("label_name", &self.label_name)
            .field("label_color", &self.label_color)
            .field("logins_to_ignore", &self.logins_to_ignore)
            .field("org_membership", &self.org_membership)
            .field("fail_if_member", &self.fail_if_member)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl LabellerConfig {
    /// Load inputs from an optional config file, overridden by `INPUT_*` variables.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_with(config_path, config::Environment::with_prefix("INPUT"))
    }

    pub(crate) fn load_with(config_path: Option<&str>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder = builder.add_source(env);

        let raw: RawInputs = builder
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawInputs) -> Result<Self> {
        let label_name = required("label_name", raw.label_name)?;
        let label_color = parse_label_color(&required("label_color", raw.label_color)?)?;
        let logins_to_ignore = optional(raw.logins_to_ignore)
            .map(|logins| parse_logins(&logins))
            .unwrap_or_default();
        let fail_if_member = optional(raw.fail_if_member).as_deref() == Some("true");
        let org_membership = parse_org_membership(&required("org_membership", raw.org_membership)?)?;
        let token = required("token", raw.token)?;

        Ok(Self {
            label_name,
            label_color,
            logins_to_ignore,
            org_membership,
            fail_if_member,
            token,
        })
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    optional(value)
        .ok_or_else(|| AppError::Config(format!("Input required and not supplied: {name}")))
}

/// Strip every whitespace character, then split on commas.
pub fn parse_org_membership(orgs: &str) -> Result<Vec<String>> {
    let sanitised: String = orgs.chars().filter(|c| !c.is_whitespace()).collect();
    let orgs: Vec<String> = sanitised
        .split(',')
        .filter(|org| !org.is_empty())
        .map(str::to_string)
        .collect();

    if orgs.is_empty() {
        return Err(AppError::Config(
            "org_membership must name at least one organisation".to_string(),
        ));
    }
    Ok(orgs)
}

pub fn parse_logins(logins: &str) -> BTreeSet<String> {
    logins
        .split(',')
        .map(|login| login.trim().to_ascii_lowercase())
        .filter(|login| !login.is_empty())
        .collect()
}

fn parse_label_color(color: &str) -> Result<String> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::Config(format!(
            "label_color must be a six digit hex colour, got '{color}'"
        )));
    }
    Ok(hex.to_ascii_lowercase())
}

/// The run context the Actions runner exports as `GITHUB_*` variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubContext {
    pub repository: Option<String>,
    pub event_path: Option<PathBuf>,
    pub event_name: Option<String>,
    pub api_url: Option<String>,
    pub actor: Option<String>,
}

impl GitHubContext {
    pub fn load() -> Result<Self> {
        Self::load_with(config::Environment::with_prefix("GITHUB"))
    }

    pub(crate) fn load_with(env: config::Environment) -> Result<Self> {
        config::Config::builder()
            .add_source(env.ignore_empty(true))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Split `GITHUB_REPOSITORY` into owner and name.
    pub fn repo(&self) -> Result<(String, String)> {
        let full_name = self
            .repository
            .as_deref()
            .ok_or_else(|| AppError::Config("GITHUB_REPOSITORY is not set".to_string()))?;

        match full_name.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                Ok((owner.to_string(), repo.to_string()))
            }
            _ => Err(AppError::Config(format!(
                "Invalid repository name: {full_name}"
            ))),
        }
    }

    pub fn event_path(&self) -> Result<&PathBuf> {
        self.event_path
            .as_ref()
            .ok_or_else(|| AppError::Config("GITHUB_EVENT_PATH is not set".to_string()))
    }
}
