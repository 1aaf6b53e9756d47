//! One run of the labeller as an Actions step: resolve inputs, label, report.

use std::path::PathBuf;
use std::process::ExitCode;

use crate::actions;
use crate::config::{GitHubContext, LabellerConfig};
use crate::error::Result;
use crate::event::EventPayload;
use crate::platform::github::{map_target, GitHubPlatform};
use crate::workflow::{self, DecisionOutcome};

/// Where to find inputs beyond the process environment.
#[derive(Debug, Default, Clone)]
pub struct Invocation {
    pub config_path: Option<String>,
    /// Overrides `GITHUB_EVENT_PATH`.
    pub event_path: Option<PathBuf>,
}

/// Run against the process environment (`INPUT_*` and `GITHUB_*`).
pub async fn label(invocation: &Invocation) -> Result<DecisionOutcome> {
    label_with(
        invocation,
        config::Environment::with_prefix("INPUT"),
        config::Environment::with_prefix("GITHUB"),
    )
    .await
}

async fn label_with(
    invocation: &Invocation,
    input_env: config::Environment,
    github_env: config::Environment,
) -> Result<DecisionOutcome> {
    // Inputs first: a missing input must fail before any event or API work
    let config = LabellerConfig::load_with(invocation.config_path.as_deref(), input_env)?;
    let context = GitHubContext::load_with(github_env)?;

    tracing::debug!(config = ?config, "Resolved inputs");

    let event_path = match &invocation.event_path {
        Some(path) => path.clone(),
        None => context.event_path()?.clone(),
    };
    let event = EventPayload::read(&event_path)?;
    let target = map_target(&context, &event)?;

    tracing::info!(
        repo = %target.full_name(),
        event = context.event_name.as_deref().unwrap_or("unknown"),
        action = event.action.as_deref().unwrap_or("none"),
        number = ?target.number,
        actor = ?target.actor,
        "Loaded event"
    );

    let platform = GitHubPlatform::new(&config.token, context.api_url.as_deref(), target)?;
    let outcome = workflow::run(&config, &platform).await?;

    if outcome == DecisionOutcome::ApplyLabel {
        let number = platform.target().number.unwrap_or_default();
        actions::info(&format!("Applied label '{}' to #{number}", config.label_name));
    }

    Ok(outcome)
}

/// What the step prints to stdout and how it exits.
#[derive(Debug, PartialEq, Eq)]
pub struct Conclusion {
    pub failed: bool,
    pub line: Option<String>,
}

impl Conclusion {
    pub fn from_result(result: &Result<DecisionOutcome>) -> Self {
        match result {
            Ok(outcome) if outcome.is_failure() => Self {
                failed: true,
                line: outcome.failure_message().map(actions::error_command),
            },
            Ok(DecisionOutcome::Skip) => Self {
                failed: false,
                line: Some("Looks like this issue doesn't need labeling! 👍".to_string()),
            },
            Ok(_) => Self {
                failed: false,
                line: None,
            },
            Err(e) => Self {
                failed: true,
                line: Some(actions::error_command(&e.to_string())),
            },
        }
    }

    pub fn emit(&self) -> ExitCode {
        if let Some(line) = &self.line {
            actions::info(line);
        }
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ErrorKind};
    use serde_json::json;
    use std::collections::HashMap;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const INPUTS: &[(&str, &str)] = &[
        ("INPUT_LABEL_NAME", "community"),
        ("INPUT_LABEL_COLOR", "7057ff"),
        ("INPUT_ORG_MEMBERSHIP", "org1"),
        ("INPUT_TOKEN", "test-token"),
    ];

    fn env_from(prefix: &str, vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(prefix).source(Some(map))
    }

    fn github_env(api_url: &str) -> config::Environment {
        env_from(
            "GITHUB",
            &[
                ("GITHUB_REPOSITORY", "octo/hello"),
                ("GITHUB_EVENT_NAME", "pull_request"),
                ("GITHUB_API_URL", api_url),
            ],
        )
    }

    fn event_file(labels: &[&str]) -> tempfile::NamedTempFile {
        let labels: Vec<_> = labels.iter().map(|name| json!({ "name": name })).collect();
        let payload = json!({
            "action": "opened",
            "pull_request": { "number": 7, "user": { "login": "alice" }, "labels": labels },
            "sender": { "login": "alice" }
        });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(payload.to_string().as_bytes()).unwrap();
        file
    }

    async fn membership(server: &MockServer, status: u16) {
        Mock::given(method("GET"))
            .and(path("/orgs/org1/members/alice"))
            .respond_with(ResponseTemplate::new(status))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_missing_input_fails_before_reading_event() {
        let invocation = Invocation {
            config_path: None,
            event_path: Some(PathBuf::from("/nonexistent/event.json")),
        };
        let inputs: Vec<_> = INPUTS
            .iter()
            .copied()
            .filter(|(k, _)| *k != "INPUT_TOKEN")
            .collect();

        let result = label_with(
            &invocation,
            env_from("INPUT", &inputs),
            env_from("GITHUB", &[]),
        )
        .await;

        let err = result.as_ref().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let conclusion = Conclusion::from_result(&result);
        assert!(conclusion.failed);
        assert_eq!(
            conclusion.line.as_deref(),
            Some("::error::Input required and not supplied: token")
        );
    }

    #[tokio::test]
    async fn test_community_pr_missing_label_fails_the_step() {
        let server = MockServer::start().await;
        membership(&server, 404).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let event = event_file(&["bug"]);
        let invocation = Invocation {
            config_path: None,
            event_path: Some(event.path().to_path_buf()),
        };

        let result = label_with(&invocation, env_from("INPUT", INPUTS), github_env(&server.uri())).await;
        assert_eq!(result.as_ref().unwrap(), &DecisionOutcome::FailMissingLabel);

        let conclusion = Conclusion::from_result(&result);
        assert_eq!(
            conclusion,
            Conclusion {
                failed: true,
                line: Some("::error::Community PRs must be labelled".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_member_is_skipped_successfully() {
        let server = MockServer::start().await;
        membership(&server, 204).await;

        let event = event_file(&["bug"]);
        let invocation = Invocation {
            config_path: None,
            event_path: Some(event.path().to_path_buf()),
        };

        let result = label_with(&invocation, env_from("INPUT", INPUTS), github_env(&server.uri())).await;
        assert_eq!(result.as_ref().unwrap(), &DecisionOutcome::Skip);

        let conclusion = Conclusion::from_result(&result);
        assert!(!conclusion.failed);
        assert_eq!(
            conclusion.line.as_deref(),
            Some("Looks like this issue doesn't need labeling! 👍")
        );
    }

    #[test]
    fn test_exempt_missing_label_conclusion() {
        let conclusion = Conclusion::from_result(&Ok(DecisionOutcome::FailExemptMissingLabel));
        assert!(conclusion.failed);
        assert_eq!(
            conclusion.line.as_deref(),
            Some("::error::The PR is missing a label!")
        );
    }

    #[test]
    fn test_applied_label_conclusion_succeeds_quietly() {
        let conclusion = Conclusion::from_result(&Ok(DecisionOutcome::ApplyLabel));
        assert_eq!(
            conclusion,
            Conclusion {
                failed: false,
                line: None,
            }
        );
    }

    #[test]
    fn test_api_error_conclusion_carries_message() {
        let result = Err(AppError::GitHubApi("Bad credentials (HTTP 401)".to_string()));
        let conclusion = Conclusion::from_result(&result);
        assert!(conclusion.failed);
        assert_eq!(
            conclusion.line.as_deref(),
            Some("::error::GitHub API error: Bad credentials (HTTP 401)")
        );
    }
}
