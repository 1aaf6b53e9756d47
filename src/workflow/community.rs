use crate::config::LabellerConfig;
use crate::error::Result;
use crate::platform::Platform;
use crate::workflow::decide::decide;
use crate::workflow::types::DecisionOutcome;

/// Decide what to do about one event and, if needed, apply the community label.
pub async fn run<P: Platform + ?Sized>(
    config: &LabellerConfig,
    platform: &P,
) -> Result<DecisionOutcome> {
    let labels = platform.labels();

    let is_exempt_actor = platform.check_org_membership(&config.org_membership).await?
        || platform.is_excluded_login(&config.logins_to_ignore);

    let outcome = decide(config, &labels, is_exempt_actor);

    tracing::info!(
        labels = ?labels,
        is_exempt_actor,
        outcome = ?outcome,
        "Decided"
    );

    if outcome == DecisionOutcome::ApplyLabel {
        platform
            .create_label(&config.label_name, &config.label_color)
            .await?;
        platform.add_label(&config.label_name).await?;
    }

    Ok(outcome)
}
