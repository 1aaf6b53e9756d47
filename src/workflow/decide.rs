use std::collections::BTreeSet;

use crate::config::LabellerConfig;
use crate::workflow::types::DecisionOutcome;

/// Pick the outcome for one event.
///
/// The checks run in a fixed order: exemption first, then the missing-label
/// check, then labelling. An empty label set never counts as missing the
/// community label.
pub fn decide(
    config: &LabellerConfig,
    labels: &BTreeSet<String>,
    is_exempt_actor: bool,
) -> DecisionOutcome {
    let missing_community_label = !labels.is_empty() && !labels.contains(&config.label_name);

    if is_exempt_actor {
        if config.fail_if_member && labels.is_empty() {
            return DecisionOutcome::FailExemptMissingLabel;
        }
        return DecisionOutcome::Skip;
    }

    if missing_community_label {
        return DecisionOutcome::FailMissingLabel;
    }

    DecisionOutcome::ApplyLabel
}
