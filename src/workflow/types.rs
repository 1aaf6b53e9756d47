/// Terminal result of one labeller run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// Actor is exempt; nothing to do.
    Skip,
    /// Non-exempt actor's item has labels, but not the community label.
    FailMissingLabel,
    /// Exempt actor, `fail_if_member` set, and the item has no labels.
    FailExemptMissingLabel,
    /// Community label is created if needed and applied.
    ApplyLabel,
}

impl DecisionOutcome {
    /// Fixed message reported when the run must fail the check.
    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            DecisionOutcome::FailMissingLabel => Some("Community PRs must be labelled"),
            DecisionOutcome::FailExemptMissingLabel => Some("The PR is missing a label!"),
            DecisionOutcome::Skip | DecisionOutcome::ApplyLabel => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure_message().is_some()
    }
}
