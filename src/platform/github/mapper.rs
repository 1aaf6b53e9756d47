use crate::config::GitHubContext;
use crate::error::Result;
use crate::event::EventPayload;
use crate::platform::types;

/// Map the runner context and event payload to our platform Target type.
pub fn map_target(context: &GitHubContext, event: &EventPayload) -> Result<types::Target> {
    let (owner, repo) = context.repo()?;

    Ok(types::Target {
        owner,
        repo,
        number: event.item().map(|item| item.number),
        actor: event
            .actor()
            .map(str::to_string)
            .or_else(|| context.actor.clone()),
        labels: event.labels(),
    })
}
