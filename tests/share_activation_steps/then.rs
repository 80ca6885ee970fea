//! Then steps for share activation BDD scenarios.

use super::world::ShareWorld;
use courier::share::domain::OutgoingDraft;
use eyre::eyre;
use rstest_bdd_macros::then;

fn single_draft(world: &ShareWorld) -> Result<OutgoingDraft, eyre::Report> {
    let mut drafts = world.composer.drafts();
    if drafts.len() != 1 {
        return Err(eyre!("expected one draft, got {}", drafts.len()));
    }
    drafts
        .pop()
        .ok_or_else(|| eyre!("composer recorded no draft"))
}

#[then(r#"the composer receives a draft for "{recipient}""#)]
fn composer_receives_draft(world: &ShareWorld, recipient: String) -> Result<(), eyre::Report> {
    let draft = single_draft(world)?;
    if draft.recipient().as_str() != recipient {
        return Err(eyre!(
            "expected recipient {recipient}, got {}",
            draft.recipient()
        ));
    }
    match &world.first_run {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre!("delivery failed: {err}")),
        None => Err(eyre!("activation has not run")),
    }
}

#[then(r#"the draft body is "{body}""#)]
fn draft_body_is(world: &ShareWorld, body: String) -> Result<(), eyre::Report> {
    let draft = single_draft(world)?;
    if draft.body() != Some(body.as_str()) {
        return Err(eyre!("expected body {body:?}, got {:?}", draft.body()));
    }
    Ok(())
}

#[then("the draft attachment count is {count:u64}")]
fn draft_attachment_count(world: &ShareWorld, count: u64) -> Result<(), eyre::Report> {
    let draft = single_draft(world)?;
    let attached = u64::try_from(draft.attachments().len())?;
    if attached != count {
        return Err(eyre!("expected {count} attachments, got {attached}"));
    }
    Ok(())
}

#[then("no draft reaches the composer")]
fn no_draft(world: &ShareWorld) -> Result<(), eyre::Report> {
    let drafts = world.composer.drafts();
    if !drafts.is_empty() {
        return Err(eyre!("expected no drafts, got {}", drafts.len()));
    }
    Ok(())
}

#[then(r#"an alert mentions "{fragment}""#)]
fn alert_mentions(world: &ShareWorld, fragment: String) -> Result<(), eyre::Report> {
    let alerts = world.host.alerts();
    let [alert] = alerts.as_slice() else {
        return Err(eyre!("expected one alert, got {}", alerts.len()));
    };
    if !alert.message.contains(&fragment) {
        return Err(eyre!("alert {:?} does not mention {fragment:?}", alert.message));
    }
    if alert.title != world.config.display_name {
        return Err(eyre!("unexpected alert title {:?}", alert.title));
    }
    Ok(())
}

#[then("the host request is completed once")]
fn completed_once(world: &ShareWorld) -> Result<(), eyre::Report> {
    let completions = world.host.completions();
    if completions != 1 {
        return Err(eyre!("expected one completion, got {completions}"));
    }
    Ok(())
}

#[then("the sent message count is {count:u64}")]
fn sent_message_count(world: &ShareWorld, count: u64) -> Result<(), eyre::Report> {
    let sent = world.preferences.messages_sent();
    if sent != count {
        return Err(eyre!("expected {count} sent messages, got {sent}"));
    }
    Ok(())
}

#[then("the second run is ignored")]
fn second_run_ignored(world: &ShareWorld) -> Result<(), eyre::Report> {
    match world.second_run_ignored {
        Some(true) => Ok(()),
        Some(false) => Err(eyre!("second run delivered an outcome")),
        None => Err(eyre!("activation did not run twice")),
    }
}
