//! End-to-end activation tests over in-memory adapters.

use std::time::Duration;

use crate::in_memory::helpers::{Collaborators, collaborators, shared_item};
use courier::share::{
    adapters::memory::{InMemoryContentProvider, ScriptedLoad},
    domain::{FailureReason, LoadedValue, TypeToken},
    ports::ComposeResult,
    services::{Delivery, DeliveryError},
};
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn mixed_share_reaches_the_composer(collaborators: Collaborators) -> eyre::Result<()> {
    let activation = collaborators.activation();
    let items = [
        shared_item([
            InMemoryContentProvider::offering(
                TypeToken::QuickTimeMovie,
                LoadedValue::named_file("/private/tmp/8C1E", "party.mov"),
            ),
            InMemoryContentProvider::text("look at this"),
        ]),
        shared_item([InMemoryContentProvider::offering(
            TypeToken::Url,
            LoadedValue::url("https://example.com/party"),
        )]),
    ];

    let delivery = activation
        .run(&items)
        .await
        .ok_or_else(|| eyre::eyre!("fresh activation should run"))??;

    eyre::ensure!(
        delivery == Delivery::Composed(ComposeResult::Sent),
        "unexpected delivery {delivery:?}"
    );
    let drafts = collaborators.composer.drafts();
    let draft = drafts
        .first()
        .ok_or_else(|| eyre::eyre!("composer received no draft"))?;
    eyre::ensure!(
        draft.body() == Some("look at this https://example.com/party"),
        "unexpected body {:?}",
        draft.body()
    );
    let names: Vec<&str> = draft.attachments().iter().map(|a| a.filename()).collect();
    eyre::ensure!(names == ["party.mov"], "unexpected attachments {names:?}");
    eyre::ensure!(collaborators.preferences.messages_sent() == 1, "sent not counted");
    eyre::ensure!(collaborators.host.completions() == 1, "request not completed once");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn empty_share_shows_the_unsupported_alert(
    collaborators: Collaborators,
) -> eyre::Result<()> {
    let activation = collaborators.activation();

    let delivery = activation
        .run(&[])
        .await
        .ok_or_else(|| eyre::eyre!("fresh activation should run"))??;

    eyre::ensure!(
        delivery == Delivery::Alerted(FailureReason::NoSupportedContent),
        "unexpected delivery {delivery:?}"
    );
    let alerts = collaborators.host.alerts();
    eyre::ensure!(alerts.len() == 1, "expected one alert, got {}", alerts.len());
    eyre::ensure!(collaborators.composer.drafts().is_empty(), "draft was composed");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn headless_failure_still_completes(collaborators: Collaborators) -> eyre::Result<()> {
    collaborators.preferences.set_recipient(None);
    collaborators.host.set_headless(true);
    let activation = collaborators.activation();

    let delivered = activation
        .run(&[shared_item([InMemoryContentProvider::text("hello")])])
        .await
        .ok_or_else(|| eyre::eyre!("fresh activation should run"))?;

    eyre::ensure!(
        matches!(delivered, Err(DeliveryError::Host(_))),
        "expected a host error, got {delivered:?}"
    );
    eyre::ensure!(collaborators.host.completions() == 1, "request not completed once");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn cancelled_activation_alerts_the_user(collaborators: Collaborators) -> eyre::Result<()> {
    let activation = collaborators.activation();
    let hanging =
        InMemoryContentProvider::new().with_script(TypeToken::Png, ScriptedLoad::Hang);
    let items = [shared_item([hanging])];
    let cancellation = activation.cancellation();

    let (delivered, ()) = tokio::join!(activation.run(&items), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        cancellation.cancel();
    });

    let delivery = delivered.ok_or_else(|| eyre::eyre!("fresh activation should run"))??;
    eyre::ensure!(
        delivery == Delivery::Alerted(FailureReason::Cancelled),
        "unexpected delivery {delivery:?}"
    );
    eyre::ensure!(collaborators.host.completions() == 1, "request not completed once");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn finished_activation_does_not_run_again(
    collaborators: Collaborators,
) -> eyre::Result<()> {
    let activation = collaborators.activation();
    let items = [shared_item([InMemoryContentProvider::text("hello")])];

    activation
        .run(&items)
        .await
        .ok_or_else(|| eyre::eyre!("fresh activation should run"))??;
    let again = activation.run(&items).await;

    eyre::ensure!(again.is_none(), "second run delivered an outcome");
    eyre::ensure!(collaborators.composer.drafts().len() == 1, "draft composed twice");
    eyre::ensure!(collaborators.host.completions() == 1, "request completed twice");
    Ok(())
}
