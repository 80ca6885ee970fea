//! Given steps for share activation BDD scenarios.

use std::sync::Arc;

use super::world::ShareWorld;
use courier::share::{
    adapters::memory::{InMemoryContentProvider, InMemoryMessageComposer},
    domain::{LoadedValue, TypeToken},
    ports::{ComposeResult, ContentItem, ContentProvider},
};
use eyre::eyre;
use rstest_bdd_macros::given;

fn share(world: &mut ShareWorld, provider: InMemoryContentProvider) {
    let provider: Arc<dyn ContentProvider> = Arc::new(provider);
    world.items.push(ContentItem::new([provider]));
}

#[given(r#"a configured recipient "{recipient}""#)]
fn configured_recipient(world: &mut ShareWorld, recipient: String) {
    world.preferences.set_recipient(Some(recipient));
}

#[given("no configured recipient")]
fn no_configured_recipient(world: &mut ShareWorld) {
    world.preferences.set_recipient(None);
}

#[given(r#"a shared item offering text "{text}""#)]
fn shared_text(world: &mut ShareWorld, text: String) {
    share(world, InMemoryContentProvider::text(text));
}

#[given(r#"a shared item offering a photo at "{path}""#)]
fn shared_photo(world: &mut ShareWorld, path: String) {
    let reader = std::mem::take(&mut world.reader);
    world.reader = reader.with_file(path.as_str(), vec![0xff, 0xd8, 0xff, 0xe0]);
    share(
        world,
        InMemoryContentProvider::offering(TypeToken::Jpeg, LoadedValue::file(path)),
    );
}

#[given(r#"a shared item offering the link "{url}""#)]
fn shared_link(world: &mut ShareWorld, url: String) {
    share(
        world,
        InMemoryContentProvider::offering(TypeToken::Url, LoadedValue::url(url)),
    );
}

#[given("a shared item offering no supported types")]
fn shared_unsupported(world: &mut ShareWorld) {
    share(world, InMemoryContentProvider::new());
}

#[given(r#"the composer finishes with "{result}""#)]
fn composer_finishes_with(world: &mut ShareWorld, result: String) -> Result<(), eyre::Report> {
    let result = match result.as_str() {
        "sent" => ComposeResult::Sent,
        "cancelled" => ComposeResult::Cancelled,
        "failed" => ComposeResult::Failed,
        other => return Err(eyre!("unknown composer result: {other}")),
    };
    world.composer = Arc::new(InMemoryMessageComposer::finishing_with(result));
    Ok(())
}
