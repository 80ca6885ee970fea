//! Tests for reading attachment data through `cap-std`.

use std::sync::Arc;

use crate::in_memory::helpers::{Collaborators, collaborators, shared_item};
use camino::Utf8PathBuf;
use courier::share::{
    adapters::{fs::CapStdAttachmentReader, memory::InMemoryContentProvider},
    config::ShareConfig,
    domain::{AttachmentPayload, LoadedValue, TypeToken},
    ports::AttachmentReader,
    services::ContentResolver,
};
use mockable::DefaultClock;
use rstest::rstest;

fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> eyre::Result<Utf8PathBuf> {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name))
        .map_err(|path| eyre::eyre!("non UTF-8 temp path: {}", path.display()))?;
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[tokio::test]
async fn reads_an_existing_file() -> eyre::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = temp_file(&dir, "photo.png", b"\x89PNG")?;

    let bytes = CapStdAttachmentReader::new().read(&path).await?;

    eyre::ensure!(bytes == b"\x89PNG", "unexpected contents {bytes:?}");
    Ok(())
}

#[tokio::test]
async fn missing_file_is_an_error() -> eyre::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = Utf8PathBuf::from_path_buf(dir.path().join("missing.png"))
        .map_err(|path| eyre::eyre!("non UTF-8 temp path: {}", path.display()))?;

    let result = CapStdAttachmentReader::new().read(&path).await;

    eyre::ensure!(result.is_err(), "reading a missing file should fail");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn images_on_disk_are_attached_as_bytes(
    collaborators: Collaborators,
) -> eyre::Result<()> {
    let dir = tempfile::tempdir()?;
    let photo = temp_file(&dir, "IMG_0042.jpg", &[0xff, 0xd8, 0xff, 0xe1])?;
    let clip = temp_file(&dir, "clip.mov", b"moov")?;
    let resolver = ContentResolver::new(
        Arc::clone(&collaborators.preferences),
        Arc::new(CapStdAttachmentReader::new()),
        Arc::new(DefaultClock),
        &ShareConfig::default(),
    );
    let items = [shared_item([
        InMemoryContentProvider::offering(TypeToken::Jpeg, LoadedValue::file(photo)),
        InMemoryContentProvider::offering(TypeToken::QuickTimeMovie, LoadedValue::file(clip.clone())),
    ])];

    let outcome = resolver
        .begin(&items)
        .await
        .ok_or_else(|| eyre::eyre!("fresh resolver should run"))?;
    let draft = outcome
        .draft()
        .ok_or_else(|| eyre::eyre!("expected success, got {outcome:?}"))?;

    let payloads: Vec<&AttachmentPayload> =
        draft.attachments().iter().map(|a| a.payload()).collect();
    eyre::ensure!(
        payloads
            == [
                &AttachmentPayload::Bytes(vec![0xff, 0xd8, 0xff, 0xe1]),
                &AttachmentPayload::FileReference(clip),
            ],
        "unexpected payloads {payloads:?}"
    );
    Ok(())
}
