use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::client::StoreResult;
use super::{Extension, StoreError};

const GENERATED_SUFFIX_LEN: usize = 5;

/// Fills in the store-owned metadata of a new extension.
pub fn prepare_create<E: Extension>(mut extension: E, now: DateTime<Utc>) -> StoreResult<E> {
    let metadata = extension.metadata_mut();
    if metadata.name.trim().is_empty() {
        let prefix = metadata
            .generate_name
            .as_deref()
            .filter(|prefix| !prefix.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| StoreError::Invalid("metadata.name must not be empty".to_string()))?;
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(GENERATED_SUFFIX_LEN)
            .collect();
        metadata.name = format!("{prefix}{suffix}");
    }
    if metadata.creation_timestamp.is_none() {
        metadata.creation_timestamp = Some(now);
    }
    metadata.deletion_timestamp = None;
    metadata.version = Some(1);
    Ok(extension)
}

/// Merges an incoming replacement with the stored copy.
pub fn prepare_update<E: Extension>(stored: &E, mut incoming: E) -> StoreResult<E> {
    let current = stored.metadata();
    if let Some(version) = incoming.metadata().version {
        if Some(version) != current.version {
            return Err(StoreError::Conflict {
                kind: E::gvk().kind,
                name: current.name.clone(),
            });
        }
    }

    let metadata = incoming.metadata_mut();
    metadata.creation_timestamp = current.creation_timestamp;
    metadata.deletion_timestamp = current.deletion_timestamp;
    metadata.version = Some(current.version.unwrap_or(0) + 1);
    Ok(incoming)
}

/// Stamps the deletion time and reports whether the extension can be
/// dropped physically right away.
pub fn mark_deleted<E: Extension>(mut extension: E, now: DateTime<Utc>) -> (E, bool) {
    let metadata = extension.metadata_mut();
    if metadata.deletion_timestamp.is_none() {
        metadata.deletion_timestamp = Some(now);
    }
    metadata.version = Some(metadata.version.unwrap_or(0) + 1);
    let removable = metadata.finalizers.is_empty();
    (extension, removable)
}

/// A soft-deleted extension whose finalizers are all gone is due for removal.
pub fn is_collectable<E: Extension>(extension: &E) -> bool {
    let metadata = extension.metadata();
    metadata.deletion_timestamp.is_some() && metadata.finalizers.is_empty()
}
