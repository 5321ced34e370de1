use serde::{Deserialize, Serialize};

use crate::extension::index::IndexValue;
use crate::extension::{Extension, GroupVersionKind, IndexSpec, Metadata};

use super::photo::{DISPLAY_NAME_INDEX, PRIORITY_INDEX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoGroup {
    pub metadata: Metadata,
    pub spec: PhotoGroupSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PhotoGroupStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoGroupSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// Derived on every read; never the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoGroupStatus {
    #[serde(default)]
    pub photo_count: usize,
}

impl PhotoGroup {
    pub fn new(metadata: Metadata, spec: PhotoGroupSpec) -> Self {
        Self {
            metadata,
            spec,
            status: None,
        }
    }

    pub fn status_or_default(&mut self) -> &mut PhotoGroupStatus {
        self.status.get_or_insert_with(PhotoGroupStatus::default)
    }

    pub fn with_photo_count(mut self, photo_count: usize) -> Self {
        self.status_or_default().photo_count = photo_count;
        self
    }
}

impl PhotoGroupSpec {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

fn display_name_key(group: &PhotoGroup) -> Option<IndexValue> {
    group.spec.display_name.clone().map(IndexValue::Text)
}

fn priority_key(group: &PhotoGroup) -> Option<IndexValue> {
    Some(IndexValue::Int(i64::from(group.spec.priority.unwrap_or(0))))
}

impl Extension for PhotoGroup {
    fn gvk() -> GroupVersionKind {
        GroupVersionKind {
            group: "core.halo.run",
            version: "v1alpha1",
            kind: "PhotoGroup",
            plural: "photogroups",
            singular: "photogroup",
        }
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn indexes() -> Vec<IndexSpec<Self>> {
        let mut indexes = IndexSpec::defaults();
        indexes.push(IndexSpec::new(DISPLAY_NAME_INDEX, display_name_key));
        indexes.push(IndexSpec::new(PRIORITY_INDEX, priority_key));
        indexes
    }
}
