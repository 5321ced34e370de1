use serde::{Deserialize, Serialize};

use crate::extension::index::IndexValue;
use crate::extension::{Extension, GroupVersionKind, IndexSpec, LifecycleState, Metadata};

pub const GROUP_NAME_INDEX: &str = "spec.groupName";
pub const DISPLAY_NAME_INDEX: &str = "spec.displayName";
pub const PRIORITY_INDEX: &str = "spec.priority";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub metadata: Metadata,
    pub spec: PhotoSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default)]
    pub group_name: String,
}

impl Photo {
    pub fn new(metadata: Metadata, spec: PhotoSpec) -> Self {
        Self { metadata, spec }
    }

    pub fn state(&self) -> LifecycleState {
        self.metadata.state()
    }

    pub fn is_deleted(&self) -> bool {
        self.metadata.is_deleted()
    }

    pub fn belongs_to(&self, group: &str) -> bool {
        self.spec.group_name == group
    }
}

impl PhotoSpec {
    pub fn new(
        display_name: impl Into<String>,
        url: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            url: url.into(),
            group_name: group_name.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

fn group_name_key(photo: &Photo) -> Option<IndexValue> {
    Some(IndexValue::Text(photo.spec.group_name.clone()))
}

fn display_name_key(photo: &Photo) -> Option<IndexValue> {
    photo.spec.display_name.clone().map(IndexValue::Text)
}

// absent priority is filed under 0, unlike the in-memory comparators
fn priority_key(photo: &Photo) -> Option<IndexValue> {
    Some(IndexValue::Int(i64::from(photo.spec.priority.unwrap_or(0))))
}

impl Extension for Photo {
    fn gvk() -> GroupVersionKind {
        GroupVersionKind {
            group: "core.halo.run",
            version: "v1alpha1",
            kind: "Photo",
            plural: "photos",
            singular: "photo",
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
        indexes.push(IndexSpec::new(GROUP_NAME_INDEX, group_name_key));
        indexes.push(IndexSpec::new(DISPLAY_NAME_INDEX, display_name_key));
        indexes.push(IndexSpec::new(PRIORITY_INDEX, priority_key));
        indexes
    }
}
