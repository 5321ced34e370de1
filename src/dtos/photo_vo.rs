use serde::{Deserialize, Serialize};

use crate::entities::photo::{Photo, PhotoSpec};
use crate::extension::Metadata;

/// Read-only projection of a photo for theme templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoVo {
    pub metadata: Metadata,
    pub spec: PhotoSpec,
}

impl From<Photo> for PhotoVo {
    fn from(photo: Photo) -> Self {
        Self {
            metadata: photo.metadata,
            spec: photo.spec,
        }
    }
}
