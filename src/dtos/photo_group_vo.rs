use serde::{Deserialize, Serialize};

use crate::entities::photo_group::{PhotoGroup, PhotoGroupSpec, PhotoGroupStatus};
use crate::extension::Metadata;

use super::photo_vo::PhotoVo;

/// A group joined with its member photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoGroupVo {
    pub metadata: Metadata,
    pub spec: PhotoGroupSpec,
    pub status: PhotoGroupStatus,
    pub photos: Vec<PhotoVo>,
}

impl PhotoGroupVo {
    /// Attaches the member photos; the count always follows the list.
    pub fn with_photos(mut self, photos: Vec<PhotoVo>) -> Self {
        self.status.photo_count = photos.len();
        self.photos = photos;
        self
    }
}

impl From<PhotoGroup> for PhotoGroupVo {
    fn from(group: PhotoGroup) -> Self {
        Self {
            metadata: group.metadata,
            spec: group.spec,
            status: group.status.unwrap_or_default(),
            photos: Vec::new(),
        }
    }
}
