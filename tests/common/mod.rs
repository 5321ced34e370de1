#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use photo_gallery::entities::photo::{Photo, PhotoSpec};
use photo_gallery::entities::photo_group::{PhotoGroup, PhotoGroupSpec};
use photo_gallery::extension::{ExtensionClient, MemoryExtensionStore, Metadata};

pub const EPOCH: i64 = 1_700_000_000;

pub fn at(offset_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(EPOCH + offset_seconds, 0).expect("valid timestamp")
}

pub fn photo(name: &str, group: &str, display_name: &str, created: i64) -> Photo {
    Photo::new(
        Metadata::named(name).with_creation_timestamp(at(created)),
        PhotoSpec::new(display_name, format!("https://img.example.com/{name}.jpg"), group),
    )
}

pub fn photo_with_priority(name: &str, group: &str, created: i64, priority: Option<i32>) -> Photo {
    let mut photo = photo(name, group, name, created);
    photo.spec.priority = priority;
    photo
}

pub fn group(name: &str, display_name: &str, created: i64) -> PhotoGroup {
    PhotoGroup::new(
        Metadata::named(name).with_creation_timestamp(at(created)),
        PhotoGroupSpec::new(display_name),
    )
}

pub struct Stores {
    pub photos: Arc<MemoryExtensionStore<Photo>>,
    pub groups: Arc<MemoryExtensionStore<PhotoGroup>>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            photos: Arc::new(MemoryExtensionStore::new()),
            groups: Arc::new(MemoryExtensionStore::new()),
        }
    }

    pub fn photo_client(&self) -> Arc<dyn ExtensionClient<Photo>> {
        self.photos.clone()
    }

    pub fn group_client(&self) -> Arc<dyn ExtensionClient<PhotoGroup>> {
        self.groups.clone()
    }

    pub async fn with_photos(self, photos: Vec<Photo>) -> Self {
        for photo in photos {
            self.photos.create(photo).await.expect("failed to seed photo");
        }
        self
    }

    pub async fn with_groups(self, groups: Vec<PhotoGroup>) -> Self {
        for group in groups {
            self.groups.create(group).await.expect("failed to seed group");
        }
        self
    }
}

pub fn names<T, F>(items: &[T], name_of: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    items.iter().map(|item| name_of(item).to_string()).collect()
}
