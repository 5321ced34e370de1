use futures_util::future::try_join_all;
use std::sync::Arc;

use crate::dtos::{PhotoGroupVo, PhotoVo};
use crate::entities::photo::Photo;
use crate::entities::photo_group::PhotoGroup;
use crate::errors::{GalleryError, GalleryResult};
use crate::extension::client::and_predicate;
use crate::extension::{ExtensionClient, ListResult, Predicate};
use crate::models::PhotoFilter;
use crate::models::comparators::{default_group_comparator, default_photo_comparator};
use crate::models::list_request::{page_null_safe, size_null_safe};

/// Read side used by the theme: photos and groups as view objects.
pub struct PhotoFinder {
    photos: Arc<dyn ExtensionClient<Photo>>,
    groups: Arc<dyn ExtensionClient<PhotoGroup>>,
}

impl PhotoFinder {
    pub fn new(
        photos: Arc<dyn ExtensionClient<Photo>>,
        groups: Arc<dyn ExtensionClient<PhotoGroup>>,
    ) -> Self {
        Self { photos, groups }
    }

    pub async fn list_all(&self) -> GalleryResult<Vec<PhotoVo>> {
        let photos = self
            .photos
            .list(None, Some(default_photo_comparator()))
            .await?;
        Ok(photos.into_iter().map(PhotoVo::from).collect())
    }

    pub async fn list(
        &self,
        page: Option<usize>,
        size: Option<usize>,
    ) -> GalleryResult<ListResult<PhotoVo>> {
        self.list_by_group(page, size, None).await
    }

    /// One page of photos, optionally scoped to a group; a blank group means
    /// every group.
    pub async fn list_by_group(
        &self,
        page: Option<usize>,
        size: Option<usize>,
        group: Option<&str>,
    ) -> GalleryResult<ListResult<PhotoVo>> {
        let predicate = PhotoFilter::by_group(group).to_predicate()?;
        let listed = self
            .photos
            .list_page(
                Some(predicate),
                Some(default_photo_comparator()),
                page_null_safe(page),
                size_null_safe(size),
            )
            .await?;
        Ok(listed.map(PhotoVo::from))
    }

    /// Live photos of one group in default order.
    pub async fn list_by(&self, group: &str) -> GalleryResult<Vec<PhotoVo>> {
        let live: Predicate<Photo> = Arc::new(|photo: &Photo| !photo.is_deleted());
        let predicate = and_predicate(live, PhotoFilter::by_group(Some(group)).to_predicate()?);
        let photos = self
            .photos
            .list(Some(predicate), Some(default_photo_comparator()))
            .await?;
        Ok(photos.into_iter().map(PhotoVo::from).collect())
    }

    /// Every group in default order, each carrying its photos and count.
    pub async fn group_by(&self) -> GalleryResult<Vec<PhotoGroupVo>> {
        let groups = self
            .groups
            .list(None, Some(default_group_comparator()))
            .await?;

        try_join_all(groups.into_iter().map(|group| async move {
            let photos = self.list_by(&group.metadata.name).await?;
            Ok::<_, GalleryError>(PhotoGroupVo::from(group).with_photos(photos))
        }))
        .await
    }
}
