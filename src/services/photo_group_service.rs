use futures_util::future::try_join_all;
use std::sync::Arc;

use crate::entities::photo::{GROUP_NAME_INDEX, Photo};
use crate::entities::photo_group::PhotoGroup;
use crate::errors::{GalleryError, GalleryResult};
use crate::extension::{ExtensionClient, ListOptions, ListResult, PageRequest, Query, Sort};
use crate::models::ListRequest;
use crate::models::comparators::default_index_sort;
use crate::models::validation::StringValidations;

pub struct PhotoGroupService {
    groups: Arc<dyn ExtensionClient<PhotoGroup>>,
    photos: Arc<dyn ExtensionClient<Photo>>,
}

impl PhotoGroupService {
    pub fn new(
        groups: Arc<dyn ExtensionClient<PhotoGroup>>,
        photos: Arc<dyn ExtensionClient<Photo>>,
    ) -> Self {
        Self { groups, photos }
    }

    /// Lists groups with a freshly computed `status.photoCount`.
    pub async fn list_photo_group(
        &self,
        request: &ListRequest,
    ) -> GalleryResult<ListResult<PhotoGroup>> {
        let options = ListOptions::from_selectors(&request.label_selector, &request.field_selector)?;
        let page = PageRequest::of(request.page, request.size).with_sort(default_index_sort());

        let listed = self.groups.list_by(&options, &page).await?;
        let counts = try_join_all(listed.items.iter().map(|group| self.fetch_photo_count(group))).await?;

        let ListResult {
            page,
            size,
            total,
            items,
            ..
        } = listed;
        let groups = items
            .into_iter()
            .zip(counts)
            .map(|(group, count)| group.with_photo_count(count))
            .collect();

        Ok(ListResult::new(page, size, total, groups))
    }

    /// Deletes the group, then sweeps the photos that reference it.
    ///
    /// The sweep is not atomic with the group deletion: photo deletions that
    /// fail are logged and the deleted group is still returned.
    pub async fn delete_photo_group(&self, name: &str) -> GalleryResult<PhotoGroup> {
        name.should_not_empty("name")?;

        let group = self
            .groups
            .fetch(name)
            .await?
            .ok_or_else(|| GalleryError::not_found(format!("PhotoGroup \"{}\" not found", name)))?;

        let deleted = self.groups.delete(group).await?;
        log::info!("Deleted photo group {}", name);

        let options = ListOptions::new().and_query(Query::equal(GROUP_NAME_INDEX, name));
        let members = match self.photos.list_all(&options, &Sort::unsorted()).await {
            Ok(members) => members,
            Err(err) => {
                log::warn!("Failed to list photos of deleted group {}: {}", name, err);
                return Ok(deleted);
            }
        };

        for photo in members {
            let photo_name = photo.metadata.name.clone();
            if let Err(err) = self.photos.delete(photo).await {
                log::warn!(
                    "Failed to delete photo {} of deleted group {}: {}",
                    photo_name,
                    name,
                    err
                );
            }
        }

        Ok(deleted)
    }

    /// Counts live photos referencing the group through the group-name index.
    pub async fn fetch_photo_count(&self, group: &PhotoGroup) -> GalleryResult<usize> {
        let options =
            ListOptions::new().and_query(Query::equal(GROUP_NAME_INDEX, group.metadata.name.as_str()));
        let members = self.photos.list_all(&options, &Sort::unsorted()).await?;
        Ok(members.iter().filter(|photo| photo.state().is_live()).count())
    }
}
