use std::sync::Arc;

use crate::entities::photo::Photo;
use crate::errors::GalleryResult;
use crate::extension::{ExtensionClient, ListResult, PageRequest};
use crate::models::{PhotoFilter, PhotoQuery, PhotoSorter};

pub struct PhotoService {
    photos: Arc<dyn ExtensionClient<Photo>>,
}

impl PhotoService {
    pub fn new(photos: Arc<dyn ExtensionClient<Photo>>) -> Self {
        Self { photos }
    }

    pub async fn list_photo(&self, query: &PhotoQuery) -> GalleryResult<ListResult<Photo>> {
        let options = PhotoFilter::from_query(query)?.to_list_options();
        let page = PageRequest::of(query.page(), query.size())
            .with_sort(PhotoSorter::to_sort(query.sort, query.sort_order));

        log::debug!(
            "Listing photos page={} size={} group={:?} keyword={:?} sort={:?}",
            page.page,
            page.size,
            query.group,
            query.keyword,
            query.sort
        );

        Ok(self.photos.list_by(&options, &page).await?)
    }
}
