use std::sync::Arc;

use crate::entities::photo::Photo;
use crate::entities::photo_group::PhotoGroup;
use crate::extension::{ExtensionClient, SchemeManager};
use crate::services::{PhotoFinder, PhotoGroupService, PhotoService, SettingService};

/// Shared handles every handler resolves its services from.
#[derive(Clone)]
pub struct AppState {
    pub schemes: Arc<SchemeManager>,
    pub photos: Arc<dyn ExtensionClient<Photo>>,
    pub groups: Arc<dyn ExtensionClient<PhotoGroup>>,
    pub photo_service: Arc<PhotoService>,
    pub photo_group_service: Arc<PhotoGroupService>,
    pub photo_finder: Arc<PhotoFinder>,
    pub settings: Arc<SettingService>,
}

impl AppState {
    pub fn new(
        schemes: Arc<SchemeManager>,
        photos: Arc<dyn ExtensionClient<Photo>>,
        groups: Arc<dyn ExtensionClient<PhotoGroup>>,
        settings: SettingService,
    ) -> Self {
        Self {
            schemes,
            photo_service: Arc::new(PhotoService::new(photos.clone())),
            photo_group_service: Arc::new(PhotoGroupService::new(groups.clone(), photos.clone())),
            photo_finder: Arc::new(PhotoFinder::new(photos.clone(), groups.clone())),
            settings: Arc::new(settings),
            photos,
            groups,
        }
    }
}
