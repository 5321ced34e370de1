pub mod app_state;
pub mod extension_controller;
pub mod gallery_controller;
pub mod photo_controller;
pub mod photo_group_controller;

pub use app_state::AppState;

use axum::Router;
use extension_controller::ExtensionController;
use gallery_controller::GalleryController;
use photo_controller::PhotoController;
use photo_group_controller::PhotoGroupController;

/// A group of routes sharing the application state.
pub trait Controller {
    fn routes() -> Router<AppState>;
}

pub fn register_controllers(state: AppState) -> Router {
    Router::new()
        .merge(PhotoController::routes())
        .merge(PhotoGroupController::routes())
        .merge(GalleryController::routes())
        .merge(ExtensionController::routes())
        .with_state(state)
}
