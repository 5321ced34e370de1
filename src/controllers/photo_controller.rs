use axum::{
    Json, Router,
    extract::{RawQuery, State},
    routing::get,
};

use crate::entities::photo::Photo;
use crate::errors::GalleryResult;
use crate::extension::ListResult;
use crate::models::{PhotoQuery, QueryParams};

use super::Controller;
use super::app_state::AppState;

pub const PHOTOS_API: &str = "/apis/api.plugin.halo.run/v1alpha1/plugins/PluginPhotos/photos";

pub struct PhotoController;

impl Controller for PhotoController {
    fn routes() -> Router<AppState> {
        Router::new().route(PHOTOS_API, get(list_photos))
    }
}

async fn list_photos(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> GalleryResult<Json<ListResult<Photo>>> {
    let params = QueryParams::parse(raw.as_deref().unwrap_or_default());
    let query = PhotoQuery::from_params(&params);
    let photos = state.photo_service.list_photo(&query).await?;
    Ok(Json(photos))
}
