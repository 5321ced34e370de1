use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    routing::{delete, get},
};

use crate::entities::photo_group::PhotoGroup;
use crate::errors::GalleryResult;
use crate::extension::ListResult;
use crate::models::{ListRequest, QueryParams};

use super::Controller;
use super::app_state::AppState;

pub const PHOTO_GROUPS_API: &str = "/apis/console.api.photo.halo.run/v1alpha1/photogroups";

pub struct PhotoGroupController;

impl Controller for PhotoGroupController {
    fn routes() -> Router<AppState> {
        Router::new()
            .route(PHOTO_GROUPS_API, get(list_photo_groups))
            .route(
                &format!("{PHOTO_GROUPS_API}/{{name}}"),
                delete(delete_photo_group),
            )
    }
}

async fn list_photo_groups(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> GalleryResult<Json<ListResult<PhotoGroup>>> {
    let params = QueryParams::parse(raw.as_deref().unwrap_or_default());
    let request = ListRequest::from_params(&params);
    let groups = state.photo_group_service.list_photo_group(&request).await?;
    Ok(Json(groups))
}

async fn delete_photo_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> GalleryResult<Json<PhotoGroup>> {
    let deleted = state.photo_group_service.delete_photo_group(&name).await?;
    Ok(Json(deleted))
}
