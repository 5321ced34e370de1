use axum::{
    Json, Router,
    extract::{Path, RawQuery, State, rejection::PathRejection},
    routing::get,
};

use crate::dtos::GalleryPage;
use crate::dtos::gallery_page::GALLERY_TEMPLATE_ID;
use crate::errors::GalleryResult;
use crate::models::{PageUrls, QueryParams};

use super::Controller;
use super::app_state::AppState;

pub const GALLERY_PATH: &str = "/photos";

/// Theme-facing gallery route. Rendering belongs to the theme, so the
/// handler answers with the page model.
pub struct GalleryController;

impl Controller for GalleryController {
    fn routes() -> Router<AppState> {
        Router::new()
            .route(GALLERY_PATH, get(gallery_index))
            .route(&format!("{GALLERY_PATH}/page/{{page}}"), get(gallery_page))
    }
}

async fn gallery_index(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> GalleryResult<Json<GalleryPage>> {
    build_page(&state, 1, raw.as_deref()).await.map(Json)
}

async fn gallery_page(
    State(state): State<AppState>,
    page: Result<Path<usize>, PathRejection>,
    RawQuery(raw): RawQuery,
) -> GalleryResult<Json<GalleryPage>> {
    let Path(page) = page?;
    build_page(&state, page, raw.as_deref()).await.map(Json)
}

pub async fn build_page(state: &AppState, page: usize, raw: Option<&str>) -> GalleryResult<GalleryPage> {
    let params = QueryParams::parse(raw.unwrap_or_default());
    let group = params.first_non_blank("group");
    let size = state.settings.gallery_page_size();

    let photos = state
        .photo_finder
        .list_by_group(Some(page), Some(size), group.as_deref())
        .await?;
    let groups = state.photo_finder.group_by().await?;

    let urls = PageUrls::new(GALLERY_PATH, params);
    let prev_url = urls.prev(photos.page);
    let next_url = urls.next(photos.page, photos.total_pages);

    Ok(GalleryPage {
        template_id: GALLERY_TEMPLATE_ID,
        title: state.settings.title(),
        group,
        groups,
        photos,
        prev_url,
        next_url,
    })
}
