use serde::Serialize;

use crate::extension::ListResult;

use super::photo_group_vo::PhotoGroupVo;
use super::photo_vo::PhotoVo;

pub const GALLERY_TEMPLATE_ID: &str = "photos";

/// Model handed to the theme for the gallery page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage {
    pub template_id: &'static str,
    pub title: String,
    pub group: Option<String>,
    pub groups: Vec<PhotoGroupVo>,
    pub photos: ListResult<PhotoVo>,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}
