use super::list_request::ListRequest;
use super::photo_sorter::PhotoSorter;
use super::query_params::QueryParams;

/// Parsed parameters of a photo listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoQuery {
    pub list: ListRequest,
    pub group: Option<String>,
    pub keyword: Option<String>,
    pub sort: Option<PhotoSorter>,
    /// `true` ascending, `false` descending, `None` the sorter's default.
    pub sort_order: Option<bool>,
}

impl PhotoQuery {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            list: ListRequest::from_params(params),
            group: params.first_non_blank("group"),
            keyword: params.first_non_blank("keyword"),
            sort: PhotoSorter::convert_from(params.first("sort")),
            sort_order: params
                .first_non_blank("sortOrder")
                .map(|value| value.trim().eq_ignore_ascii_case("true")),
        }
    }

    pub fn page(&self) -> usize {
        self.list.page
    }

    pub fn size(&self) -> usize {
        self.list.size
    }
}
