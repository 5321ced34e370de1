use super::query_params::QueryParams;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination and selector parameters shared by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub page: usize,
    /// Zero means unpaged.
    pub size: usize,
    pub label_selector: Vec<String>,
    pub field_selector: Vec<String>,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            label_selector: Vec::new(),
            field_selector: Vec::new(),
        }
    }
}

impl ListRequest {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            page: page_null_safe(parse_number(params, "page")),
            size: size_null_safe(parse_number(params, "size")),
            label_selector: non_blank(params.all("labelSelector")),
            field_selector: non_blank(params.all("fieldSelector")),
        }
    }
}

pub fn page_null_safe(page: Option<usize>) -> usize {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

pub fn size_null_safe(size: Option<usize>) -> usize {
    size.unwrap_or(DEFAULT_PAGE_SIZE)
}

fn parse_number(params: &QueryParams, key: &str) -> Option<usize> {
    let raw = params.first(key)?.trim();
    match raw.parse::<i64>() {
        Ok(value) if value >= 0 => usize::try_from(value).ok(),
        Ok(_) => {
            log::debug!("Ignoring negative {} value: {}", key, raw);
            None
        }
        Err(_) => {
            log::debug!("Ignoring unparsable {} value: {}", key, raw);
            None
        }
    }
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .collect()
}
