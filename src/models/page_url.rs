use super::query_params::QueryParams;

/// Builds `/base`, `/base/page/{n}` style links that keep the query string.
#[derive(Debug, Clone)]
pub struct PageUrls {
    base: String,
    params: QueryParams,
}

impl PageUrls {
    pub fn new(base: impl Into<String>, params: QueryParams) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Self { base, params }
    }

    pub fn page(&self, page: usize) -> String {
        let path = if page <= 1 {
            if self.base.is_empty() {
                "/".to_string()
            } else {
                self.base.clone()
            }
        } else {
            format!("{}/page/{}", self.base, page)
        };

        if self.params.is_empty() {
            path
        } else {
            format!("{}?{}", path, self.params.to_query_string())
        }
    }

    pub fn prev(&self, current: usize) -> Option<String> {
        (current > 1).then(|| self.page(current - 1))
    }

    pub fn next(&self, current: usize, total_pages: usize) -> Option<String> {
        (current < total_pages).then(|| self.page(current + 1))
    }
}
