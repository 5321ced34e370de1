pub mod comparators;
pub mod list_request;
pub mod page_url;
pub mod photo_filter;
pub mod photo_query;
pub mod photo_sorter;
pub mod query_params;
pub mod validation;

pub use list_request::ListRequest;
pub use page_url::PageUrls;
pub use photo_filter::PhotoFilter;
pub use photo_query::PhotoQuery;
pub use photo_sorter::PhotoSorter;
pub use query_params::QueryParams;
