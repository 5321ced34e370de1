mod common;

use common::{Stores, photo};
use photo_gallery::errors::GalleryError;
use photo_gallery::models::{PhotoQuery, QueryParams};
use photo_gallery::services::PhotoService;

async fn service() -> PhotoService {
    let stores = Stores::new()
        .with_photos(vec![
            photo("a", "g1", "sunset beach", 0),
            photo("b", "g1", "mountain", 1),
            photo("c", "g2", "sunrise", 2),
        ])
        .await;
    PhotoService::new(stores.photo_client())
}

fn query(raw: &str) -> PhotoQuery {
    PhotoQuery::from_params(&QueryParams::parse(raw))
}

fn names(result: &photo_gallery::extension::ListResult<photo_gallery::entities::photo::Photo>) -> Vec<&str> {
    result.items.iter().map(|p| p.metadata.name.as_str()).collect()
}

#[tokio::test]
async fn filters_by_group_and_keyword() {
    let service = service().await;

    let result = service.list_photo(&query("group=g1&keyword=SUN")).await.unwrap();

    assert_eq!(names(&result), vec!["a"]);
    assert_eq!(result.total, 1);
}

#[tokio::test]
async fn keyword_alone_spans_groups_in_creation_order() {
    let service = service().await;

    let result = service.list_photo(&query("keyword=sun")).await.unwrap();

    assert_eq!(names(&result), vec!["a", "c"]);
}

#[tokio::test]
async fn sorts_by_display_name_descending() {
    let service = service().await;

    let result = service
        .list_photo(&query("sort=DISPLAY_NAME&sortOrder=false"))
        .await
        .unwrap();

    assert_eq!(names(&result), vec!["a", "c", "b"]);
}

#[tokio::test]
async fn pages_through_results() {
    let service = service().await;

    let result = service.list_photo(&query("page=2&size=2")).await.unwrap();

    assert_eq!(names(&result), vec!["c"]);
    assert_eq!(result.total, 3);
    assert_eq!(result.total_pages, 2);
    assert!(result.has_previous);
    assert!(!result.has_next);
}

#[tokio::test]
async fn empty_store_yields_empty_page() {
    let service = PhotoService::new(Stores::new().photo_client());

    let result = service.list_photo(&query("")).await.unwrap();

    assert!(result.is_empty());
    assert_eq!(result.total, 0);
}

#[tokio::test]
async fn field_selector_on_unindexed_field_is_invalid_input() {
    let service = service().await;

    let err = service
        .list_photo(&query("fieldSelector=spec.url%3Dx"))
        .await
        .unwrap_err();

    assert!(matches!(err, GalleryError::InvalidInput(_)));
}
