mod common;

use common::{Stores, at, photo};
use photo_gallery::entities::photo::{GROUP_NAME_INDEX, Photo, PhotoSpec};
use photo_gallery::extension::index::METADATA_NAME;
use photo_gallery::extension::{
    ExtensionClient, LifecycleState, ListOptions, Metadata, Order, PageRequest, Query, Sort,
    StoreError,
};

#[tokio::test]
async fn create_stamps_version_and_keeps_preset_creation_time() {
    let stores = Stores::new();

    let created = stores
        .photos
        .create(photo("p1", "g1", "first", 5))
        .await
        .expect("failed to create");

    assert_eq!(created.metadata.version, Some(1));
    assert_eq!(created.metadata.creation_timestamp, Some(at(5)));
    assert_eq!(created.state(), LifecycleState::Active);
}

#[tokio::test]
async fn create_rejects_duplicate_names() {
    let stores = Stores::new().with_photos(vec![photo("p1", "g1", "first", 0)]).await;

    let err = stores
        .photos
        .create(photo("p1", "g2", "second", 1))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::AlreadyExists { kind: "Photo", .. }));
}

#[tokio::test]
async fn create_generates_name_from_prefix() {
    let stores = Stores::new();
    let mut metadata = Metadata::default();
    metadata.generate_name = Some("photo-".to_string());

    let created = stores
        .photos
        .create(Photo::new(metadata, PhotoSpec::new("x", "u", "g1")))
        .await
        .expect("failed to create");

    assert!(created.metadata.name.starts_with("photo-"));
    assert_eq!(created.metadata.name.len(), "photo-".len() + 5);
}

#[tokio::test]
async fn create_without_any_name_is_invalid() {
    let stores = Stores::new();

    let err = stores
        .photos
        .create(Photo::new(Metadata::default(), PhotoSpec::new("x", "u", "g1")))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Invalid(_)));
}

#[tokio::test]
async fn update_with_stale_version_conflicts() {
    let stores = Stores::new().with_photos(vec![photo("p1", "g1", "first", 0)]).await;
    let mut stale = stores.photos.fetch("p1").await.unwrap().unwrap();
    stale.metadata.version = Some(7);

    let err = stores.photos.update(stale).await.unwrap_err();

    assert!(matches!(err, StoreError::Conflict { .. }));
}

#[tokio::test]
async fn update_bumps_version_and_reindexes() {
    let stores = Stores::new().with_photos(vec![photo("p1", "g1", "first", 0)]).await;
    let mut current = stores.photos.fetch("p1").await.unwrap().unwrap();
    current.spec.group_name = "g2".to_string();

    let updated = stores.photos.update(current).await.expect("failed to update");
    assert_eq!(updated.metadata.version, Some(2));
    assert_eq!(updated.metadata.creation_timestamp, Some(at(0)));

    let in_old = stores
        .photos
        .list_all(
            &ListOptions::new().and_query(Query::equal(GROUP_NAME_INDEX, "g1")),
            &Sort::unsorted(),
        )
        .await
        .unwrap();
    let in_new = stores
        .photos
        .list_all(
            &ListOptions::new().and_query(Query::equal(GROUP_NAME_INDEX, "g2")),
            &Sort::unsorted(),
        )
        .await
        .unwrap();
    assert!(in_old.is_empty());
    assert_eq!(in_new.len(), 1);
}

#[tokio::test]
async fn delete_without_finalizers_removes_immediately() {
    let stores = Stores::new().with_photos(vec![photo("p1", "g1", "first", 0)]).await;
    let current = stores.photos.fetch("p1").await.unwrap().unwrap();

    let deleted = stores.photos.delete(current).await.expect("failed to delete");

    assert!(deleted.is_deleted());
    assert!(stores.photos.fetch("p1").await.unwrap().is_none());
    assert!(stores.photos.is_empty());
}

#[tokio::test]
async fn finalizers_hold_deleted_extension_until_released() {
    let mut held = photo("p1", "g1", "first", 0);
    held.metadata = held.metadata.with_finalizer("gallery/cleanup");
    let stores = Stores::new().with_photos(vec![held]).await;
    let current = stores.photos.fetch("p1").await.unwrap().unwrap();

    stores.photos.delete(current).await.expect("failed to delete");

    let mut pending = stores.photos.fetch("p1").await.unwrap().expect("still visible");
    assert_eq!(pending.state(), LifecycleState::PendingDeletion);

    pending.metadata.finalizers.clear();
    stores.photos.update(pending).await.expect("failed to release");

    let gone = stores.photos.fetch("p1").await.unwrap();
    assert_eq!(LifecycleState::of(gone.as_ref().map(|p| &p.metadata)), LifecycleState::Gone);
}

#[tokio::test]
async fn delete_of_missing_extension_is_not_found() {
    let stores = Stores::new();

    let err = stores
        .photos
        .delete(photo("ghost", "g1", "ghost", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn list_by_filters_sorts_and_pages() {
    let stores = Stores::new()
        .with_photos(vec![
            photo("a", "g1", "Sunset", 0),
            photo("b", "g1", "Harbor", 1),
            photo("c", "g2", "sunrise", 2),
            photo("d", "g1", "Dunes", 3),
        ])
        .await;
    let options = ListOptions::new().and_query(Query::equal(GROUP_NAME_INDEX, "g1"));
    let page = PageRequest::of(1, 2).with_sort(Sort::by(Order::desc(METADATA_NAME)));

    let result = stores.photos.list_by(&options, &page).await.unwrap();

    assert_eq!(result.total, 3);
    assert_eq!(result.total_pages, 2);
    assert!(result.has_next);
    let names: Vec<_> = result.items.iter().map(|p| p.metadata.name.as_str()).collect();
    assert_eq!(names, vec!["d", "b"]);
}

#[tokio::test]
async fn contains_query_ignores_case() {
    let stores = Stores::new()
        .with_photos(vec![
            photo("a", "g1", "Sunset", 0),
            photo("b", "g1", "Harbor", 1),
            photo("c", "g2", "sunrise", 2),
        ])
        .await;
    let options = ListOptions::new().and_query(Query::contains("spec.displayName", "SUN"));

    let found = stores.photos.list_all(&options, &Sort::unsorted()).await.unwrap();

    let names: Vec<_> = found.iter().map(|p| p.metadata.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[tokio::test]
async fn selectors_combine_labels_and_fields() {
    let mut tagged = photo("a", "g1", "Sunset", 0);
    tagged.metadata = tagged.metadata.with_label("featured", "true");
    let stores = Stores::new()
        .with_photos(vec![tagged, photo("b", "g1", "Harbor", 1), photo("c", "g2", "Dunes", 2)])
        .await;
    let options = ListOptions::from_selectors(
        &["featured=true".to_string()],
        &["spec.groupName=g1".to_string()],
    )
    .unwrap();

    let found = stores.photos.list_all(&options, &Sort::unsorted()).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].metadata.name, "a");
}

#[tokio::test]
async fn unknown_field_is_rejected() {
    let stores = Stores::new().with_photos(vec![photo("a", "g1", "Sunset", 0)]).await;
    let options = ListOptions::new().and_query(Query::equal("spec.url", "x"));

    let err = stores
        .photos
        .list_all(&options, &Sort::unsorted())
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::UnknownField(field) if field == "spec.url"));
}
