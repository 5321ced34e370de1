mod common;

use common::{Stores, group, photo, photo_with_priority};
use photo_gallery::extension::ExtensionClient;
use photo_gallery::models::ListRequest;
use photo_gallery::services::{PhotoFinder, PhotoGroupService};

async fn finder() -> (Stores, PhotoFinder) {
    let mut held = photo("held", "trips", "held", 9);
    held.metadata = held.metadata.with_finalizer("gallery/cleanup");
    let mut first = group("pets", "Pets", 0);
    first.spec.priority = Some(1);
    let stores = Stores::new()
        .with_groups(vec![first, group("trips", "Trips", 1), group("empty", "Empty", 2)])
        .await
        .with_photos(vec![
            photo_with_priority("t1", "trips", 0, Some(2)),
            photo_with_priority("t2", "trips", 1, None),
            photo_with_priority("t3", "trips", 2, Some(2)),
            photo_with_priority("p1", "pets", 3, None),
            held,
        ])
        .await;
    let held = stores.photos.fetch("held").await.unwrap().unwrap();
    stores.photos.delete(held).await.unwrap();

    let finder = PhotoFinder::new(stores.photo_client(), stores.group_client());
    (stores, finder)
}

#[tokio::test]
async fn list_by_orders_by_priority_then_newest() {
    let (_, finder) = finder().await;

    let photos = finder.list_by("trips").await.unwrap();

    let names: Vec<_> = photos.iter().map(|p| p.metadata.name.as_str()).collect();
    assert_eq!(names, vec!["t2", "t3", "t1"]);
}

#[tokio::test]
async fn group_by_joins_photos_and_counts() {
    let (_, finder) = finder().await;

    let groups = finder.group_by().await.unwrap();

    let summary: Vec<_> = groups
        .iter()
        .map(|g| (g.metadata.name.as_str(), g.status.photo_count, g.photos.len()))
        .collect();
    // absent priority sorts below 1, newest first among them
    assert_eq!(summary, vec![("empty", 0, 0), ("trips", 3, 3), ("pets", 1, 1)]);
}

#[tokio::test]
async fn list_by_group_pages_with_defaults() {
    let (_, finder) = finder().await;

    let page = finder.list_by_group(None, Some(2), Some("trips")).await.unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.total, 4);
    assert_eq!(page.len(), 2);
    assert!(page.has_next);
}

#[tokio::test]
async fn blank_group_lists_every_photo() {
    let (_, finder) = finder().await;

    let page = finder.list_by_group(Some(1), Some(0), Some("")).await.unwrap();
    let spaces = finder.list_by_group(Some(1), Some(0), Some("  ")).await.unwrap();
    let all = finder.list_all().await.unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.items, all);
    assert_eq!(spaces.total, 5);
    assert_eq!(spaces.items, all);
}

#[tokio::test]
async fn list_pages_every_group() {
    let (_, finder) = finder().await;

    let page = finder.list(Some(3), Some(2)).await.unwrap();

    assert_eq!(page.page, 3);
    assert_eq!(page.len(), 1);
    assert!(page.last);
}

// Absent priority is lowest for in-memory comparators but files under 0 in
// the priority index, so the two group orderings disagree.
#[tokio::test]
async fn absent_priority_orders_differently_in_index_and_comparator() {
    let mut zero = group("zero", "Zero", 10);
    zero.spec.priority = Some(0);
    let stores = Stores::new()
        .with_groups(vec![zero, group("none", "None", 0)])
        .await;

    let finder = PhotoFinder::new(stores.photo_client(), stores.group_client());
    let by_comparator: Vec<_> = finder
        .group_by()
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.metadata.name)
        .collect();

    let service = PhotoGroupService::new(stores.group_client(), stores.photo_client());
    let by_index: Vec<_> = service
        .list_photo_group(&ListRequest::default())
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|g| g.metadata.name)
        .collect();

    assert_eq!(by_comparator, vec!["none", "zero"]);
    assert_eq!(by_index, vec!["zero", "none"]);
}
