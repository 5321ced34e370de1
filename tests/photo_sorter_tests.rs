mod common;

use common::{photo, photo_with_priority};
use photo_gallery::entities::photo::Photo;
use photo_gallery::errors::GalleryError;
use photo_gallery::extension::Comparator;
use photo_gallery::models::PhotoSorter;
use photo_gallery::models::comparators::default_photo_comparator;

fn sorted(mut photos: Vec<Photo>, comparator: Comparator<Photo>) -> Vec<String> {
    photos.sort_by(|a, b| comparator(a, b));
    photos.into_iter().map(|p| p.metadata.name).collect()
}

#[test]
fn no_sorter_orders_by_creation_time_then_name() {
    let photos = vec![photo("c", "g", "c", 1), photo("b", "g", "b", 0), photo("a", "g", "a", 1)];

    let ordered = sorted(photos, PhotoSorter::comparator(None, Some(false)));

    assert_eq!(ordered, vec!["b", "a", "c"]);
}

#[test]
fn create_time_descending_only_when_explicitly_false() {
    let photos = || vec![photo("a", "g", "a", 0), photo("b", "g", "b", 1)];

    assert_eq!(
        sorted(photos(), PhotoSorter::comparator(Some(PhotoSorter::CreateTime), None)),
        vec!["a", "b"]
    );
    assert_eq!(
        sorted(photos(), PhotoSorter::comparator(Some(PhotoSorter::CreateTime), Some(true))),
        vec!["a", "b"]
    );
    assert_eq!(
        sorted(photos(), PhotoSorter::comparator(Some(PhotoSorter::CreateTime), Some(false))),
        vec!["b", "a"]
    );
}

#[test]
fn display_name_puts_absent_names_first() {
    let mut untitled = photo("z", "g", "ignored", 0);
    untitled.spec.display_name = None;
    let photos = vec![photo("b", "g", "Beta", 0), untitled, photo("a", "g", "Alpha", 0)];

    let ordered = sorted(photos, PhotoSorter::comparator(Some(PhotoSorter::DisplayName), None));

    assert_eq!(ordered, vec!["z", "a", "b"]);
}

#[test]
fn display_name_ties_resolve_by_name() {
    let photos = vec![photo("b", "g", "Same", 0), photo("a", "g", "Same", 5)];

    let ordered = sorted(photos, PhotoSorter::comparator(Some(PhotoSorter::DisplayName), None));

    assert_eq!(ordered, vec!["a", "b"]);
}

#[test]
fn convert_from_is_lenient() {
    assert_eq!(PhotoSorter::convert_from(Some("display_name")), Some(PhotoSorter::DisplayName));
    assert_eq!(PhotoSorter::convert_from(Some(" CREATE_TIME ")), Some(PhotoSorter::CreateTime));
    assert_eq!(PhotoSorter::convert_from(Some("bogus")), None);
    assert_eq!(PhotoSorter::convert_from(Some("")), None);
    assert_eq!(PhotoSorter::convert_from(None), None);
}

#[test]
fn resolve_rejects_unknown_sort() {
    let err = PhotoSorter::resolve(Some("bogus"), None).err().expect("should fail");

    assert!(matches!(err, GalleryError::UnsupportedSort(ref raw) if raw == "bogus"));
}

#[test]
fn resolve_blank_sort_falls_back_to_creation_time() {
    let comparator = PhotoSorter::resolve(Some("  "), Some(false)).expect("blank is allowed");
    let photos = vec![photo("b", "g", "b", 1), photo("a", "g", "a", 0)];

    assert_eq!(sorted(photos, comparator), vec!["a", "b"]);
}

#[test]
fn default_comparator_puts_absent_priority_lowest() {
    let photos = vec![
        photo_with_priority("zero", "g", 0, Some(0)),
        photo_with_priority("five", "g", 0, Some(5)),
        photo_with_priority("none", "g", 0, None),
    ];

    let ordered = sorted(photos, default_photo_comparator());

    assert_eq!(ordered, vec!["none", "zero", "five"]);
}

#[test]
fn default_comparator_prefers_newest_within_priority() {
    let photos = vec![
        photo_with_priority("old", "g", 0, Some(1)),
        photo_with_priority("new", "g", 10, Some(1)),
        photo_with_priority("mid", "g", 5, Some(1)),
    ];

    let ordered = sorted(photos, default_photo_comparator());

    assert_eq!(ordered, vec!["new", "mid", "old"]);
}
