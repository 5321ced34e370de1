use std::cmp::Ordering;
use std::sync::Arc;

use crate::entities::photo::{PRIORITY_INDEX, Photo};
use crate::entities::photo_group::PhotoGroup;
use crate::extension::index::{METADATA_CREATION_TIMESTAMP, METADATA_NAME};
use crate::extension::{Comparator, Order, Sort};

pub fn reversed<E: 'static>(comparator: Comparator<E>) -> Comparator<E> {
    Arc::new(move |left: &E, right: &E| comparator(left, right).reverse())
}

pub fn create_time_comparator() -> Comparator<Photo> {
    Arc::new(|left: &Photo, right: &Photo| {
        left.metadata
            .creation_timestamp
            .cmp(&right.metadata.creation_timestamp)
            .then_with(|| left.metadata.name.cmp(&right.metadata.name))
    })
}

/// Display name with absent names first, then name.
pub fn display_name_comparator() -> Comparator<Photo> {
    Arc::new(|left: &Photo, right: &Photo| {
        left.spec
            .display_name
            .cmp(&right.spec.display_name)
            .then_with(|| left.metadata.name.cmp(&right.metadata.name))
    })
}

/// Priority ascending with absent priority lowest, newest first, then name.
pub fn default_photo_comparator() -> Comparator<Photo> {
    Arc::new(|left: &Photo, right: &Photo| {
        priority_then_newest(
            (left.spec.priority, &left.metadata.creation_timestamp, &left.metadata.name),
            (right.spec.priority, &right.metadata.creation_timestamp, &right.metadata.name),
        )
    })
}

pub fn default_group_comparator() -> Comparator<PhotoGroup> {
    Arc::new(|left: &PhotoGroup, right: &PhotoGroup| {
        priority_then_newest(
            (left.spec.priority, &left.metadata.creation_timestamp, &left.metadata.name),
            (right.spec.priority, &right.metadata.creation_timestamp, &right.metadata.name),
        )
    })
}

type DefaultKey<'a> = (
    Option<i32>,
    &'a Option<chrono::DateTime<chrono::Utc>>,
    &'a String,
);

fn priority_then_newest(left: DefaultKey<'_>, right: DefaultKey<'_>) -> Ordering {
    left.0
        .cmp(&right.0)
        .then_with(|| right.1.cmp(left.1))
        .then_with(|| left.2.cmp(right.2))
}

/// Index-backed counterpart of the default comparators. The priority index
/// files an absent priority under 0, so it ties with an explicit 0 here.
pub fn default_index_sort() -> Sort {
    Sort::by(Order::asc(PRIORITY_INDEX))
        .then(Order::desc(METADATA_CREATION_TIMESTAMP))
        .then(Order::asc(METADATA_NAME))
}
