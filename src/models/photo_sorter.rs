use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::photo::{DISPLAY_NAME_INDEX, Photo};
use crate::errors::{GalleryError, GalleryResult};
use crate::extension::index::{METADATA_CREATION_TIMESTAMP, METADATA_NAME};
use crate::extension::{Comparator, Order, Sort};

use super::comparators::{create_time_comparator, display_name_comparator, reversed};

/// Sort keys a photo listing may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoSorter {
    DisplayName,
    CreateTime,
}

impl PhotoSorter {
    pub const ALL: [PhotoSorter; 2] = [PhotoSorter::DisplayName, PhotoSorter::CreateTime];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoSorter::DisplayName => "DISPLAY_NAME",
            PhotoSorter::CreateTime => "CREATE_TIME",
        }
    }

    /// Lenient lookup used by query parsing: anything unknown means no sorter.
    pub fn convert_from(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        Self::ALL
            .into_iter()
            .find(|sorter| sorter.as_str().eq_ignore_ascii_case(raw))
    }

    /// Strict resolution: a missing sort key falls back to creation time, an
    /// unknown one is rejected. Used for sort keys that come from theme
    /// configuration rather than from a request.
    pub fn resolve(raw: Option<&str>, ascending: Option<bool>) -> GalleryResult<Comparator<Photo>> {
        let sorter = match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(raw.parse::<PhotoSorter>()?),
            None => None,
        };
        Ok(Self::comparator(sorter, ascending))
    }

    /// Every branch ends with the name so the order is total. Only an explicit
    /// `false` flips a requested sorter to descending.
    pub fn comparator(sorter: Option<PhotoSorter>, ascending: Option<bool>) -> Comparator<Photo> {
        let Some(sorter) = sorter else {
            return create_time_comparator();
        };
        let comparator = match sorter {
            PhotoSorter::CreateTime => create_time_comparator(),
            PhotoSorter::DisplayName => display_name_comparator(),
        };
        if ascending == Some(false) {
            reversed(comparator)
        } else {
            comparator
        }
    }

    /// The same ordering expressed as index sort keys.
    pub fn to_sort(sorter: Option<PhotoSorter>, ascending: Option<bool>) -> Sort {
        let Some(sorter) = sorter else {
            return Sort::by(Order::asc(METADATA_CREATION_TIMESTAMP)).then(Order::asc(METADATA_NAME));
        };
        let sort = match sorter {
            PhotoSorter::CreateTime => Sort::by(Order::asc(METADATA_CREATION_TIMESTAMP)),
            PhotoSorter::DisplayName => Sort::by(Order::asc(DISPLAY_NAME_INDEX)),
        }
        .then(Order::asc(METADATA_NAME));
        if ascending == Some(false) {
            sort.reversed()
        } else {
            sort
        }
    }
}

impl FromStr for PhotoSorter {
    type Err = GalleryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::convert_from(Some(raw)).ok_or_else(|| GalleryError::UnsupportedSort(raw.to_string()))
    }
}

impl fmt::Display for PhotoSorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
