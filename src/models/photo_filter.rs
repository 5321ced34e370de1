use std::sync::Arc;

use crate::entities::photo::{DISPLAY_NAME_INDEX, GROUP_NAME_INDEX, Photo};
use crate::errors::GalleryResult;
use crate::extension::{Extension, LabelSelector, ListOptions, Predicate, Query, Sort, query_engine};

use super::photo_query::PhotoQuery;

/// Photo filter clauses, all ANDed; a missing clause matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoFilter {
    pub keyword: Option<String>,
    pub group: Option<String>,
    pub selectors: ListOptions,
}

impl PhotoFilter {
    pub fn from_query(query: &PhotoQuery) -> GalleryResult<Self> {
        Ok(Self {
            keyword: query.keyword.clone(),
            group: query.group.clone(),
            selectors: ListOptions::from_selectors(
                &query.list.label_selector,
                &query.list.field_selector,
            )?,
        })
    }

    pub fn by_group(group: Option<&str>) -> Self {
        Self {
            group: group
                .filter(|group| !group.trim().is_empty())
                .map(str::to_string),
            ..Self::default()
        }
    }

    /// Index-backed form for `list_by`.
    pub fn to_list_options(&self) -> ListOptions {
        let mut options = self.selectors.clone();
        if let Some(keyword) = &self.keyword {
            options = options.and_query(Query::contains(DISPLAY_NAME_INDEX, keyword.as_str()));
        }
        if let Some(group) = &self.group {
            options = options.and_query(Query::equal(GROUP_NAME_INDEX, group.as_str()));
        }
        options
    }

    /// In-process form for `list`; a pure function of one photo.
    pub fn to_predicate(&self) -> GalleryResult<Predicate<Photo>> {
        let indexes = Photo::indexes();
        query_engine::validate(&self.selectors, &Sort::unsorted(), &indexes)?;

        let keyword = self.keyword.as_ref().map(|keyword| keyword.to_lowercase());
        let group = self.group.clone();
        let labels: LabelSelector = self.selectors.label_selector.clone();
        let fields = self.selectors.field_query.clone();

        Ok(Arc::new(move |photo: &Photo| {
            let keyword_matches = keyword.as_ref().is_none_or(|keyword| {
                photo
                    .spec
                    .display_name
                    .as_ref()
                    .is_some_and(|name| name.to_lowercase().contains(keyword.as_str()))
            });
            let group_matches = group.as_ref().is_none_or(|group| photo.belongs_to(group));
            keyword_matches
                && group_matches
                && labels.matches(&photo.metadata.labels)
                && query_engine::evaluate(&fields, photo, &indexes)
        }))
    }
}
