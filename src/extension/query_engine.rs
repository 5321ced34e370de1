use std::cmp::Ordering;

use super::client::StoreResult;
use super::index::{IndexSpec, find_index};
use super::list_options::{Direction, ListOptions, Query, Sort};
use super::{Extension, StoreError};

/// Rejects options that reference fields the kind does not index.
pub fn validate<E>(options: &ListOptions, sort: &Sort, indexes: &[IndexSpec<E>]) -> StoreResult<()> {
    let sort_fields = sort.orders.iter().map(|order| order.property.as_str());
    for field in options.field_query.fields().into_iter().chain(sort_fields) {
        if find_index(indexes, field).is_none() {
            return Err(StoreError::UnknownField(field.to_string()));
        }
    }
    Ok(())
}

pub fn matches<E: Extension>(options: &ListOptions, extension: &E, indexes: &[IndexSpec<E>]) -> bool {
    options.label_selector.matches(&extension.metadata().labels)
        && evaluate(&options.field_query, extension, indexes)
}

pub fn evaluate<E: Extension>(query: &Query, extension: &E, indexes: &[IndexSpec<E>]) -> bool {
    let key = |field: &str| find_index(indexes, field).and_then(|index| index.key_of(extension));
    match query {
        Query::All => true,
        Query::Equal { field, value } => key(field).is_some_and(|k| k.matches(value)),
        Query::NotEqual { field, value } => !key(field).is_some_and(|k| k.matches(value)),
        Query::Contains { field, value } => {
            key(field).is_some_and(|k| k.contains_ignore_case(value))
        }
        Query::And(queries) => queries.iter().all(|q| evaluate(q, extension, indexes)),
    }
}

/// Orders by the sort keys, falling back to the name so no two extensions
/// compare equal.
pub fn compare<E: Extension>(sort: &Sort, left: &E, right: &E, indexes: &[IndexSpec<E>]) -> Ordering {
    for order in &sort.orders {
        let Some(index) = find_index(indexes, &order.property) else {
            continue;
        };
        let ordering = index.key_of(left).cmp(&index.key_of(right));
        let ordering = match order.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.name().cmp(right.name())
}

pub fn select<E, I>(
    items: I,
    options: &ListOptions,
    sort: &Sort,
    indexes: &[IndexSpec<E>],
) -> StoreResult<Vec<E>>
where
    E: Extension,
    I: IntoIterator<Item = E>,
{
    validate(options, sort, indexes)?;
    let mut selected: Vec<E> = items
        .into_iter()
        .filter(|extension| matches(options, extension, indexes))
        .collect();
    selected.sort_by(|a, b| compare(sort, a, b, indexes));
    Ok(selected)
}
