use super::selector::{LabelSelector, parse_field_selector};
use super::StoreError;

/// Field query understood by every store, evaluated against indexed fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Query {
    #[default]
    All,
    Equal { field: String, value: String },
    NotEqual { field: String, value: String },
    /// Case-insensitive substring match.
    Contains { field: String, value: String },
    And(Vec<Query>),
}

impl Query {
    pub fn equal(field: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Equal {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn not_equal(field: impl Into<String>, value: impl Into<String>) -> Self {
        Query::NotEqual {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn and(self, other: Query) -> Query {
        match (self, other) {
            (Query::All, other) => other,
            (query, Query::All) => query,
            (Query::And(mut left), Query::And(right)) => {
                left.extend(right);
                Query::And(left)
            }
            (Query::And(mut left), right) => {
                left.push(right);
                Query::And(left)
            }
            (left, right) => Query::And(vec![left, right]),
        }
    }

    /// Every field name the query touches.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Query::All => Vec::new(),
            Query::Equal { field, .. }
            | Query::NotEqual { field, .. }
            | Query::Contains { field, .. } => vec![field.as_str()],
            Query::And(queries) => queries.iter().flat_map(Query::fields).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub label_selector: LabelSelector,
    pub field_query: Query,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates raw `labelSelector` / `fieldSelector` parameters.
    pub fn from_selectors(
        label_selectors: &[String],
        field_selectors: &[String],
    ) -> Result<Self, StoreError> {
        let mut options = ListOptions::new();
        for raw in label_selectors {
            options = options.with_label_selector(LabelSelector::parse(raw)?);
        }
        for raw in field_selectors {
            options = options.and_query(parse_field_selector(raw)?);
        }
        Ok(options)
    }

    pub fn and_query(mut self, query: Query) -> Self {
        self.field_query = std::mem::take(&mut self.field_query).and(query);
        self
    }

    pub fn with_label_selector(mut self, selector: LabelSelector) -> Self {
        self.label_selector = self.label_selector.and(selector);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub property: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            property: self.property.clone(),
            direction: match self.direction {
                Direction::Asc => Direction::Desc,
                Direction::Desc => Direction::Asc,
            },
        }
    }
}

/// Ordered list of index-backed sort keys; absent keys sort low.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
    pub orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(order: Order) -> Self {
        Self {
            orders: vec![order],
        }
    }

    pub fn then(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    pub fn reversed(&self) -> Self {
        Self {
            orders: self.orders.iter().map(Order::reversed).collect(),
        }
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    /// Zero means unpaged.
    pub size: usize,
    pub sort: Sort,
}

impl PageRequest {
    pub fn of(page: usize, size: usize) -> Self {
        Self {
            page: page.max(1),
            size,
            sort: Sort::unsorted(),
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }
}
