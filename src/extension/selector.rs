use std::collections::BTreeMap;

use super::list_options::Query;
use super::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelRequirement {
    Equals { key: String, value: String },
    NotEquals { key: String, value: String },
    Exists(String),
    NotExists(String),
}

impl LabelRequirement {
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        match self {
            LabelRequirement::Equals { key, value } => labels.get(key) == Some(value),
            LabelRequirement::NotEquals { key, value } => labels.get(key) != Some(value),
            LabelRequirement::Exists(key) => labels.contains_key(key),
            LabelRequirement::NotExists(key) => !labels.contains_key(key),
        }
    }
}

/// Conjunction of label requirements; empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelector {
    pub requirements: Vec<LabelRequirement>,
}

impl LabelSelector {
    /// Parses `a=b,c!=d,e,!f`.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let mut requirements = Vec::new();
        for term in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            requirements.push(parse_label_term(term)?);
        }
        Ok(Self { requirements })
    }

    pub fn and(mut self, other: LabelSelector) -> Self {
        self.requirements.extend(other.requirements);
        self
    }

    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.requirements.iter().all(|r| r.matches(labels))
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

fn parse_label_term(term: &str) -> Result<LabelRequirement, StoreError> {
    if let Some((key, value)) = term.split_once("!=") {
        return Ok(LabelRequirement::NotEquals {
            key: non_empty_key(key, term)?,
            value: value.trim().to_string(),
        });
    }
    if let Some((key, value)) = term.split_once("==").or_else(|| term.split_once('=')) {
        return Ok(LabelRequirement::Equals {
            key: non_empty_key(key, term)?,
            value: value.trim().to_string(),
        });
    }
    if let Some(key) = term.strip_prefix('!') {
        return Ok(LabelRequirement::NotExists(non_empty_key(key, term)?));
    }
    Ok(LabelRequirement::Exists(non_empty_key(term, term)?))
}

fn non_empty_key(key: &str, term: &str) -> Result<String, StoreError> {
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(StoreError::InvalidSelector(term.to_string()));
    }
    Ok(key.to_string())
}

/// Parses `spec.groupName=a,metadata.name!=b` into an AND of field queries.
pub fn parse_field_selector(raw: &str) -> Result<Query, StoreError> {
    let mut query = Query::All;
    for term in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let clause = if let Some((field, value)) = term.split_once("!=") {
            Query::not_equal(non_empty_key(field, term)?, value.trim())
        } else if let Some((field, value)) =
            term.split_once("==").or_else(|| term.split_once('='))
        {
            Query::equal(non_empty_key(field, term)?, value.trim())
        } else {
            return Err(StoreError::InvalidSelector(term.to_string()));
        };
        query = query.and(clause);
    }
    Ok(query)
}
