use serde::Serialize;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupVersionKind {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
    pub plural: &'static str,
    pub singular: &'static str,
}

impl GroupVersionKind {
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }
}

/// A registered kind together with the names of its indexed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub gvk: GroupVersionKind,
    pub indexed_fields: Vec<&'static str>,
}

impl Scheme {
    pub fn new(gvk: GroupVersionKind, indexed_fields: Vec<&'static str>) -> Self {
        Self {
            gvk,
            indexed_fields,
        }
    }
}

#[derive(Debug, Default)]
pub struct SchemeManager {
    schemes: RwLock<Vec<Scheme>>,
}

impl SchemeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, scheme: Scheme) {
        let mut schemes = self.schemes.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = schemes.iter_mut().find(|s| s.gvk.kind == scheme.gvk.kind) {
            *existing = scheme;
            return;
        }
        log::debug!("Registering scheme {}", scheme.gvk.kind);
        schemes.push(scheme);
    }

    pub fn unregister(&self, kind: &str) -> Option<Scheme> {
        let mut schemes = self.schemes.write().unwrap_or_else(PoisonError::into_inner);
        let position = schemes.iter().position(|s| s.gvk.kind == kind)?;
        log::debug!("Unregistering scheme {}", kind);
        Some(schemes.remove(position))
    }

    pub fn get(&self, kind: &str) -> Option<Scheme> {
        self.schemes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|s| s.gvk.kind == kind)
            .cloned()
    }

    pub fn get_by_plural(&self, plural: &str) -> Option<Scheme> {
        self.schemes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|s| s.gvk.plural == plural)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.schemes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
