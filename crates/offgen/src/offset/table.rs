use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Offsets of a single namespace, keyed by raw offset name
pub type NamespaceOffsets = IndexMap<String, String>;

/// One `namespace::name = value` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetRecord<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
    /// Hex literal exactly as written in the header (e.g. `0x00A8`)
    pub value: &'a str,
}

/// Ordered namespace → name → value mapping
///
/// Both levels keep insertion order. Overwriting an existing key keeps its
/// original position, so output ordering follows first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OffsetTable {
    namespaces: IndexMap<String, NamespaceOffsets>,
}

impl OffsetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `namespace` exists, creating an empty entry if needed
    pub fn ensure_namespace(&mut self, namespace: &str) -> &mut NamespaceOffsets {
        self.namespaces.entry(namespace.to_string()).or_default()
    }

    /// Insert or overwrite a single offset
    pub fn insert(&mut self, namespace: &str, name: &str, value: &str) {
        self.ensure_namespace(namespace)
            .insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)
            .and_then(|offsets| offsets.get(name))
            .map(String::as_str)
    }

    pub fn namespace(&self, namespace: &str) -> Option<&NamespaceOffsets> {
        self.namespaces.get(namespace)
    }

    /// Iterate namespaces with their offsets in insertion order
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &NamespaceOffsets)> {
        self.namespaces
            .iter()
            .map(|(namespace, offsets)| (namespace.as_str(), offsets))
    }

    /// Iterate every offset as a flat record
    pub fn records(&self) -> impl Iterator<Item = OffsetRecord<'_>> {
        self.namespaces.iter().flat_map(|(namespace, offsets)| {
            offsets.iter().map(move |(name, value)| OffsetRecord {
                namespace,
                name,
                value,
            })
        })
    }

    /// Number of namespaces
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Total number of offsets across all namespaces
    pub fn offset_count(&self) -> usize {
        self.namespaces.values().map(|offsets| offsets.len()).sum()
    }

    /// Drop namespaces without any offsets
    pub fn prune_empty(&mut self) {
        self.namespaces.retain(|_, offsets| !offsets.is_empty());
    }

    /// Merge `other` into this table; values from `other` win on conflicts
    pub fn merge(&mut self, other: OffsetTable) {
        for (namespace, offsets) in other.namespaces {
            self.namespaces
                .entry(namespace)
                .or_default()
                .extend(offsets);
        }
    }
}

/// Fold per-file tables into one, later tables overriding earlier ones
pub fn aggregate<I>(tables: I) -> OffsetTable
where
    I: IntoIterator<Item = OffsetTable>,
{
    tables.into_iter().fold(OffsetTable::new(), |mut acc, table| {
        acc.merge(table);
        acc
    })
}
