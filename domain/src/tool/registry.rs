//! Immutable tool registry

use super::entities::ToolEntry;
use std::collections::HashMap;

/// Insertion-ordered collection of [`ToolEntry`] values keyed by tool key.
///
/// Built with the `register` builder and never mutated afterwards. Lookups
/// of unknown keys return `None`; callers turn that into a
/// `ToolUnavailable` outcome rather than a crash.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool (builder pattern).
    ///
    /// Re-registering an existing key replaces the entry but keeps its
    /// original position.
    pub fn register(mut self, entry: ToolEntry) -> Self {
        match self.index.get(&entry.key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ToolEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
