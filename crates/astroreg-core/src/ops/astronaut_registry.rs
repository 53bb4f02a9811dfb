use std::collections::HashMap;

use crate::errors::{AgencyError, Result};
use crate::model::Astronaut;

/// Append-only collection of astronaut records
///
/// Records are kept in insertion order. The index maps each identifier to the
/// position of the first record registered under it, so lookups stay O(1)
/// and keep first-match semantics when duplicates were accepted.
/// Not thread-safe; the agency is driven by a single command loop.
#[derive(Debug, Clone, Default)]
pub struct AstronautRegistry {
    records: Vec<Astronaut>,
    index: HashMap<String, usize>,
}

impl AstronautRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an astronaut record
    ///
    /// Performs no uniqueness check; that decision belongs to the
    /// duplicate-key policy applied by the coordinator.
    pub fn register(&mut self, astronaut: Astronaut) {
        let position = self.records.len();
        self.index.entry(astronaut.id.clone()).or_insert(position);
        self.records.push(astronaut);
    }

    /// Get the first astronaut registered under `id`
    ///
    /// # Errors
    ///
    /// Returns `AstronautNotFound` if no record has that identifier.
    pub fn find(&self, id: &str) -> Result<&Astronaut> {
        let position = self.position(id)?;
        Ok(&self.records[position])
    }

    /// Get a mutable reference to the first astronaut registered under `id`
    ///
    /// # Errors
    ///
    /// Returns `AstronautNotFound` if no record has that identifier.
    pub fn find_mut(&mut self, id: &str) -> Result<&mut Astronaut> {
        let position = self.position(id)?;
        Ok(&mut self.records[position])
    }

    /// Position of the first record registered under `id`
    ///
    /// # Errors
    ///
    /// Returns `AstronautNotFound` if no record has that identifier.
    pub(crate) fn position(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| AgencyError::AstronautNotFound {
                astronaut_id: id.to_string(),
            })
    }

    /// Record at a position previously returned by `position`
    pub(crate) fn at_mut(&mut self, position: usize) -> &mut Astronaut {
        &mut self.records[position]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Astronaut] {
        &self.records
    }

    /// Deceased astronauts in insertion order, each with its full flight history
    pub fn list_deceased(&self) -> Vec<&Astronaut> {
        self.records.iter().filter(|a| a.deceased).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
