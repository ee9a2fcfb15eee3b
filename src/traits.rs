//! Traits for storage abstraction

use async_trait::async_trait;

use crate::ledger::LedgerEngine;
use crate::types::*;

/// A group together with its full record list, as loaded from storage.
///
/// This is the unit the read boundary hands over: enough to build a
/// [`LedgerEngine`] that owns the group's state for the interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSnapshot {
    pub group: Group,
    pub records: Vec<Record>,
}

impl GroupSnapshot {
    /// Build a validated engine from this snapshot
    pub fn into_engine(self) -> LedgerResult<LedgerEngine> {
        LedgerEngine::new(self.group, self.records)
    }
}

/// Storage abstraction for groups and their records.
///
/// The engine itself never touches storage; an embedding layer loads a
/// [`GroupSnapshot`], mutates the engine, and persists the result. Engine
/// mutation and persistence form one logical transaction: if persistence
/// fails, the caller must discard the in-memory mutation (rebuild the
/// engine from the last good snapshot).
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Save a group (creating it if new, updating the member list otherwise)
    async fn save_group(&mut self, group: &Group) -> LedgerResult<()>;

    /// Load a group and all of its records, in insertion order
    async fn load_group(&self, group_id: &str) -> LedgerResult<Option<GroupSnapshot>>;

    /// List all known groups
    async fn list_groups(&self) -> LedgerResult<Vec<Group>>;

    /// Append a record to its group's ledger
    async fn save_record(&mut self, record: &Record) -> LedgerResult<()>;

    /// Delete a record from a group's ledger
    async fn delete_record(&mut self, group_id: &str, record_id: &str) -> LedgerResult<()>;
}
