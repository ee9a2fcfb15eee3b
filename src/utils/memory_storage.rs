//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory [`GroupStore`] implementation for testing and development.
///
/// Records are kept per group in insertion order, matching the ordering
/// contract a snapshot consumer expects.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    groups: Arc<RwLock<HashMap<String, Group>>>,
    records: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            groups: Arc::new(RwLock::new(HashMap::new())),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.groups.write().unwrap().clear();
        self.records.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupStore for MemoryStore {
    async fn save_group(&mut self, group: &Group) -> LedgerResult<()> {
        self.groups
            .write()
            .unwrap()
            .insert(group.id.clone(), group.clone());
        self.records
            .write()
            .unwrap()
            .entry(group.id.clone())
            .or_default();
        Ok(())
    }

    async fn load_group(&self, group_id: &str) -> LedgerResult<Option<GroupSnapshot>> {
        let group = match self.groups.read().unwrap().get(group_id) {
            Some(group) => group.clone(),
            None => return Ok(None),
        };
        let records = self
            .records
            .read()
            .unwrap()
            .get(group_id)
            .cloned()
            .unwrap_or_default();
        Ok(Some(GroupSnapshot { group, records }))
    }

    async fn list_groups(&self) -> LedgerResult<Vec<Group>> {
        Ok(self.groups.read().unwrap().values().cloned().collect())
    }

    async fn save_record(&mut self, record: &Record) -> LedgerResult<()> {
        if !self.groups.read().unwrap().contains_key(&record.group_id) {
            return Err(LedgerError::Storage(format!(
                "group not found: {}",
                record.group_id
            )));
        }
        self.records
            .write()
            .unwrap()
            .entry(record.group_id.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn delete_record(&mut self, group_id: &str, record_id: &str) -> LedgerResult<()> {
        let mut records = self.records.write().unwrap();
        let group_records = records
            .get_mut(group_id)
            .ok_or_else(|| LedgerError::Storage(format!("group not found: {group_id}")))?;

        let before = group_records.len();
        group_records.retain(|record| record.id != record_id);
        if group_records.len() == before {
            return Err(LedgerError::RecordNotFound(record_id.to_string()));
        }
        Ok(())
    }
}
