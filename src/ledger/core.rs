//! The ledger engine: owns a group's records and validates every mutation

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::money::MinorUnits;
use crate::types::*;

/// In-memory ledger for a single group.
///
/// The engine is the single source of truth for record validity and
/// derived views (balances, totals, monthly grouping). It is fully
/// synchronous and performs no I/O or internal locking; callers embedding
/// it in a concurrent environment must serialize mutations per group.
pub struct LedgerEngine {
    group: Group,
    records: HashMap<String, Record>,
    /// Record ids in chronological insertion order
    order: Vec<String>,
    total_expenses: MinorUnits,
}

impl LedgerEngine {
    /// Build an engine from a group and its full record list.
    ///
    /// Every supplied record is validated defensively: it must satisfy the
    /// same invariants as a freshly added record, belong to this group,
    /// and carry a unique id. Any violation fails construction with
    /// [`LedgerError::InvalidRecord`]. Record order is preserved as given.
    pub fn new(group: Group, records: Vec<Record>) -> LedgerResult<Self> {
        let mut engine = Self {
            group,
            records: HashMap::with_capacity(records.len()),
            order: Vec::with_capacity(records.len()),
            total_expenses: 0,
        };

        for record in records {
            engine.check_existing(&record)?;
            if record.kind == RecordKind::Expense {
                engine.total_expenses += record.amount;
            }
            engine.order.push(record.id.clone());
            engine.records.insert(record.id.clone(), record);
        }

        Ok(engine)
    }

    /// Validate and append a new record.
    ///
    /// Validation failures leave the ledger untouched; on success the
    /// record gets a fresh id and a current-instant timestamp, and the
    /// cached expense total grows by the amount iff the record is an
    /// expense (settlements never count toward total spend).
    pub fn add_record(&mut self, draft: RecordDraft) -> LedgerResult<Record> {
        self.check_draft(
            draft.kind,
            &draft.description,
            draft.amount,
            &draft.payer,
            &draft.split_between,
        )?;

        let record = Record {
            id: Uuid::new_v4().to_string(),
            group_id: self.group.id.clone(),
            kind: draft.kind,
            description: draft.description,
            amount: draft.amount,
            payer: draft.payer,
            split_between: draft.split_between,
            created_at: Utc::now(),
        };

        if record.kind == RecordKind::Expense {
            self.total_expenses += record.amount;
        }
        self.order.push(record.id.clone());
        self.records.insert(record.id.clone(), record.clone());

        Ok(record)
    }

    /// Remove a record by id, returning it for caller confirmation/undo.
    ///
    /// Fails with [`LedgerError::RecordNotFound`] if the id is not in this
    /// group's ledger. Removing an expense shrinks the cached total.
    pub fn remove_record(&mut self, id: &str) -> LedgerResult<Record> {
        let record = self
            .records
            .remove(id)
            .ok_or_else(|| LedgerError::RecordNotFound(id.to_string()))?;
        self.order.retain(|record_id| record_id != id);
        if record.kind == RecordKind::Expense {
            self.total_expenses -= record.amount;
        }
        Ok(record)
    }

    /// Get a record by id
    pub fn get_record(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Get a record by id, returning an error if not found
    pub fn get_record_required(&self, id: &str) -> LedgerResult<&Record> {
        self.get_record(id)
            .ok_or_else(|| LedgerError::RecordNotFound(id.to_string()))
    }

    /// All records in chronological insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Number of records in the ledger
    pub fn record_count(&self) -> usize {
        self.order.len()
    }

    /// Sum of all expense amounts in minor units; settlements excluded
    pub fn total_expenses(&self) -> MinorUnits {
        self.total_expenses
    }

    /// The group this ledger belongs to
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Register a new member on the underlying group
    pub fn add_member(&mut self, name: String) -> LedgerResult<Member> {
        self.group.add_member(name)
    }

    /// Validate a draft against the group, in the contract's fixed order.
    fn check_draft(
        &self,
        kind: RecordKind,
        description: &str,
        amount: MinorUnits,
        payer: &str,
        split_between: &[String],
    ) -> LedgerResult<()> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if kind == RecordKind::Expense && description.trim().is_empty() {
            return Err(LedgerError::MissingDescription);
        }
        if !self.group.has_member(payer) {
            return Err(LedgerError::UnknownMember(payer.to_string()));
        }
        if split_between.is_empty() {
            return Err(LedgerError::EmptySplit);
        }
        for name in split_between {
            if !self.group.has_member(name) {
                return Err(LedgerError::UnknownMember(name.clone()));
            }
        }
        if kind == RecordKind::Settlement && split_between.len() != 1 {
            return Err(LedgerError::InvalidSettlement(split_between.len()));
        }
        Ok(())
    }

    /// Validate an externally supplied record at construction time.
    fn check_existing(&self, record: &Record) -> LedgerResult<()> {
        if record.group_id != self.group.id {
            return Err(LedgerError::InvalidRecord {
                id: record.id.clone(),
                reason: format!(
                    "record belongs to group '{}', not '{}'",
                    record.group_id, self.group.id
                ),
            });
        }
        if self.records.contains_key(&record.id) {
            return Err(LedgerError::InvalidRecord {
                id: record.id.clone(),
                reason: "duplicate record id".to_string(),
            });
        }
        self.check_draft(
            record.kind,
            &record.description,
            record.amount,
            &record.payer,
            &record.split_between,
        )
        .map_err(|source| LedgerError::InvalidRecord {
            id: record.id.clone(),
            reason: source.to_string(),
        })
    }
}
