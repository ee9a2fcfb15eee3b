//! Core types and data structures for the split ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::MinorUnits;
use crate::utils::validation::{validate_group_name, validate_member_count, validate_member_name};

/// Kind of ledger record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A real cost paid by one member and shared across the split set
    Expense,
    /// A balance-clearing payment from the payer to a single recipient
    Settlement,
}

/// A participant in a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier for the member
    pub id: String,
    /// Display name, unique within the owning group (case-sensitive)
    pub name: String,
    /// When the member was registered
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member with a fresh identifier
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: Utc::now(),
        }
    }
}

/// A named collection of members sharing expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique identifier for the group
    pub id: String,
    /// Human-readable group name
    pub name: String,
    /// Members in registration order (insertion order = display order)
    pub members: Vec<Member>,
    /// When the group was created
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Create a new group with the given member names.
    ///
    /// Fails with [`LedgerError::Validation`] if the group name is empty,
    /// fewer than two member names are supplied, or any member name is
    /// empty or duplicated (names are compared case-sensitively).
    pub fn new(name: String, member_names: Vec<String>) -> LedgerResult<Self> {
        validate_group_name(&name)?;
        validate_member_count(member_names.len())?;

        let mut group = Self {
            id: Uuid::new_v4().to_string(),
            name,
            members: Vec::with_capacity(member_names.len()),
            created_at: Utc::now(),
        };
        for member_name in member_names {
            group.add_member(member_name)?;
        }
        Ok(group)
    }

    /// Register a new member. Members are never removed once registered.
    pub fn add_member(&mut self, name: String) -> LedgerResult<Member> {
        validate_member_name(&name)?;
        if self.has_member(&name) {
            return Err(LedgerError::Validation(format!(
                "member '{}' already exists in group '{}'",
                name, self.name
            )));
        }
        let member = Member::new(name);
        self.members.push(member.clone());
        Ok(member)
    }

    /// Whether a member with this display name belongs to the group
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }

    /// Member display names in registration order
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }
}

/// A single ledger record: an expense or a settlement.
///
/// Serializes to the external wire shape: camelCase field names, the
/// amount as `amountMinorUnits`, and `kind` as `"expense"`/`"settlement"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier for the record
    pub id: String,
    /// Identifier of the owning group
    pub group_id: String,
    /// Whether this is a real cost or a balance-clearing payment
    pub kind: RecordKind,
    /// What the money was spent on (required for expenses, blank for settlements)
    pub description: String,
    /// Amount in integer minor currency units (e.g. cents); always positive
    #[serde(rename = "amountMinorUnits")]
    pub amount: MinorUnits,
    /// Display name of the member who paid
    pub payer: String,
    /// Members sharing the cost; exactly one entry (the recipient) for settlements
    pub split_between: Vec<String>,
    /// When the record was created; drives chronological ordering and month bucketing
    pub created_at: DateTime<Utc>,
}

/// Input shape for [`crate::LedgerEngine::add_record`]: everything the
/// caller supplies, before the engine assigns an id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub kind: RecordKind,
    pub description: String,
    #[serde(rename = "amountMinorUnits")]
    pub amount: MinorUnits,
    pub payer: String,
    pub split_between: Vec<String>,
}

impl RecordDraft {
    /// Draft a shared expense
    pub fn expense(
        description: String,
        amount: MinorUnits,
        payer: String,
        split_between: Vec<String>,
    ) -> Self {
        Self {
            kind: RecordKind::Expense,
            description,
            amount,
            payer,
            split_between,
        }
    }

    /// Draft a settlement payment from `payer` to `recipient`
    pub fn settlement(amount: MinorUnits, payer: String, recipient: String) -> Self {
        Self {
            kind: RecordKind::Settlement,
            description: String::new(),
            amount,
            payer,
            split_between: vec![recipient],
        }
    }
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("invalid amount: {0} minor units (amounts must be positive)")]
    InvalidAmount(MinorUnits),
    #[error("expense records require a non-empty description")]
    MissingDescription,
    #[error("unknown member: {0}")]
    UnknownMember(String),
    #[error("split set cannot be empty")]
    EmptySplit,
    #[error("settlement must have exactly one recipient, got {0}")]
    InvalidSettlement(usize),
    #[error("record not found: {0}")]
    RecordNotFound(String),
    #[error("invalid record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
