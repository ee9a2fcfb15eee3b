//! Validation utilities for group and member construction

use crate::types::{LedgerError, LedgerResult};

/// Smallest group that makes sense for splitting bills
pub const MIN_GROUP_MEMBERS: usize = 2;

/// Validate that a group name is usable
pub fn validate_group_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "group name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(LedgerError::Validation(
            "group name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a member display name is usable
pub fn validate_member_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "member name cannot be empty".to_string(),
        ));
    }

    if name.len() > 50 {
        return Err(LedgerError::Validation(
            "member name cannot exceed 50 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a group is being created with enough members
pub fn validate_member_count(count: usize) -> LedgerResult<()> {
    if count < MIN_GROUP_MEMBERS {
        return Err(LedgerError::Validation(format!(
            "a group needs at least {MIN_GROUP_MEMBERS} members, got {count}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(validate_group_name("  ").is_err());
        assert!(validate_member_name("").is_err());
        assert!(validate_group_name("Ski trip 2026").is_ok());
        assert!(validate_member_name("ana").is_ok());
    }

    #[test]
    fn overlong_names_are_rejected() {
        assert!(validate_group_name(&"g".repeat(101)).is_err());
        assert!(validate_member_name(&"m".repeat(51)).is_err());
    }

    #[test]
    fn member_count_floor_is_two() {
        assert!(validate_member_count(0).is_err());
        assert!(validate_member_count(1).is_err());
        assert!(validate_member_count(2).is_ok());
    }
}
