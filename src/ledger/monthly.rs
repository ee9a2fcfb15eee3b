//! Month-bucketed view of the ledger

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::ledger::core::LedgerEngine;
use crate::types::Record;

/// A record's creation timestamp truncated to (year, month).
///
/// Ordering is plain chronological integer ordering, so month keys sort
/// correctly regardless of any localized month-name formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Truncate a timestamp to its (year, month) bucket
    pub fn from_timestamp(timestamp: &DateTime<Utc>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Iterator over (month, records) buckets, most recent month first.
///
/// Returned by [`LedgerEngine::group_by_month`]; each call produces a
/// fresh, restartable projection of the current ledger state.
pub struct MonthlyView<'a> {
    buckets: std::vec::IntoIter<(MonthKey, Vec<&'a Record>)>,
}

impl<'a> Iterator for MonthlyView<'a> {
    type Item = (MonthKey, Vec<&'a Record>);

    fn next(&mut self) -> Option<Self::Item> {
        self.buckets.next()
    }
}

impl LedgerEngine {
    /// Bucket all records by creation month.
    ///
    /// Months come out in descending chronological order; within a month,
    /// records keep their original insertion order. Pure projection with
    /// no side effects.
    pub fn group_by_month(&self) -> MonthlyView<'_> {
        let mut buckets: BTreeMap<MonthKey, Vec<&Record>> = BTreeMap::new();
        for record in self.records() {
            buckets
                .entry(MonthKey::from_timestamp(&record.created_at))
                .or_default()
                .push(record);
        }

        let mut ordered: Vec<(MonthKey, Vec<&Record>)> = buckets.into_iter().collect();
        ordered.reverse();
        MonthlyView {
            buckets: ordered.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Group, Record, RecordKind};
    use chrono::TimeZone;

    fn record_at(group_id: &str, id: &str, year: i32, month: u32, day: u32) -> Record {
        Record {
            id: id.to_string(),
            group_id: group_id.to_string(),
            kind: RecordKind::Expense,
            description: format!("expense {id}"),
            amount: 1000,
            payer: "ana".to_string(),
            split_between: vec!["ana".to_string(), "bo".to_string()],
            created_at: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
        }
    }

    fn engine_with_three_months() -> LedgerEngine {
        let group = Group::new(
            "Flat".to_string(),
            vec!["ana".to_string(), "bo".to_string()],
        )
        .unwrap();
        let records = vec![
            record_at(&group.id, "jan-1", 2024, 1, 3),
            record_at(&group.id, "jan-2", 2024, 1, 20),
            record_at(&group.id, "mar-1", 2024, 3, 5),
            record_at(&group.id, "dec-1", 2023, 12, 31),
        ];
        LedgerEngine::new(group, records).unwrap()
    }

    #[test]
    fn months_descend_chronologically() {
        let engine = engine_with_three_months();

        let keys: Vec<MonthKey> = engine.group_by_month().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                MonthKey {
                    year: 2024,
                    month: 3
                },
                MonthKey {
                    year: 2024,
                    month: 1
                },
                MonthKey {
                    year: 2023,
                    month: 12
                },
            ]
        );
    }

    #[test]
    fn records_within_a_month_keep_insertion_order() {
        let engine = engine_with_three_months();

        let buckets: Vec<(MonthKey, Vec<&Record>)> = engine.group_by_month().collect();
        let january = &buckets[1].1;
        let ids: Vec<&str> = january.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["jan-1", "jan-2"]);
    }

    #[test]
    fn projection_is_idempotent() {
        let engine = engine_with_three_months();

        let first: Vec<(MonthKey, Vec<String>)> = engine
            .group_by_month()
            .map(|(key, records)| (key, records.iter().map(|r| r.id.clone()).collect()))
            .collect();
        let second: Vec<(MonthKey, Vec<String>)> = engine
            .group_by_month()
            .map(|(key, records)| (key, records.iter().map(|r| r.id.clone()).collect()))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn buckets_cover_the_full_record_set() {
        let engine = engine_with_three_months();

        let mut bucketed: Vec<String> = engine
            .group_by_month()
            .flat_map(|(_, records)| records.into_iter().map(|r| r.id.clone()))
            .collect();
        bucketed.sort();

        let mut all: Vec<String> = engine.records().map(|r| r.id.clone()).collect();
        all.sort();

        assert_eq!(bucketed, all);
        assert_eq!(bucketed.len(), 4);
    }

    #[test]
    fn month_key_displays_as_year_dash_month() {
        let key = MonthKey {
            year: 2024,
            month: 3,
        };
        assert_eq!(key.to_string(), "2024-03");
    }
}
