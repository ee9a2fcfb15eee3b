//! Balance aggregation and settlement suggestions

use std::collections::HashMap;

use serde::Serialize;

use crate::ledger::core::LedgerEngine;
use crate::money::{split_evenly, MinorUnits};
use crate::types::RecordKind;

/// A suggested payment that moves one member's debt to one creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Member who should pay
    pub payer: String,
    /// Member who should receive the money
    pub receiver: String,
    /// Amount in minor units
    #[serde(rename = "amountMinorUnits")]
    pub amount: MinorUnits,
}

impl LedgerEngine {
    /// Net position of every member in minor units: positive means the
    /// member is owed money, negative means they owe.
    ///
    /// Each expense credits its payer with the full amount and debits
    /// every split member its exact share (remainders go to the leading
    /// split members, one minor unit each). A settlement moves its amount
    /// from the payer to the sole split member. Every group member appears
    /// in the result, and the values always sum to zero.
    pub fn compute_balances(&self) -> HashMap<String, MinorUnits> {
        let mut balances: HashMap<String, MinorUnits> = self
            .group()
            .member_names()
            .map(|name| (name.to_string(), 0))
            .collect();

        for record in self.records() {
            match record.kind {
                RecordKind::Expense => {
                    *balances.entry(record.payer.clone()).or_insert(0) += record.amount;
                    let shares = split_evenly(record.amount, record.split_between.len());
                    for (name, share) in record.split_between.iter().zip(shares) {
                        *balances.entry(name.clone()).or_insert(0) -= share;
                    }
                }
                RecordKind::Settlement => {
                    // Validated at creation: exactly one recipient.
                    for recipient in &record.split_between {
                        *balances.entry(recipient.clone()).or_insert(0) += record.amount;
                    }
                    *balances.entry(record.payer.clone()).or_insert(0) -= record.amount;
                }
            }
        }

        balances
    }

    /// Suggest a set of transfers that clears all outstanding balances.
    ///
    /// Greedy matching of the largest debtor against the largest creditor;
    /// produces at most one transfer fewer than the number of members with
    /// a non-zero balance, and is deterministic (ties break on member
    /// name). Pure projection; the ledger is not modified.
    pub fn suggest_settlements(&self) -> Vec<Transfer> {
        let balances = self.compute_balances();

        let mut debtors: Vec<(String, MinorUnits)> = Vec::new();
        let mut creditors: Vec<(String, MinorUnits)> = Vec::new();
        for (name, net) in balances {
            if net < 0 {
                debtors.push((name, -net));
            } else if net > 0 {
                creditors.push((name, net));
            }
        }

        // Ascending by outstanding amount so the largest sits at the back;
        // reverse name order keeps the pop sequence deterministic.
        debtors.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));
        creditors.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));

        let mut transfers = Vec::new();
        loop {
            let Some(debtor) = debtors.last_mut() else { break };
            let Some(creditor) = creditors.last_mut() else { break };

            let amount = debtor.1.min(creditor.1);
            transfers.push(Transfer {
                payer: debtor.0.clone(),
                receiver: creditor.0.clone(),
                amount,
            });

            debtor.1 -= amount;
            creditor.1 -= amount;
            let debtor_done = debtor.1 == 0;
            let creditor_done = creditor.1 == 0;
            if debtor_done {
                debtors.pop();
            }
            if creditor_done {
                creditors.pop();
            }
        }

        transfers
    }
}
