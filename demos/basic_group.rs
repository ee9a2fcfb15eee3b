//! Basic group ledger usage example

use splitledger_core::money::format_amount;
use splitledger_core::utils::MemoryStore;
use splitledger_core::{Group, GroupStore, RecordDraft};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💸 Split Ledger Core - Basic Group Example\n");

    let mut store = MemoryStore::new();

    // 1. Create a group and persist it
    println!("👥 Creating group...");
    let group = Group::new(
        "Ski trip".to_string(),
        vec!["ana".to_string(), "bo".to_string(), "cleo".to_string()],
    )?;
    store.save_group(&group).await?;
    for member in &group.members {
        println!("  ✓ Registered member: {}", member.name);
    }
    println!();

    // 2. Load a snapshot and build the ledger engine
    let snapshot = store
        .load_group(&group.id)
        .await?
        .expect("group was just saved");
    let mut engine = snapshot.into_engine()?;

    // 3. Record some expenses
    println!("🧾 Recording expenses...\n");

    let cabin = engine.add_record(RecordDraft::expense(
        "Cabin rental".to_string(),
        60000,
        "ana".to_string(),
        vec!["ana".to_string(), "bo".to_string(), "cleo".to_string()],
    ))?;
    store.save_record(&cabin).await?;
    println!("  ✓ ana paid {} for the cabin", format_amount(cabin.amount));

    let groceries = engine.add_record(RecordDraft::expense(
        "Groceries".to_string(),
        12501,
        "bo".to_string(),
        vec!["ana".to_string(), "bo".to_string(), "cleo".to_string()],
    ))?;
    store.save_record(&groceries).await?;
    println!(
        "  ✓ bo paid {} for groceries",
        format_amount(groceries.amount)
    );

    let payback = engine.add_record(RecordDraft::settlement(
        20000,
        "cleo".to_string(),
        "ana".to_string(),
    ))?;
    store.save_record(&payback).await?;
    println!("  ✓ cleo settled {} with ana\n", format_amount(payback.amount));

    // 4. Derived views
    println!(
        "💰 Total group spend: {}\n",
        format_amount(engine.total_expenses())
    );

    println!("⚖️  Balances:");
    let balances = engine.compute_balances();
    for name in engine.group().member_names() {
        println!("  {:<6} {}", name, format_amount(balances[name]));
    }
    println!();

    println!("🗓  Expenses by month:");
    for (month, records) in engine.group_by_month() {
        println!("  {month}:");
        for record in records {
            println!(
                "    {} — {} ({})",
                record.description,
                format_amount(record.amount),
                record.payer
            );
        }
    }
    println!();

    println!("🤝 Suggested settlements:");
    for transfer in engine.suggest_settlements() {
        println!(
            "  {} pays {} to {}",
            transfer.payer,
            format_amount(transfer.amount),
            transfer.receiver
        );
    }

    Ok(())
}
