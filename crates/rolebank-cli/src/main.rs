//! Rolebank CLI - demonstration driver
//!
//! Builds two accounts, binds them into a money-transfer interaction,
//! invokes it once, and prints the resulting balances.
//!
//! ```bash
//! rolebank --source-balance 1000 --amount 100
//! RUST_LOG=rolebank_dci=info rolebank --amount 250 --json
//! ```

use anyhow::Result;
use clap::Parser;
use rolebank_dci::TransferMoney;
use rolebank_domain::{Account, AccountHandle};
use rolebank_types::Amount;

/// Run a role-based money transfer between two fresh accounts
#[derive(Parser)]
#[command(name = "rolebank")]
#[command(version)]
#[command(about = "Run a role-based money transfer between two accounts", long_about = None)]
struct Cli {
    /// Opening balance of the paying account, in major units
    #[arg(long, default_value_t = 1000.0)]
    source_balance: f64,

    /// Opening balance of the receiving account, in major units
    #[arg(long, default_value_t = 0.0)]
    sink_balance: f64,

    /// Amount to transfer, in major units
    #[arg(long, default_value_t = 100.0)]
    amount: f64,

    /// Print the transfer receipt as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = AccountHandle::new(Account::new(
        "source",
        Amount::from_major(cli.source_balance)?,
    ));
    let sink = AccountHandle::new(Account::new("sink", Amount::from_major(cli.sink_balance)?));
    let amount = Amount::from_major(cli.amount)?;

    println!(
        "before: source {} | sink {}",
        source.balance(),
        sink.balance()
    );

    let interaction = TransferMoney::new(source.clone(), sink.clone());
    let receipt = interaction.invoke(amount)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        println!("transferred {} ({})", receipt.amount, receipt.transfer_id);
    }
    println!(
        "after:  source {} | sink {}",
        source.balance(),
        sink.balance()
    );

    Ok(())
}
