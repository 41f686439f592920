use std::time::Duration;

use anyhow::Result;
use chrono::Utc;

use catchain_explorer::{
    block::{Block, Transaction},
    config::ExplorerConfig,
    discovery::{HttpSource, TracingObserver, discover_blocks},
    format::{format_usdc, time_ago},
    stats::aggregate,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/explorer.toml".to_string());
    let cfg = ExplorerConfig::load(&path)?;

    let source = HttpSource::new(
        cfg.base_url.clone(),
        Duration::from_millis(cfg.request_timeout_ms),
    )?;

    let blocks = discover_blocks(&source, &mut TracingObserver, cfg.max_blocks).await;
    let stats = aggregate(&blocks);

    println!("CHAIN STATISTICS");
    println!("  blocks     {}", stats.total_blocks);
    println!("  providers  {}", stats.total_providers);
    println!("  jobs       {}", stats.total_jobs);
    println!("  brokers    {}", stats.total_brokers);
    println!("  grants     {}", stats.total_grants);
    println!("  total      {}", format_usdc(stats.total_usdc));
    println!();

    if blocks.is_empty() {
        println!("no blocks found");
        return Ok(());
    }

    let now = Utc::now();
    for block in &blocks {
        print_block(block, now);
        println!();
    }

    Ok(())
}

fn print_block(block: &Block, now: chrono::DateTime<Utc>) {
    println!(
        "BLOCK #{}  {}  ({} tx)",
        block.block_number,
        time_ago(&block.timestamp, now),
        block.transaction_count
    );
    println!("  hash {}", block.block_hash);
    if !block.is_genesis() {
        println!("  prev {}", block.previous_hash);
    }
    for tx in &block.transactions {
        print_tx(tx);
    }
}

fn opt(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("n/a")
}

fn print_tx(tx: &Transaction) {
    match tx {
        Transaction::ProviderRegistration {
            provider_id,
            rig_specs,
            registration_fee_usdc,
            ..
        } => {
            println!(
                "  [provider_registration] id {} fee {}",
                opt(provider_id),
                format_usdc(registration_fee_usdc.unwrap_or(0.0))
            );
            if let Some(specs) = rig_specs {
                println!(
                    "                          gpu {} cpu {} ram {}GB",
                    specs.gpu.as_deref().unwrap_or("n/a"),
                    specs.cpu.as_deref().unwrap_or("n/a"),
                    specs.ram_gb.unwrap_or(0)
                );
            }
        }
        Transaction::ComputeJob {
            job_id,
            client_id,
            provider_id,
            broker_id,
            duration_hours,
            cost_usdc,
            broker_commission_usdc,
            provider_payout_usdc,
            ..
        } => {
            println!(
                "  [compute_job] job {} client {} provider {} duration {}h",
                opt(job_id),
                opt(client_id),
                opt(provider_id),
                duration_hours.unwrap_or(0.0)
            );
            println!(
                "                cost {} payout {}",
                format_usdc(cost_usdc.unwrap_or(0.0)),
                format_usdc(provider_payout_usdc.unwrap_or(0.0))
            );
            if let Some(broker) = broker_id.as_deref() {
                println!(
                    "                broker {} commission {}",
                    broker,
                    format_usdc(broker_commission_usdc.unwrap_or(0.0))
                );
            }
        }
        Transaction::BrokerRegistration {
            broker_id,
            broker_name,
            commission_rate,
            ..
        } => {
            println!(
                "  [broker_registration] id {} name {} rate {:.1}%",
                opt(broker_id),
                opt(broker_name),
                commission_rate.unwrap_or(0.0) * 100.0
            );
        }
        Transaction::AiiGrant {
            client_id,
            grant_amount_usdc,
            conditions,
            ..
        } => {
            println!(
                "  [aii_grant] client {} amount {} conditions {}",
                opt(client_id),
                format_usdc(grant_amount_usdc.unwrap_or(0.0)),
                opt(conditions)
            );
        }
        Transaction::Unknown(_) => {
            println!("  [{}]", tx.kind());
        }
    }
}
