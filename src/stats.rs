use std::collections::HashSet;

use serde::Serialize;

use crate::block::{Block, Transaction};

// Summary counters over the whole chain. Transient: rebuilt from the
// block sequence on every discovery run, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChainStats {
    pub total_blocks: u64,
    pub total_providers: u64,
    pub total_jobs: u64,
    pub total_brokers: u64,
    pub total_grants: u64,
    pub total_usdc: f64,
}

// Single pass over every transaction in every block. Provider payouts
// and broker commissions are splits of a job cost already counted, so
// only the cost itself goes into `total_usdc`. Absent amounts count as
// zero; unrecognized transaction kinds count nothing.
pub fn aggregate(blocks: &[Block]) -> ChainStats {
    let mut providers: HashSet<&str> = HashSet::new();
    let mut brokers: HashSet<&str> = HashSet::new();
    let mut jobs = 0u64;
    let mut grants = 0u64;
    let mut total_usdc = 0f64;

    for block in blocks {
        for tx in &block.transactions {
            match tx {
                Transaction::ProviderRegistration {
                    provider_id,
                    registration_fee_usdc,
                    ..
                } => {
                    insert_id(&mut providers, provider_id);
                    total_usdc += registration_fee_usdc.unwrap_or(0.0);
                }
                Transaction::ComputeJob { cost_usdc, .. } => {
                    jobs += 1;
                    total_usdc += cost_usdc.unwrap_or(0.0);
                }
                Transaction::BrokerRegistration { broker_id, .. } => {
                    insert_id(&mut brokers, broker_id);
                }
                Transaction::AiiGrant { grant_amount_usdc, .. } => {
                    grants += 1;
                    total_usdc += grant_amount_usdc.unwrap_or(0.0);
                }
                Transaction::Unknown(_) => {}
            }
        }
    }

    ChainStats {
        total_blocks: blocks.len() as u64,
        total_providers: providers.len() as u64,
        total_jobs: jobs,
        total_brokers: brokers.len() as u64,
        total_grants: grants,
        total_usdc,
    }
}

// A missing or empty id must not register a spurious set entry.
fn insert_id<'a>(set: &mut HashSet<&'a str>, id: &'a Option<String>) {
    if let Some(id) = id.as_deref() {
        if !id.is_empty() {
            set.insert(id);
        }
    }
}
