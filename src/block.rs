use serde::{Deserialize, Serialize};
use serde_json::Value;

// One immutable ledger record, published as `block-<n>.json` in the
// object store. Field names are snake_case on the wire; hashes arrive
// as hex strings and are trusted as given (no chain verification here).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub block_number: u64,
    pub timestamp: String,          // ISO-8601
    pub previous_hash: String,      // "0" * 64 on the genesis block
    pub block_hash: String,
    pub transaction_count: u64,
    pub transactions: Vec<Transaction>,
}

impl Block {
    // Genesis carries a placeholder previous_hash; renderers skip it.
    pub fn is_genesis(&self) -> bool {
        self.block_number == 0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RigSpecs {
    pub gpu: Option<String>,
    pub cpu: Option<String>,
    pub ram_gb: Option<u64>,
}

// The four transaction kinds recorded on the ledger, dispatched on the
// wire-level `type` tag. Every payload field is optional: a publisher
// omitting a field must not make the whole block unreadable. Tags this
// version does not know land in `Unknown` with their raw JSON intact.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Transaction {
    #[serde(rename = "provider_registration")]
    ProviderRegistration {
        provider_id: Option<String>,
        rig_specs: Option<RigSpecs>,
        catchain_address: Option<String>,
        registration_fee_usdc: Option<f64>,
        timestamp: Option<String>,
    },
    #[serde(rename = "compute_job")]
    ComputeJob {
        job_id: Option<String>,
        client_id: Option<String>,
        provider_id: Option<String>,
        broker_id: Option<String>,
        duration_hours: Option<f64>,
        cost_usdc: Option<f64>,
        broker_commission_usdc: Option<f64>,
        provider_payout_usdc: Option<f64>,
        start_time: Option<String>,
        timestamp: Option<String>,
    },
    #[serde(rename = "broker_registration")]
    BrokerRegistration {
        broker_id: Option<String>,
        broker_name: Option<String>,
        commission_rate: Option<f64>,     // fraction in [0, 1]
        catchain_address: Option<String>,
        timestamp: Option<String>,
    },
    #[serde(rename = "aii_grant")]
    AiiGrant {
        client_id: Option<String>,
        grant_amount_usdc: Option<f64>,
        conditions: Option<String>,
        grant_date: Option<String>,
    },
    #[serde(untagged)]
    Unknown(Value),
}

impl Transaction {
    pub fn kind(&self) -> &'static str {
        match self {
            Transaction::ProviderRegistration { .. } => "provider_registration",
            Transaction::ComputeJob { .. } => "compute_job",
            Transaction::BrokerRegistration { .. } => "broker_registration",
            Transaction::AiiGrant { .. } => "aii_grant",
            Transaction::Unknown(_) => "unknown",
        }
    }
}
