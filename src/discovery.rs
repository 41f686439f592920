use std::fmt;
use std::time::Duration;

use anyhow::Context;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use tracing::{info, warn};

use crate::block::Block;

// End-of-chain heuristic: this many misses in a row means there is
// nothing further to scan. The counter resets on every hit, so an
// isolated gap (a skipped or delayed publish) does not end the scan.
pub const CONSECUTIVE_FAILURE_LIMIT: u32 = 3;

// Why an index could not be turned into a block. All three classes
// count the same toward the stop heuristic; the split exists for
// diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    // Connection, DNS or timeout trouble below HTTP.
    Transport(String),
    // The store answered with a non-success status.
    Status(u16),
    // The body was not a well-formed block document.
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport error: {msg}"),
            FetchError::Status(code) => write!(f, "HTTP status {code}"),
            FetchError::Malformed(msg) => write!(f, "malformed block: {msg}"),
        }
    }
}

// Where numbered block documents come from. Production uses
// [`HttpSource`]; tests drive the scan with an in-memory source.
#[allow(async_fn_in_trait)]
pub trait BlockSource {
    async fn fetch(&self, index: u64) -> Result<Block, FetchError>;
}

// Reads `block-<n>.json` from an object store over plain GET, no auth.
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;

        let base_url = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    fn block_url(&self, index: u64) -> String {
        format!("{}/block-{}.json", self.base_url, index)
    }
}

impl BlockSource for HttpSource {
    async fn fetch(&self, index: u64) -> Result<Block, FetchError> {
        let url = self.block_url(index);

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            // every scan must observe the freshest published state
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("GET {url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<Block>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

// Per-index scan outcomes, reported out-of-band so the loop stays
// decoupled from any concrete logging backend.
pub trait ScanObserver {
    fn block_loaded(&mut self, index: u64, block: &Block) {
        let _ = (index, block);
    }
    fn index_failed(&mut self, index: u64, error: &FetchError) {
        let _ = (index, error);
    }
    fn scan_finished(&mut self, scanned: u64, loaded: usize) {
        let _ = (scanned, loaded);
    }
}

pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn block_loaded(&mut self, index: u64, block: &Block) {
        info!(
            index,
            block_number = block.block_number,
            tx_count = block.transactions.len(),
            "block loaded"
        );
    }

    fn index_failed(&mut self, index: u64, error: &FetchError) {
        warn!(index, %error, "block fetch failed");
    }

    fn scan_finished(&mut self, scanned: u64, loaded: usize) {
        info!(scanned, loaded, "scan finished");
    }
}

// Walks block-0.json, block-1.json, ... strictly one request at a time,
// never retrying an index, and stops after three misses in a row (or at
// `max_blocks` where a deployment caps the scan). Fetch and parse
// failures never surface to the caller; an empty result is a valid
// outcome when the very first indices are absent.
pub async fn discover_blocks<S: BlockSource>(
    source: &S,
    observer: &mut dyn ScanObserver,
    max_blocks: Option<u64>,
) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut index = 0u64;
    let mut consecutive_failures = 0u32;

    while consecutive_failures < CONSECUTIVE_FAILURE_LIMIT
        && max_blocks.is_none_or(|cap| index < cap)
    {
        match source.fetch(index).await {
            Ok(block) => {
                observer.block_loaded(index, &block);
                blocks.push(block);
                consecutive_failures = 0;
            }
            Err(err) => {
                observer.index_failed(index, &err);
                consecutive_failures += 1;
            }
        }
        index += 1;
    }

    observer.scan_finished(index, blocks.len());

    // accumulated in ascending index order; consumers want newest first
    blocks.reverse();
    blocks
}
