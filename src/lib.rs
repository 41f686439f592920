pub mod block;          // Block and Transaction wire types
pub mod config;         // loads explorer.toml
pub mod discovery;      // sequential scan over the numbered block store
pub mod format;         // USDC / time-ago display helpers
pub mod stats;          // chain statistics fold
