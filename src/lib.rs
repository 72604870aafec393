//! Lino blockchain client SDK.
//!
//! Reads on-chain state through ABCI queries and writes through signed,
//! canonically encoded transactions broadcast to a Tendermint node.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────── LinoClient ────────────────────────┐
//!                 │                                                            │
//!   caller ──────▶│  query/  ──▶ store::keys ──┐                               │
//!                 │                            ├──▶ transport ──▶ rpc ─────────┼──▶ Tendermint node
//!   caller ──────▶│  broadcast/ ──▶ message ───┘       │                       │    (abci_query,
//!                 │                                    ▼                       │     broadcast_tx_commit,
//!                 │                     codec (canonical, amount, pubkey)      │     block, status)
//!                 │                     crypto (keys, signing)                 │
//!                 └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> lino_sdk::LinoResult<()> {
//! use lino_sdk::{LinoClient, NodeConfig};
//!
//! let client = LinoClient::new(&NodeConfig::default())?;
//! let bank = client.query.get_account_bank("alice").await?;
//! println!("saving: {}", bank.saving.amount);
//! # Ok(())
//! # }
//! ```

// Ambient
pub mod config;
pub mod error;
pub mod observability;

// Encoding
pub mod codec;
pub mod crypto;
pub mod message;
pub mod store;
pub mod types;

// Node access
pub mod broadcast;
pub mod client;
pub mod query;
pub mod transport;

pub use client::LinoClient;
pub use config::{ClientConfig, NodeConfig};
pub use error::{BroadcastError, BroadcastPhase, LinoError, LinoResult};
pub use message::Msg;
pub use transport::{BroadcastResult, GetKeyBy};
