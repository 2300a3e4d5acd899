//! # Clustermux
//!
//! Redis Cluster client library for Rust: command parsing, hash-slot
//! routing, topology discovery, and MOVED/ASK/TRYAGAIN redirect handling
//! over multiplexed connections.
//!
//! ## Features
//!
//! - `cluster` - Cluster mode support (required for [`cluster::ClusterClient`])
//! - `tls` - TLS/SSL support
//! - `resp3` - RESP3 protocol support
//! - `json` - RedisJSON commands
//! - `streams` - Redis Streams commands
//!
//! ## Example
//!
//! ```no_run
//! # #[cfg(feature = "cluster")]
//! # {
//! use clustermux::cluster::ClusterClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClusterClient::connect("127.0.0.1:7000,127.0.0.1:7001").await?;
//! let _ = client.get("key").await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![warn(missing_docs)]

pub mod proto;
pub mod core;

#[cfg(feature = "cluster")]
pub mod cluster;

pub use crate::core::{Error, Result};
