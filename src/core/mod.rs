//! # Clustermux Core
//!
//! Wire-level building blocks shared by the cluster-routing layer: the RESP
//! command builders, the single-connection transport, and the multiplexed
//! connection that lets many concurrent callers share one socket.
//!
//! ## Modules
//!
//! - [`connection`] - Single connection management
//! - [`command`] - Command builders
//! - [`multiplexed`] - Multiplexed connection for concurrent requests
//!

#![warn(missing_docs)]

pub use crate::proto::error::{Error, Result};

/// Command construction helpers.
pub mod command;
/// Low-level connection management.
pub mod connection;
/// Multiplexing logic.
pub mod multiplexed;

cfg_if::cfg_if! {
    if #[cfg(feature = "tls")] {
        mod tls;
        pub use tls::TlsConnectorInner;
    }
}

