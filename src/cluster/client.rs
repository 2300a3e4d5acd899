//! Redis Cluster client implementation.
//!
//! This module provides a high-level client for Redis Cluster with automatic
//! slot-based routing, redirect handling, and topology management.

use crate::core::command;
use crate::core::connection::Connection;
use crate::core::multiplexed::MultiplexedConnection;
use crate::core::{Error, Result};
use crate::proto::frame::Frame;
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::commands::cluster_slots;
use super::engine::DEFAULT_MAX_RETRY_COUNT;
use super::pool::{ConnectionPool, PoolConfig};
use super::slot::SLOT_COUNT;
use super::topology::ClusterTopology;

/// Default queue size for multiplexed connections.
const DEFAULT_QUEUE_SIZE: usize = 1024;

/// Connection and retry settings shared by every node connection a
/// [`ClusterClient`] opens.
///
/// Shares the connect/auth/timeout surface a single-node builder would
/// offer, generalized to a cluster of nodes instead of one server.
#[derive(Debug, Clone)]
pub struct ClusterClientOptions {
    connect_timeout: Option<Duration>,
    command_timeout: Option<Duration>,
    max_retry_count: u32,
    username: Option<String>,
    password: Option<String>,
    tls: bool,
}

impl Default for ClusterClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            command_timeout: None,
            max_retry_count: DEFAULT_MAX_RETRY_COUNT,
            username: None,
            password: None,
            tls: false,
        }
    }
}

/// Builder for a [`ClusterClient`].
///
/// # Example
///
/// ```no_run
/// use clustermux::cluster::client::ClusterClientBuilder;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ClusterClientBuilder::new("127.0.0.1:7000,127.0.0.1:7001")
///     .password("secret")
///     .max_retry_count(3)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClusterClientBuilder {
    addresses: String,
    options: ClusterClientOptions,
}

impl ClusterClientBuilder {
    /// Creates a builder seeded with the given comma-separated addresses.
    pub fn new(addresses: impl Into<String>) -> Self {
        Self {
            addresses: addresses.into(),
            options: ClusterClientOptions::default(),
        }
    }

    /// Sets the TCP connect deadline applied to every node connection.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.options.connect_timeout = Some(timeout);
        self
    }

    /// Sets the send/receive deadline applied to every command.
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.options.command_timeout = Some(timeout);
        self
    }

    /// Overrides the per-command redirect/retry budget (default: [`DEFAULT_MAX_RETRY_COUNT`]).
    pub fn max_retry_count(mut self, max_retry_count: u32) -> Self {
        self.options.max_retry_count = max_retry_count;
        self
    }

    /// Sets the username for `AUTH <user> <password>` on every new connection.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.options.username = Some(username.into());
        self
    }

    /// Sets the password used for authentication on every new connection.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.options.password = Some(password.into());
        self
    }

    /// Marks every node connection as TLS (`rediss://`).
    pub fn tls(mut self, tls: bool) -> Self {
        self.options.tls = tls;
        self
    }

    /// Connects to the cluster and discovers its topology.
    pub async fn build(self) -> Result<ClusterClient> {
        ClusterClient::connect_with_options(&self.addresses, self.options).await
    }
}

/// Helper function to create a connection to a Redis node, applying the
/// client's configured timeouts and replaying authentication.
async fn connect_to_node(
    address: &str,
    options: &ClusterClientOptions,
) -> Result<MultiplexedConnection> {
    // Parse address to get host and port
    let addr = address
        .strip_prefix("redis://")
        .or_else(|| address.strip_prefix("rediss://"))
        .unwrap_or(address);

    let connect = tokio::net::TcpStream::connect(addr);
    let stream = match options.connect_timeout {
        Some(timeout) => tokio::time::timeout(timeout, connect)
            .await
            .map_err(|_| Error::Protocol {
                message: format!("connect to {} timed out", address),
            })?
            .map_err(|e| Error::Io { source: e })?,
        None => connect.await.map_err(|e| Error::Io { source: e })?,
    };

    let mut connection =
        Connection::new(stream).with_timeouts(options.command_timeout, options.command_timeout);

    if let Some(password) = &options.password {
        let auth_cmd = match &options.username {
            Some(username) => command::auth_with_username(username.clone(), password.clone()),
            None => command::auth(password.clone()),
        };
        connection.write_frame(&auth_cmd.into_frame()).await?;
        if let Frame::Error(message) = connection.read_frame().await? {
            warn!(%address, %message, "cluster node rejected authentication");
            return Err(Error::Auth);
        }
    }

    debug!(%address, tls = options.tls, "opened connection to cluster node");
    Ok(MultiplexedConnection::new(connection, DEFAULT_QUEUE_SIZE))
}

/// Redis Cluster client.
///
/// Provides automatic slot-based routing to cluster nodes and handles
/// MOVED and ASK redirects transparently.
#[derive(Clone)]
pub struct ClusterClient {
    /// Initial seed nodes
    seed_nodes: Arc<Vec<String>>,
    /// Current cluster topology
    topology: Arc<RwLock<ClusterTopology>>,
    /// Connection pool for cluster nodes
    pool: Arc<ConnectionPool>,
    /// Connection and retry settings
    options: Arc<ClusterClientOptions>,
}

impl ClusterClient {
    /// Connects to a Redis Cluster using seed nodes.
    ///
    /// The address can be a single node or a comma-separated list of nodes.
    /// The client will discover the full cluster topology from the seed nodes.
    ///
    /// # Arguments
    ///
    /// * `addresses` - Seed node addresses (e.g., "redis://127.0.0.1:7000,127.0.0.1:7001")
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot connect to any seed node
    /// - Topology discovery fails
    pub async fn connect(addresses: &str) -> Result<Self> {
        Self::connect_with_options(addresses, ClusterClientOptions::default()).await
    }

    /// Connects to a Redis Cluster using seed nodes and explicit connection
    /// options. See [`ClusterClientBuilder`] for a fluent way to assemble
    /// `options`.
    pub async fn connect_with_options(addresses: &str, options: ClusterClientOptions) -> Result<Self> {
        let seed_nodes = Self::parse_addresses(addresses)?;

        let pool_config = PoolConfig::default();
        let pool = Arc::new(ConnectionPool::new(pool_config));

        let client = Self {
            seed_nodes: Arc::new(seed_nodes.clone()),
            topology: Arc::new(RwLock::new(ClusterTopology::new())),
            pool,
            options: Arc::new(options),
        };

        // Discover cluster topology
        client.refresh_topology().await?;

        Ok(client)
    }

    /// Parses a comma-separated list of addresses into individual URLs.
    fn parse_addresses(addresses: &str) -> Result<Vec<String>> {
        let mut parsed = Vec::new();
        for addr in addresses.split(',') {
            let addr = addr.trim();
            if addr.is_empty() {
                continue;
            }
            // Ensure address has redis:// prefix
            if !addr.starts_with("redis://") && !addr.starts_with("rediss://") {
                parsed.push(format!("redis://{}", addr));
            } else {
                parsed.push(addr.to_string());
            }
        }

        if parsed.is_empty() {
            return Err(Error::InvalidArgument {
                message: "no valid addresses provided".to_string(),
            });
        }

        Ok(parsed)
    }

    /// Refreshes the cluster topology from seed nodes.
    ///
    /// This queries the cluster for slot distribution and node information.
    pub async fn refresh_topology(&self) -> Result<()> {
        // Try each seed node until we get a successful topology
        for seed_addr in self.seed_nodes.iter() {
            if let Ok(fresh) = self.fetch_topology_from_node(seed_addr).await {
                let previous_version = self.topology.read().await.route_version;
                let installed = ClusterTopology::install(fresh, previous_version)?;
                let mut topo = self.topology.write().await;
                *topo = installed;
                return Ok(());
            }
        }

        Err(Error::Protocol {
            message: "failed to refresh topology from any seed node".to_string(),
        })
    }

    /// Fetches topology from a specific node.
    async fn fetch_topology_from_node(&self, address: &str) -> Result<ClusterTopology> {
        // Connect to the node
        let conn = connect_to_node(address, &self.options).await?;

        // Execute CLUSTER SLOTS
        let slots_cmd = cluster_slots();
        let slots_frame = slots_cmd.into_frame();
        let response = conn.send_command(slots_frame).await?;

        // Parse topology
        ClusterTopology::from_cluster_slots(response)
    }

    /// Gets or creates a connection to the node responsible for a given slot.
    ///
    /// Resolves the slot to its master's address and delegates to
    /// [`Self::get_connection_for_address`], so a slot-routed command and a
    /// redirect to the same physical node always share one pooled connection.
    pub(crate) async fn get_connection_for_slot(&self, slot: u16) -> Result<MultiplexedConnection> {
        let topology = self.topology.read().await;

        let master = topology
            .get_master_for_slot(slot)
            .ok_or_else(|| Error::Protocol {
                message: format!("no node found for slot {}", slot),
            })?;

        let address = master.address.clone();
        drop(topology);

        self.get_connection_for_address(&address).await
    }

    /// Gets or creates a connection to an arbitrary node address.
    ///
    /// Used to follow a MOVED/ASK redirect to a node that may not (yet) be
    /// reflected in the current topology snapshot, and by
    /// [`Self::get_connection_for_slot`] for ordinary slot-routed commands —
    /// both paths share the same address-keyed pool entry for a given node.
    pub(crate) async fn get_connection_for_address(
        &self,
        address: &str,
    ) -> Result<MultiplexedConnection> {
        if let Some(conn) = self.pool.get_connection(address).await {
            return Ok(conn);
        }

        let conn = connect_to_node(address, &self.options).await?;
        self.pool
            .add_connection(address.to_string(), conn.clone())
            .await?;

        Ok(conn)
    }

    /// Builds a `ClusterClient` directly from its parts, bypassing
    /// discovery. Only for tests in sibling modules that need a client
    /// without a live cluster.
    #[cfg(test)]
    pub(crate) fn for_test(
        seed_nodes: Arc<Vec<String>>,
        topology: Arc<RwLock<ClusterTopology>>,
        pool: Arc<ConnectionPool>,
    ) -> Self {
        Self {
            seed_nodes,
            topology,
            pool,
            options: Arc::new(ClusterClientOptions::default()),
        }
    }

    /// Snapshots the current node list and route version.
    pub(crate) async fn topology_snapshot(&self) -> (Vec<super::topology::NodeInfo>, u64) {
        let topology = self.topology.read().await;
        (
            topology.nodes.values().cloned().collect(),
            topology.route_version,
        )
    }

    /// Returns the number of known nodes in the cluster.
    pub async fn node_count(&self) -> usize {
        let topology = self.topology.read().await;
        topology.nodes.len()
    }

    /// Returns the total number of slot ranges in the cluster.
    pub async fn slot_range_count(&self) -> usize {
        let topology = self.topology.read().await;
        topology.slot_ranges.len()
    }

    /// Checks if the cluster covers all slots (0-16383).
    pub async fn is_fully_covered(&self) -> bool {
        let topology = self.topology.read().await;
        let mut covered = vec![false; SLOT_COUNT as usize];

        for range in &topology.slot_ranges {
            for slot in range.start..=range.end {
                covered[slot as usize] = true;
            }
        }

        covered.iter().all(|&c| c)
    }

    /// Executes an arbitrary single-key command, following MOVED/ASK/TRYAGAIN
    /// redirects up to `self`'s configured `max_retry_count` times (see
    /// [`ClusterClientBuilder::max_retry_count`]).
    pub async fn execute(&self, cmd: &crate::core::command::Cmd) -> Result<Frame> {
        super::engine::execute(self, cmd, self.options.max_retry_count).await
    }

    /// Executes a vector command (`MGET`/`MSET`/`DEL`/`EXISTS`), fragmenting
    /// it across per-slot sub-commands if its keys don't share one slot.
    pub async fn execute_multi(&self, cmd: &crate::core::command::Cmd) -> Result<Frame> {
        super::fragment::execute(self, cmd).await
    }

    /// Gets a string value from Redis.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to retrieve
    ///
    /// # Returns
    ///
    /// Returns the value if the key exists, or None if the key does not exist.
    pub async fn get(&self, key: &str) -> Result<Option<Bytes>> {
        let cmd = crate::core::command::get(key.to_string());
        match self.execute(&cmd).await? {
            Frame::BulkString(data) => Ok(data),
            Frame::Null => Ok(None),
            _ => Err(Error::Protocol {
                message: "unexpected response type for GET".to_string(),
            }),
        }
    }

    /// Sets a string value in Redis.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to set
    /// * `value` - The value to store
    pub async fn set(&self, key: &str, value: Bytes) -> Result<()> {
        let cmd = crate::core::command::set(key.to_string(), value);
        self.execute(&cmd).await?;
        Ok(())
    }

    /// Deletes a key from Redis.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to delete
    ///
    /// # Returns
    ///
    /// Returns 1 if the key was deleted, 0 if the key did not exist.
    pub async fn del(&self, key: &str) -> Result<i64> {
        let cmd = crate::core::command::del(key.to_string());
        match self.execute(&cmd).await? {
            Frame::Integer(n) => Ok(n),
            _ => Err(Error::Protocol {
                message: "unexpected response type for DEL".to_string(),
            }),
        }
    }

    /// Checks if a key exists in Redis.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to check
    ///
    /// # Returns
    ///
    /// Returns true if the key exists, false otherwise.
    pub async fn exists(&self, key: &str) -> Result<bool> {
        let cmd = crate::core::command::exists(vec![key.to_string()]);
        match self.execute(&cmd).await? {
            Frame::Integer(n) => Ok(n > 0),
            _ => Err(Error::Protocol {
                message: "unexpected response type for EXISTS".to_string(),
            }),
        }
    }

    /// Gets several keys at once, fragmenting across shards if the keys
    /// don't share a slot.
    ///
    /// Returns one entry per requested key, in the same order, `None` for
    /// keys that don't exist.
    pub async fn mget(&self, keys: &[&str]) -> Result<Vec<Option<Bytes>>> {
        let cmd = crate::core::command::mget(keys.iter().map(|k| k.to_string()).collect());
        match self.execute_multi(&cmd).await? {
            Frame::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Frame::BulkString(data) => Ok(data),
                    Frame::Null => Ok(None),
                    _ => Err(Error::Protocol {
                        message: "unexpected response type for MGET element".to_string(),
                    }),
                })
                .collect(),
            _ => Err(Error::Protocol {
                message: "unexpected response type for MGET".to_string(),
            }),
        }
    }

    /// Sets several key/value pairs at once, fragmenting across shards if
    /// the keys don't share a slot.
    pub async fn mset(&self, pairs: &[(&str, Bytes)]) -> Result<()> {
        let cmd = crate::core::command::mset(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        );
        self.execute_multi(&cmd).await?;
        Ok(())
    }

    /// Returns the single slot shared by every key in `keys`.
    ///
    /// Returns [`Error::CrossSlot`] when the keys don't all map to the same
    /// slot. Used by callers that want to batch keys known in advance to be
    /// co-located (e.g. via a shared `{hashtag}`).
    pub fn validate_same_slot(keys: &[&str]) -> Result<u16> {
        let mut slots = keys.iter().map(|key| super::slot::key_slot(key));
        let first = slots.next().ok_or_else(|| Error::InvalidArgument {
            message: "no keys provided".to_string(),
        })?;
        if slots.all(|slot| slot == first) {
            Ok(first)
        } else {
            Err(Error::CrossSlot)
        }
    }
}
