//! Route-version-aware iteration over the cluster's known nodes.
//!
//! A plain index into a node list isn't safe against a topology refresh
//! landing mid-iteration: nodes can be reordered, added, or removed
//! underneath the iterator. This iterator snapshots the node list and the
//! topology's `route_version` at creation; if a later call observes a
//! different version, it restarts from the new snapshot exactly once. A
//! second change in the same walk means the topology is moving faster than
//! the iterator can keep up, so it ends the walk rather than looping.

use super::client::ClusterClient;
use super::topology::NodeInfo;

/// Iterates a [`ClusterClient`]'s known nodes, snapshotting as it goes.
pub struct NodeIterator<'a> {
    client: &'a ClusterClient,
    nodes: Vec<NodeInfo>,
    index: usize,
    route_version: u64,
    restarted: bool,
}

impl<'a> NodeIterator<'a> {
    /// Creates an iterator over `client`'s currently known nodes.
    pub async fn new(client: &'a ClusterClient) -> Self {
        let (nodes, route_version) = client.topology_snapshot().await;
        Self {
            client,
            nodes,
            index: 0,
            route_version,
            restarted: false,
        }
    }

    /// Returns the next node, or `None` once the walk is exhausted or the
    /// topology changed out from under a restarted walk.
    pub async fn next(&mut self) -> Option<NodeInfo> {
        let (current_nodes, current_version) = self.client.topology_snapshot().await;

        if current_version != self.route_version {
            if self.restarted {
                return None;
            }
            self.restarted = true;
            self.nodes = current_nodes;
            self.route_version = current_version;
            self.index = 0;
        }

        let node = self.nodes.get(self.index)?.clone();
        self.index += 1;
        Some(node)
    }
}
