//! Command execution with MOVED/ASK/TRYAGAIN redirect handling.
//!
//! Routes a command to the node that should own its slot and follows the
//! redirects Redis Cluster can return, instead of retrying forever inside
//! an unbounded loop. Each attempt moves through an explicit state:
//!
//! ```text
//! Routing -> Sending -> AwaitingReply -> HandlingRedirect -> Routing (retry)
//!                                               |
//!                                               +-> Done / Failed
//! ```
//!
//! `Sending` and `AwaitingReply` collapse into one step here because the
//! multiplexed connection already awaits the wire reply before returning.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::core::command::Cmd;
use crate::core::multiplexed::MultiplexedConnection;
use crate::proto::error::{Error, Result};
use crate::proto::frame::Frame;

use super::client::ClusterClient;
use super::errors::parse_redis_error;
use super::parser;
use super::slot::key_slot;

/// Default number of redirects a single command will follow before giving up.
pub const DEFAULT_MAX_RETRY_COUNT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Routing,
    Sending,
    HandlingRedirect,
    Done,
    Failed,
}

/// A pending redirect a retry should follow instead of routing by slot.
#[derive(Debug, Clone)]
enum Redirect {
    None,
    /// Permanent MOVED redirect: send straight to `address`.
    Moved { address: String },
    /// One-shot ASK redirect: prefix with `ASKING` on `address`.
    Ask { address: String },
}

/// Executes `cmd` against the cluster, following MOVED/ASK redirects and
/// restarting on TRYAGAIN/CLUSTERDOWN, up to `max_retry_count` times.
pub async fn execute(client: &ClusterClient, cmd: &Cmd, max_retry_count: u32) -> Result<Frame> {
    let slot = route_slot(cmd)?;

    let mut state = State::Routing;
    let mut redirect = Redirect::None;
    let mut attempts: u32 = 0;
    let mut last_err: Option<Error> = None;

    loop {
        match state {
            State::Routing => {
                if attempts >= max_retry_count {
                    state = State::Failed;
                    continue;
                }
                state = State::Sending;
            }
            State::Sending => {
                attempts += 1;

                let (conn_result, asking) = match &redirect {
                    Redirect::None => (client.get_connection_for_slot(slot).await, false),
                    Redirect::Moved { address } => {
                        (client.get_connection_for_address(address).await, false)
                    }
                    Redirect::Ask { address } => {
                        (client.get_connection_for_address(address).await, true)
                    }
                };

                let conn = match conn_result {
                    Ok(conn) => conn,
                    Err(err) => {
                        last_err = Some(err);
                        state = State::HandlingRedirect;
                        continue;
                    }
                };

                match send(&conn, cmd, asking).await {
                    Ok(Frame::Error(message)) => match parse_redis_error(&message) {
                        Error::Moved { address, .. } => {
                            debug!(slot, %address, attempts, "following MOVED redirect");
                            redirect = Redirect::Moved { address };
                            // Permanent: the slot table is stale, refresh it
                            // so later commands route straight to the new
                            // owner without needing their own redirect.
                            if let Err(err) = client.refresh_topology().await {
                                warn!(%err, "topology refresh after MOVED failed");
                            }
                            state = State::HandlingRedirect;
                        }
                        Error::Ask { address, .. } => {
                            debug!(slot, %address, attempts, "following ASK redirect");
                            redirect = Redirect::Ask { address };
                            state = State::HandlingRedirect;
                        }
                        Error::TryAgain { .. } | Error::ClusterDown => {
                            debug!(slot, attempts, "retrying after TRYAGAIN/CLUSTERDOWN");
                            redirect = Redirect::None;
                            state = State::HandlingRedirect;
                        }
                        other => return Err(other),
                    },
                    Ok(frame) => {
                        state = State::Done;
                        return Ok(frame);
                    }
                    Err(err) => {
                        last_err = Some(err);
                        state = State::HandlingRedirect;
                    }
                }
            }
            State::HandlingRedirect => {
                state = State::Routing;
            }
            State::Done => unreachable!("Sending returns before reaching Done"),
            State::Failed => {
                warn!(slot, attempts, max_retry_count, "exhausted redirect/retry budget");
                return Err(last_err.unwrap_or(Error::TooManyRetries { attempts }));
            }
        }
    }
}

async fn send(conn: &MultiplexedConnection, cmd: &Cmd, asking: bool) -> Result<Frame> {
    if asking {
        conn.send_command(Frame::Array(vec![Frame::BulkString(Some(
            Bytes::from_static(b"ASKING"),
        ))]))
        .await?;
    }
    conn.send_command(cmd.clone().into_frame()).await
}

/// Finds the slot to route on by parsing `cmd`'s arguments through the
/// request parser and hashing its first key.
fn route_slot(cmd: &Cmd) -> Result<u16> {
    let parsed = parser::parse_args(cmd.args().to_vec())?;
    let key = parsed.keys().next().ok_or_else(|| Error::InvalidArgument {
        message: "command has no routable key".to_string(),
    })?;
    Ok(key_slot(&String::from_utf8_lossy(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_slot_uses_first_key() {
        let cmd = Cmd::new("GET").arg("{user1000}.profile");
        let slot = route_slot(&cmd).unwrap();
        assert_eq!(slot, key_slot("{user1000}.profile"));
    }

    #[test]
    fn route_slot_rejects_keyless_command() {
        let cmd = Cmd::new("PING");
        assert!(route_slot(&cmd).is_err());
    }
}
