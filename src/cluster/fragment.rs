//! Splits a multi-key command whose keys span more than one slot into
//! per-slot sub-commands, executes each independently, and reassembles a
//! single reply.
//!
//! Only `MGET`, `MSET`, `DEL`, and `EXISTS` are vector commands in the
//! command table, so those are the only kinds this module fragments.
//! Rather than scanning a 16384-entry scratch array, keys are grouped into
//! a small map keyed by the slots actually touched.

use std::collections::HashMap;

use bytes::Bytes;

use crate::core::command::Cmd;
use crate::proto::error::{Error, Result};
use crate::proto::frame::Frame;

use super::client::ClusterClient;
use super::command_table::CommandKind;
use super::parser;
use super::slot::key_slot;

/// `true` for the command kinds this module knows how to fragment.
pub fn is_fragmentable(kind: CommandKind) -> bool {
    matches!(
        kind,
        CommandKind::MGET | CommandKind::DEL | CommandKind::EXISTS | CommandKind::MSET
    )
}

/// Executes a vector command, fragmenting it by slot when its keys don't
/// all share one slot.
///
/// Single-slot vector commands are sent as-is through
/// [`ClusterClient::execute`] rather than paying for fragmentation.
pub async fn execute(client: &ClusterClient, cmd: &Cmd) -> Result<Frame> {
    let parsed = parser::parse_args(cmd.args().to_vec())?;

    if !is_fragmentable(parsed.kind) {
        return client.execute(cmd).await;
    }

    // Group each key's position by its slot. For MSET, value positions
    // ride along with their key's group so each sub-command still sees
    // `key value` pairs.
    let mut groups: HashMap<u16, Vec<usize>> = HashMap::new();
    for &key_index in &parsed.key_indices {
        let slot = key_slot(&String::from_utf8_lossy(&parsed.args[key_index]));
        groups.entry(slot).or_default().push(key_index);
    }

    if groups.len() <= 1 {
        return client.execute(cmd).await;
    }

    let name = parsed.args[0].clone();
    let mut per_group_keys: Vec<(u16, Vec<usize>)> = groups.into_iter().collect();
    per_group_keys.sort_by_key(|(slot, _)| *slot);

    let mut replies = Vec::with_capacity(per_group_keys.len());
    for (_, indices) in &per_group_keys {
        let sub_cmd = build_sub_command(parsed.kind, &name, &parsed.args, indices);
        replies.push(client.execute(&sub_cmd).await?);
    }

    reassemble(parsed.kind, &per_group_keys, &replies, parsed.args.len())
}

fn build_sub_command(
    kind: CommandKind,
    name: &Bytes,
    args: &[Bytes],
    indices: &[usize],
) -> Cmd {
    let mut cmd = Cmd::new(name.clone());
    for &idx in indices {
        cmd = cmd.arg(args[idx].clone());
        if kind == CommandKind::MSET {
            cmd = cmd.arg(args[idx + 1].clone());
        }
    }
    cmd
}

fn reassemble(
    kind: CommandKind,
    per_group_keys: &[(u16, Vec<usize>)],
    replies: &[Frame],
    _argc: usize,
) -> Result<Frame> {
    match kind {
        CommandKind::DEL | CommandKind::EXISTS => {
            let mut total: i64 = 0;
            for reply in replies {
                match reply {
                    Frame::Integer(n) => total += n,
                    Frame::Error(message) => {
                        return Err(Error::Server {
                            message: String::from_utf8_lossy(message).to_string(),
                        })
                    }
                    _ => {
                        return Err(Error::Protocol {
                            message: "unexpected reply type for fragmented DEL/EXISTS".to_string(),
                        })
                    }
                }
            }
            Ok(Frame::Integer(total))
        }
        CommandKind::MSET => {
            for reply in replies {
                match reply {
                    Frame::SimpleString(s) if s == b"OK" => {}
                    Frame::Error(message) => {
                        return Err(Error::Server {
                            message: String::from_utf8_lossy(message).to_string(),
                        })
                    }
                    _ => {
                        return Err(Error::Protocol {
                            message: "fragmented MSET sub-command did not return OK".to_string(),
                        })
                    }
                }
            }
            Ok(Frame::SimpleString(b"OK".to_vec()))
        }
        CommandKind::MGET => {
            // Each reply is an array of values in the order its group's key
            // indices were collected; lay them back out by original index.
            let mut by_index: HashMap<usize, Frame> = HashMap::new();
            for ((_, indices), reply) in per_group_keys.iter().zip(replies.iter()) {
                let values = match reply {
                    Frame::Array(values) => values,
                    Frame::Error(message) => {
                        return Err(Error::Server {
                            message: String::from_utf8_lossy(message).to_string(),
                        })
                    }
                    _ => {
                        return Err(Error::Protocol {
                            message: "fragmented MGET sub-command did not return an array"
                                .to_string(),
                        })
                    }
                };
                for (key_index, value) in indices.iter().zip(values.iter()) {
                    by_index.insert(*key_index, value.clone());
                }
            }

            let mut ordered_keys: Vec<usize> =
                per_group_keys.iter().flat_map(|(_, idx)| idx.iter().copied()).collect();
            ordered_keys.sort_unstable();

            let values = ordered_keys
                .into_iter()
                .map(|idx| by_index.remove(&idx).unwrap_or(Frame::Null))
                .collect();
            Ok(Frame::Array(values))
        }
        _ => unreachable!("is_fragmentable gates the kinds reaching reassemble"),
    }
}
