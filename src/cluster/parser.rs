//! Request parsing: turn a decoded command frame into key positions.
//!
//! Framing (multi-bulk counts, `$len` bulk reads) is the wire client's
//! job and already lives behind [`Frame`](crate::proto::frame::Frame) by
//! the time a command reaches this module. What's left here is deciding,
//! from the [`command_table`], which argument(s) are keys.

use bytes::Bytes;

use crate::proto::error::{Error, Result};
use crate::proto::frame::Frame;

use super::command_table::{self, CommandKind, CommandSpec, KeyMethod};

/// A command that has been matched against the command table, with its
/// key argument(s) located.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    /// The matched command/subcommand.
    pub kind: CommandKind,
    /// All arguments, including the command name (and subname, if any).
    pub args: Vec<Bytes>,
    /// Indices into `args` that hold keys, in their original order.
    pub key_indices: Vec<usize>,
}

impl ParsedCommand {
    /// Iterates the command's keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Bytes> {
        self.key_indices.iter().map(move |&i| &self.args[i])
    }

    /// `true` if this command does not touch any key.
    pub fn is_keyless(&self) -> bool {
        self.key_indices.is_empty()
    }
}

/// Parses a decoded multi-bulk request frame into a [`ParsedCommand`].
pub fn parse_frame(frame: &Frame) -> Result<ParsedCommand> {
    let items = match frame {
        Frame::Array(items) if !items.is_empty() => items,
        _ => return Err(parse_error()),
    };

    let mut args = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Frame::BulkString(Some(bytes)) => args.push(bytes.clone()),
            _ => return Err(parse_error()),
        }
    }

    parse_args(args)
}

/// Parses already-decoded command arguments into a [`ParsedCommand`].
///
/// This is the entry point used when arguments are built directly (e.g.
/// by the multi-key fragmenter) rather than decoded off the wire.
pub fn parse_args(args: Vec<Bytes>) -> Result<ParsedCommand> {
    if args.is_empty() {
        return Err(parse_error());
    }

    let argc = args.len();
    let arg0 = args[0].as_ref();
    let arg1 = args.get(1).map(|b| b.as_ref());

    let spec = command_table::lookup(arg0, arg1).ok_or_else(|| unknown_command_error(arg0, arg1))?;

    if !spec.arity_matches(argc) {
        return Err(parse_error());
    }

    let key_indices = match spec.key_method {
        KeyMethod::NoKey => Vec::new(),
        KeyMethod::Index => index_keys(spec, &args)?,
        KeyMethod::KeyNum => keynum_keys(spec, &args)?,
        KeyMethod::Unknown => unknown_method_keys(spec, &args)?,
    };

    Ok(ParsedCommand {
        kind: spec.kind,
        args,
        key_indices,
    })
}

fn parse_error() -> Error {
    Error::Protocol {
        message: "Command parse error".to_string(),
    }
}

fn unknown_command_error(arg0: &[u8], arg1: Option<&[u8]>) -> Error {
    let name = String::from_utf8_lossy(arg0);
    let message = match arg1 {
        Some(a1) => format!("Unknown command {} {}", name, String::from_utf8_lossy(a1)),
        None => format!("Unknown command {}", name),
    };
    Error::Protocol { message }
}

fn keys_not_found_error(spec: &CommandSpec) -> Error {
    let message = match spec.subname {
        Some(sub) => format!("Failed to find keys of command {} {}", spec.name, sub),
        None => format!("Failed to find keys of command {}", spec.name),
    };
    Error::Protocol { message }
}

/// `MIGRATE`'s simple (non-`KEYS`) form has its key at a fixed index, just
/// like any other `Index`-method command; its special carve-out is that
/// an empty key there means the real key list is hiding behind a
/// `KEYS key [key ...]` trailer this parser does not implement.
fn index_keys(spec: &CommandSpec, args: &[Bytes]) -> Result<Vec<usize>> {
    let pos = spec.key_position as usize;
    let key = args.get(pos).ok_or_else(|| keys_not_found_error(spec))?;

    if spec.kind == CommandKind::MIGRATE && key.is_empty() {
        return Err(parse_error());
    }

    let mut indices = vec![pos];

    if is_vector_command(spec.kind) {
        if spec.kind == CommandKind::MSET {
            if args.len() % 2 == 0 {
                return Err(parse_error());
            }
            let mut i = pos + 2;
            while i < args.len() {
                indices.push(i);
                i += 2;
            }
        } else {
            for i in (pos + 1)..args.len() {
                indices.push(i);
            }
        }
    }

    Ok(indices)
}

fn is_vector_command(kind: CommandKind) -> bool {
    matches!(
        kind,
        CommandKind::MGET | CommandKind::DEL | CommandKind::EXISTS | CommandKind::MSET
    )
}

fn keynum_keys(spec: &CommandSpec, args: &[Bytes]) -> Result<Vec<usize>> {
    let pos = spec.key_position as usize;
    let count_arg = args.get(pos).ok_or_else(|| keys_not_found_error(spec))?;

    if count_arg.as_ref() == b"0" {
        return Ok(Vec::new());
    }

    let first_key = pos + 1;
    if first_key >= args.len() {
        return Err(keys_not_found_error(spec));
    }

    Ok(vec![first_key])
}

/// Scans forward for the literal token `STREAMS`, starting no earlier than
/// `start_from`. `XREADGROUP` starts at index 4 to skip past its
/// `GROUP <name> <consumer>` prefix, which might otherwise contain a
/// literal argument spelled "streams".
fn unknown_method_keys(spec: &CommandSpec, args: &[Bytes]) -> Result<Vec<usize>> {
    let start_from = if spec.kind == CommandKind::XREADGROUP {
        4
    } else {
        0
    };

    let streams_at = args
        .iter()
        .enumerate()
        .skip(start_from)
        .find(|(_, arg)| arg.eq_ignore_ascii_case(b"STREAMS"))
        .map(|(i, _)| i);

    let streams_at = streams_at.ok_or_else(|| keys_not_found_error(spec))?;
    let first_key = streams_at + 1;
    if first_key >= args.len() {
        return Err(keys_not_found_error(spec));
    }

    Ok(vec![first_key])
}
