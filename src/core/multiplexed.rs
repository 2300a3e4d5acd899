//! Multiplexing layer allowing concurrent callers to share one connection.
//!
//! A background task owns the [`Connection`] and serializes writes while
//! demultiplexing replies back to the caller that issued the matching
//! request. Redis replies in the order requests were received, so replies
//! are matched FIFO against a queue of pending callers.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;

use super::connection::Connection;
use crate::proto::error::{Error, Result};
use crate::proto::frame::Frame;

type PendingReply = oneshot::Sender<Result<Frame>>;
type Request = (Frame, PendingReply);

/// A cloneable handle to a single multiplexed Redis connection.
///
/// Internally this is a channel to a background task that owns the real
/// socket; cloning is cheap and all clones share the same underlying
/// connection.
#[derive(Debug, Clone)]
pub struct MultiplexedConnection {
    sender: mpsc::Sender<Request>,
    // Kept alive so the background task is dropped (and the socket closed)
    // once every handle referencing this connection is dropped.
    _handle: Arc<JoinHandle<()>>,
}

impl MultiplexedConnection {
    /// Spawns the background dispatch task for `connection` and returns a
    /// handle to it. `queue_size` bounds the number of requests allowed to
    /// be in flight (queued for write, or awaiting a reply) at once.
    pub fn new(connection: Connection, queue_size: usize) -> Self {
        let (sender, receiver) = mpsc::channel(queue_size.max(1));
        let handle = tokio::spawn(run(connection, receiver));

        Self {
            sender,
            _handle: Arc::new(handle),
        }
    }

    /// Sends a single request frame and awaits its reply.
    ///
    /// Requests are dispatched in the order they are submitted; the
    /// background task writes this frame and resolves the returned future
    /// once the matching reply has been read off the wire.
    pub async fn send_command(&self, frame: Frame) -> Result<Frame> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.sender
            .send((frame, reply_tx))
            .await
            .map_err(|_| Error::Protocol {
                message: "connection task has shut down".to_string(),
            })?;

        reply_rx.await.map_err(|_| Error::Protocol {
            message: "connection task dropped reply channel".to_string(),
        })?
    }
}

async fn run(mut connection: Connection, mut receiver: mpsc::Receiver<Request>) {
    let pending: Mutex<VecDeque<PendingReply>> = Mutex::new(VecDeque::new());

    loop {
        tokio::select! {
            request = receiver.recv() => {
                match request {
                    Some((frame, reply_tx)) => {
                        if let Err(e) = connection.write_frame(&frame).await {
                            let _ = reply_tx.send(Err(e));
                            continue;
                        }
                        pending.lock().await.push_back(reply_tx);
                    }
                    None => break,
                }
            }
            result = connection.read_frame(), if !pending.lock().await.is_empty() => {
                let mut guard = pending.lock().await;
                if let Some(reply_tx) = guard.pop_front() {
                    let _ = reply_tx.send(result);
                }
            }
        }
    }

    // Drain any requests still awaiting a reply with a shutdown error.
    let mut guard = pending.lock().await;
    while let Some(reply_tx) = guard.pop_front() {
        let _ = reply_tx.send(Err(Error::Protocol {
            message: "connection closed".to_string(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::{TcpListener, TcpStream};

    #[tokio::test]
    async fn test_multiplexed_connection_send_command() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut conn = Connection::new(socket);
            let frame = conn.read_frame().await.unwrap();
            assert_eq!(frame, Frame::SimpleString(b"PING".to_vec()));
            conn.write_frame(&Frame::SimpleString(b"PONG".to_vec()))
                .await
                .unwrap();
        });

        let stream = TcpStream::connect(addr).await.unwrap();
        let connection = Connection::new(stream);
        let multiplexed = MultiplexedConnection::new(connection, 16);

        let reply = multiplexed
            .send_command(Frame::SimpleString(b"PING".to_vec()))
            .await
            .unwrap();
        assert_eq!(reply, Frame::SimpleString(b"PONG".to_vec()));
    }

    #[tokio::test]
    async fn test_multiplexed_connection_replies_are_ordered() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut conn = Connection::new(socket);
            for _ in 0..3 {
                let frame = conn.read_frame().await.unwrap();
                conn.write_frame(&frame).await.unwrap();
            }
        });

        let stream = TcpStream::connect(addr).await.unwrap();
        let connection = Connection::new(stream);
        let multiplexed = MultiplexedConnection::new(connection, 16);

        let a = multiplexed.send_command(Frame::Integer(1)).await.unwrap();
        let b = multiplexed.send_command(Frame::Integer(2)).await.unwrap();
        let c = multiplexed.send_command(Frame::Integer(3)).await.unwrap();

        assert_eq!(a, Frame::Integer(1));
        assert_eq!(b, Frame::Integer(2));
        assert_eq!(c, Frame::Integer(3));
    }

    #[tokio::test]
    async fn test_multiplexed_connection_is_cloneable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut conn = Connection::new(socket);
            loop {
                let frame = match conn.read_frame().await {
                    Ok(frame) => frame,
                    Err(_) => break,
                };
                if conn.write_frame(&frame).await.is_err() {
                    break;
                }
            }
        });

        let stream = TcpStream::connect(addr).await.unwrap();
        let connection = Connection::new(stream);
        let multiplexed = MultiplexedConnection::new(connection, 16);
        let cloned = multiplexed.clone();

        let reply = cloned
            .send_command(Frame::SimpleString(b"HELLO".to_vec()))
            .await
            .unwrap();
        assert_eq!(reply, Frame::SimpleString(b"HELLO".to_vec()));
    }
}
