//! Single-connection RESP transport over a raw TCP stream.
//!
//! Wraps a [`TcpStream`] with a [`Decoder`]/[`Encoder`] pair and exposes
//! frame-level read/write operations. This is the building block that
//! [`multiplexed`](crate::core::multiplexed) layers concurrent request
//! dispatch on top of.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::proto::codec::{Decoder, Encoder};
use crate::proto::error::{Error, Result};
use crate::proto::frame::Frame;

const READ_CHUNK_SIZE: usize = 4096;

/// A single RESP connection to a Redis node.
///
/// Not safe to share across tasks directly; [`MultiplexedConnection`](crate::core::multiplexed::MultiplexedConnection)
/// wraps one of these behind a background task to allow concurrent use.
pub struct Connection {
    stream: TcpStream,
    decoder: Decoder,
    encoder: Encoder,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
}

impl Connection {
    /// Wraps an already-connected [`TcpStream`].
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            decoder: Decoder::new(),
            encoder: Encoder::new(),
            read_timeout: None,
            write_timeout: None,
        }
    }

    /// Sets read/write timeouts applied to every frame operation.
    pub fn with_timeouts(mut self, read_timeout: Option<Duration>, write_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self.write_timeout = write_timeout;
        self
    }

    /// Encodes and writes a single frame to the socket.
    pub async fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.encoder.encode(frame);
        let data = self.encoder.take();

        let write = self.stream.write_all(&data);
        match self.write_timeout {
            Some(timeout) => tokio::time::timeout(timeout, write)
                .await
                .map_err(|_| Error::Protocol {
                    message: "write timed out".to_string(),
                })?
                .map_err(|e| Error::Io { source: e })?,
            None => write.await.map_err(|e| Error::Io { source: e })?,
        }

        Ok(())
    }

    /// Reads a single frame from the socket, pulling more bytes as needed.
    pub async fn read_frame(&mut self) -> Result<Frame> {
        loop {
            if let Some(frame) = self.decoder.decode().map_err(|message| Error::Protocol { message })? {
                return Ok(frame);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = self.stream.read(&mut chunk);
            let n = match self.read_timeout {
                Some(timeout) => tokio::time::timeout(timeout, read)
                    .await
                    .map_err(|_| Error::Protocol {
                        message: "read timed out".to_string(),
                    })?
                    .map_err(|e| Error::Io { source: e })?,
                None => read.await.map_err(|e| Error::Io { source: e })?,
            };

            if n == 0 {
                return Err(Error::Protocol {
                    message: "connection closed by peer".to_string(),
                });
            }

            self.decoder.append(&chunk[..n]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use tokio::sync::Barrier;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_connection_ping_pong() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let server_barrier = barrier.clone();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut conn = Connection::new(socket);
            server_barrier.wait().await;
            let frame = conn.read_frame().await.unwrap();
            assert_eq!(frame, Frame::SimpleString(b"PING".to_vec()));
            conn.write_frame(&Frame::SimpleString(b"PONG".to_vec()))
                .await
                .unwrap();
        });

        barrier.wait().await;
        let stream = TcpStream::connect(addr).await.unwrap();
        let mut conn = Connection::new(stream);
        conn.write_frame(&Frame::SimpleString(b"PING".to_vec()))
            .await
            .unwrap();
        let reply = conn.read_frame().await.unwrap();
        assert_eq!(reply, Frame::SimpleString(b"PONG".to_vec()));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_closed_by_peer() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            drop(socket);
        });

        let stream = TcpStream::connect(addr).await.unwrap();
        let mut conn = Connection::new(stream);
        server.await.unwrap();
        let result = conn.read_frame().await;
        assert!(result.is_err());
    }
}
