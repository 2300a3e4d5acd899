use bytes::{BufMut, BytesMut};

use crate::proto::frame::Frame;

/// A RESP encoder that converts [`Frame`] types to bytes.
///
/// The encoder accumulates data in an internal buffer and can be used
/// to encode multiple frames sequentially.
///
/// # Example
///
/// ```
/// use clustermux::proto::codec::Encoder;
/// use clustermux::proto::frame::Frame;
///
/// let mut encoder = Encoder::new();
/// encoder.encode(&Frame::SimpleString(b"OK".to_vec()));
/// let data = encoder.take();
/// assert!(!data.is_empty());
/// ```
pub struct Encoder {
    buf: BytesMut,
}

impl Encoder {
    /// Creates a new encoder with an empty buffer.
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    /// Encodes a frame into the internal buffer using RESP protocol.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to encode
    pub fn encode(&mut self, frame: &Frame) {
        match frame {
            Frame::SimpleString(s) => {
                self.buf.put_u8(b'+');
                self.buf.extend_from_slice(s);
                self.buf.extend_from_slice(b"\r\n");
            }
            Frame::Error(e) => {
                self.buf.put_u8(b'-');
                self.buf.extend_from_slice(e);
                self.buf.extend_from_slice(b"\r\n");
            }
            Frame::Integer(n) => {
                self.buf.put_u8(b':');
                self.buf.extend_from_slice(n.to_string().as_bytes());
                self.buf.extend_from_slice(b"\r\n");
            }
            Frame::BulkString(s) => {
                self.buf.put_u8(b'$');
                if let Some(data) = s {
                    self.buf
                        .extend_from_slice(data.len().to_string().as_bytes());
                    self.buf.extend_from_slice(b"\r\n");
                    self.buf.extend_from_slice(data);
                } else {
                    self.buf.extend_from_slice(b"-1");
                }
                self.buf.extend_from_slice(b"\r\n");
            }
            Frame::Array(a) => {
                self.buf.put_u8(b'*');
                self.buf.extend_from_slice(a.len().to_string().as_bytes());
                self.buf.extend_from_slice(b"\r\n");
                for item in a {
                    self.encode(item);
                }
            }
            Frame::Null => {
                self.buf.extend_from_slice(b"$-1\r\n");
            }
        }
    }

    /// Takes the encoded data from the buffer, leaving it empty.
    ///
    /// Unlike [`finish`](Encoder::finish), this method allows reusing the encoder.
    ///
    /// # Returns
    ///
    /// The accumulated bytes
    pub fn take(&mut self) -> BytesMut {
        std::mem::replace(&mut self.buf, BytesMut::new())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
