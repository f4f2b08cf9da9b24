//! Buffer-owning receiver.
//!
//! The inbound mirror of [`TelemetrySender`](super::TelemetrySender): an
//! owned fixed-capacity buffer plus a borrowed link. After a successful
//! [`recv`](TelemetryReceiver::recv), the first `n` bytes of the buffer
//! hold the datagram payload for the message decoder above to parse.

use std::net::SocketAddr;

use crate::core::{LinkError, LinkResult, DEFAULT_RECV_BUFFER_SIZE};
use crate::transport::GcsLink;

/// Fixed-capacity receive buffer bound to one [`GcsLink`].
#[derive(Debug)]
pub struct TelemetryReceiver<'link> {
    /// Owned inbound buffer.
    buf: Box<[u8]>,
    /// The shared transport, borrowed for the receiver's lifetime.
    link: &'link GcsLink,
}

impl<'link> TelemetryReceiver<'link> {
    /// Create a receiver with the default buffer capacity (1024 bytes).
    pub fn new(link: &'link GcsLink) -> Self {
        Self {
            buf: vec![0u8; DEFAULT_RECV_BUFFER_SIZE].into_boxed_slice(),
            link,
        }
    }

    /// Create a receiver with a custom buffer capacity.
    ///
    /// Zero capacity is rejected with [`LinkError::ZeroCapacity`].
    pub fn with_capacity(link: &'link GcsLink, capacity: usize) -> LinkResult<Self> {
        if capacity == 0 {
            return Err(LinkError::ZeroCapacity);
        }
        Ok(Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            link,
        })
    }

    /// The fixed buffer capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Read access to the owned buffer.
    ///
    /// Only the first `n` bytes are meaningful after `recv` returned
    /// `Ok(Some((n, _)))`; the rest is stale.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Poll the link for one inbound datagram, without blocking.
    ///
    /// A datagram longer than the buffer is truncated by the OS to the
    /// buffer's capacity, as with any fixed receive window. `Ok(None)`
    /// means nothing is pending; poll again later.
    pub fn recv(&mut self) -> LinkResult<Option<(usize, SocketAddr)>> {
        self.link.try_recv(&mut self.buf)
    }
}
