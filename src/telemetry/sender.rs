//! Buffer-owning sender.
//!
//! Higher-level message encoders write into the sender's buffer and then
//! hand a byte count to [`send`](TelemetrySender::send); the sender never
//! tracks how much of the buffer is meaningful between calls.

use crate::core::{LinkError, LinkResult, DEFAULT_SEND_BUFFER_SIZE};
use crate::transport::GcsLink;

/// Fixed-capacity send buffer bound to one [`GcsLink`].
///
/// The buffer is exclusively owned by the sender and its capacity never
/// changes after construction. Transmission is delegated to the borrowed
/// link, so any number of senders can funnel through the same socket.
#[derive(Debug)]
pub struct TelemetrySender<'link> {
    /// Owned payload buffer.
    buf: Box<[u8]>,
    /// The shared transport, borrowed for the sender's lifetime.
    link: &'link GcsLink,
}

impl<'link> TelemetrySender<'link> {
    /// Create a sender with the default buffer capacity (1024 bytes).
    pub fn new(link: &'link GcsLink) -> Self {
        Self {
            buf: vec![0u8; DEFAULT_SEND_BUFFER_SIZE].into_boxed_slice(),
            link,
        }
    }

    /// Create a sender with a custom buffer capacity.
    ///
    /// A zero capacity is rejected with [`LinkError::ZeroCapacity`]; a
    /// sender that can never hold a payload is a construction bug worth
    /// surfacing immediately.
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
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Writable access to the owned buffer.
    ///
    /// The caller tracks how many bytes it filled and passes that count to
    /// [`send`](Self::send).
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Send the first `len` bytes of the buffer to the ground station.
    ///
    /// `len` greater than the capacity is an explicit
    /// [`LinkError::PayloadTooLarge`], never a silent overrun or a
    /// truncated datagram. Otherwise the transport's result is returned
    /// unchanged: `Ok(Some(n))` bytes handed to the OS, `Ok(None)` for
    /// would-block.
    pub fn send(&self, len: usize) -> LinkResult<Option<usize>> {
        if len > self.buf.len() {
            return Err(LinkError::PayloadTooLarge {
                len,
                capacity: self.buf.len(),
            });
        }
        self.link.try_send(&self.buf[..len])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::net::UdpSocket;

    use super::*;
    use crate::transport::LinkConfig;

    async fn connected_pair() -> (GcsLink, UdpSocket) {
        let gcs = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let gcs_port = gcs.local_addr().unwrap().port();

        let mut link = GcsLink::new(LinkConfig::new("127.0.0.1", gcs_port, 0).unwrap());
        link.connect().await.unwrap();
        (link, gcs)
    }

    #[tokio::test]
    async fn test_default_capacity() {
        let link = GcsLink::new(LinkConfig::new("127.0.0.1", 14550, 0).unwrap());
        let sender = TelemetrySender::new(&link);
        assert_eq!(sender.capacity(), 1024);
        assert_eq!(sender.buffer().len(), 1024);
    }

    #[tokio::test]
    async fn test_zero_capacity_rejected() {
        let link = GcsLink::new(LinkConfig::new("127.0.0.1", 14550, 0).unwrap());
        let err = TelemetrySender::with_capacity(&link, 0).unwrap_err();
        assert!(matches!(err, LinkError::ZeroCapacity));
    }

    #[tokio::test]
    async fn test_oversized_send_rejected() {
        let link = GcsLink::new(LinkConfig::new("127.0.0.1", 14550, 0).unwrap());
        let sender = TelemetrySender::with_capacity(&link, 4).unwrap();

        let err = sender.send(10).unwrap_err();
        assert!(matches!(
            err,
            LinkError::PayloadTooLarge { len: 10, capacity: 4 }
        ));
    }

    #[tokio::test]
    async fn test_full_capacity_send_allowed() {
        let (link, gcs) = connected_pair().await;
        let mut sender = TelemetrySender::with_capacity(&link, 8).unwrap();
        sender.buffer_mut().copy_from_slice(&[0xAB; 8]);

        assert_eq!(sender.send(8).unwrap(), Some(8));

        let mut buf = [0u8; 16];
        let (len, _) = gcs.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], &[0xAB; 8]);
    }

    #[tokio::test]
    async fn test_round_trip_bytes_in_order() {
        let (link, gcs) = connected_pair().await;

        let mut sender = TelemetrySender::new(&link);
        let payload: Vec<u8> = (0x01..=0x0A).collect();
        sender.buffer_mut()[..10].copy_from_slice(&payload);

        assert_eq!(sender.send(10).unwrap(), Some(10));

        let mut buf = [0u8; 64];
        let (len, _) = gcs.recv_from(&mut buf).await.unwrap();
        assert_eq!(len, 10);
        assert_eq!(&buf[..10], payload.as_slice());
    }

    #[tokio::test]
    async fn test_gcs_observes_exact_payload() {
        let (link, gcs) = connected_pair().await;

        let mut sender = TelemetrySender::new(&link);
        let payload = hex::decode("0102030405").unwrap();
        sender.buffer_mut()[..payload.len()].copy_from_slice(&payload);

        assert_eq!(sender.send(payload.len()).unwrap(), Some(5));

        let mut buf = [0u8; 64];
        let recv = tokio::time::timeout(Duration::from_secs(1), gcs.recv_from(&mut buf));
        let (len, _) = recv.await.unwrap().unwrap();
        assert_eq!(&buf[..len], &[1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_send_on_unbound_link_fails() {
        let link = GcsLink::new(LinkConfig::new("127.0.0.1", 14550, 0).unwrap());
        let sender = TelemetrySender::new(&link);
        assert!(matches!(sender.send(1).unwrap_err(), LinkError::NotConnected));
    }

    #[tokio::test]
    async fn test_multiple_senders_share_one_link() {
        let (link, gcs) = connected_pair().await;

        let mut a = TelemetrySender::with_capacity(&link, 16).unwrap();
        let mut b = TelemetrySender::with_capacity(&link, 16).unwrap();
        a.buffer_mut()[..2].copy_from_slice(b"aa");
        b.buffer_mut()[..2].copy_from_slice(b"bb");

        a.send(2).unwrap();
        b.send(2).unwrap();

        let mut buf = [0u8; 16];
        let (len, _) = gcs.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], b"aa");
        let (len, _) = gcs.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], b"bb");
    }
}
