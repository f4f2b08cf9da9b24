//! The UDP link to the ground station.
//!
//! [`GcsLink`] owns one UDP socket and the two configured endpoints. All
//! datagram I/O is non-blocking: [`try_send`](GcsLink::try_send) and
//! [`try_recv`](GcsLink::try_recv) return immediately, reporting
//! would-block as `Ok(None)` rather than suspending the caller or raising
//! an error.
//!
//! The link is an explicitly constructed, explicitly owned value. Higher
//! layers ([`TelemetrySender`](crate::telemetry::TelemetrySender),
//! [`TelemetryReceiver`](crate::telemetry::TelemetryReceiver)) hold a
//! shared borrow of it, which is why every I/O method takes `&self`. The
//! interior [`Cell`] used for peer tracking makes the type `!Sync`: the
//! link is single-threaded by construction, not by convention.

use std::cell::Cell;
use std::io;
use std::net::SocketAddr;

use tokio::net::UdpSocket;

use crate::core::{LinkError, LinkResult};

use super::config::LinkConfig;

/// Non-blocking UDP link to a single ground control station.
///
/// Lifecycle: `Unbound` → [`connect`](Self::connect) → `Connected` →
/// [`disconnect`](Self::disconnect) → `Unbound`, with re-connect allowed.
/// Connecting while already connected closes the old socket first and
/// binds a fresh one; no descriptor is ever leaked.
#[derive(Debug)]
pub struct GcsLink {
    /// Write-once endpoint configuration.
    config: LinkConfig,
    /// The socket, or `None` while unbound.
    socket: Option<UdpSocket>,
    /// Source address of the most recent inbound datagram.
    ///
    /// Populated only by `try_recv`; never consulted by `try_send`, so a
    /// received datagram cannot redirect outbound traffic away from the
    /// configured ground station.
    last_peer: Cell<Option<SocketAddr>>,
}

impl GcsLink {
    /// Create an unbound link. No I/O happens until [`connect`](Self::connect).
    pub fn new(config: LinkConfig) -> Self {
        Self {
            config,
            socket: None,
            last_peer: Cell::new(None),
        }
    }

    /// The endpoint configuration this link was built with.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Whether the link currently holds a bound socket.
    pub fn is_connected(&self) -> bool {
        self.socket.is_some()
    }

    /// Bind the UDP socket to the configured local address.
    ///
    /// If the link is already connected the existing socket is closed
    /// before the new one is bound. On failure the link is left unbound
    /// and the error is returned; nothing panics and no descriptor
    /// survives a failed attempt.
    pub async fn connect(&mut self) -> LinkResult<()> {
        tracing::info!(
            "connecting to GCS {} from local port {}",
            self.config.remote_addr(),
            self.config.local_port()
        );

        if self.socket.take().is_some() {
            tracing::debug!("closing existing socket before reconnect");
        }

        let socket = UdpSocket::bind(self.config.local_addr()).await?;
        tracing::info!("link bound on {}", socket.local_addr()?);
        self.socket = Some(socket);
        Ok(())
    }

    /// Close the socket if one is open.
    ///
    /// Returns whether there was a socket to close. Idempotent: a second
    /// call is a harmless no-op reporting `false`.
    pub fn disconnect(&mut self) -> bool {
        match self.socket.take() {
            Some(_) => {
                tracing::info!("link to GCS {} closed", self.config.remote_addr());
                true
            }
            None => false,
        }
    }

    /// The address the socket is actually bound to.
    ///
    /// Useful when the configured local port is 0 (OS-assigned).
    pub fn local_addr(&self) -> LinkResult<SocketAddr> {
        let socket = self.socket.as_ref().ok_or(LinkError::NotConnected)?;
        Ok(socket.local_addr()?)
    }

    /// Send one datagram to the configured ground station, without blocking.
    ///
    /// Returns `Ok(Some(n))` with the byte count handed to the OS. A short
    /// write (`n` < payload length) signals an OS-level delivery problem
    /// for datagram payloads; it is logged and returned as-is, and the
    /// caller decides whether to retry. `Ok(None)` means the socket was
    /// not ready (would-block): transient and expected, try again later.
    pub fn try_send(&self, payload: &[u8]) -> LinkResult<Option<usize>> {
        let socket = self.socket.as_ref().ok_or(LinkError::NotConnected)?;
        match socket.try_send_to(payload, self.config.remote_addr()) {
            Ok(sent) => {
                if sent < payload.len() {
                    tracing::warn!(
                        "partial datagram send: {} of {} bytes to {}",
                        sent,
                        payload.len(),
                        self.config.remote_addr()
                    );
                }
                Ok(Some(sent))
            }
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(LinkError::Io(e)),
        }
    }

    /// Receive at most one datagram into `buf`, without blocking.
    ///
    /// Returns `Ok(Some((n, from)))` on success; `n` is 0 only for a
    /// genuinely empty datagram. `Ok(None)` means no datagram is currently
    /// available, a normal condition under non-blocking I/O and never an
    /// error. The source address is recorded and readable via
    /// [`last_peer`](Self::last_peer).
    pub fn try_recv(&self, buf: &mut [u8]) -> LinkResult<Option<(usize, SocketAddr)>> {
        let socket = self.socket.as_ref().ok_or(LinkError::NotConnected)?;
        match socket.try_recv_from(buf) {
            Ok((len, from)) => {
                self.last_peer.set(Some(from));
                Ok(Some((len, from)))
            }
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {
                tracing::trace!("no datagram available");
                Ok(None)
            }
            Err(e) => Err(LinkError::Io(e)),
        }
    }

    /// Source address of the most recent inbound datagram, if any.
    pub fn last_peer(&self) -> Option<SocketAddr> {
        self.last_peer.get()
    }
}
