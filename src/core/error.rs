//! Error types for the GCSLINK transport.
//!
//! Every failure crosses the transport boundary as a [`LinkError`] value;
//! nothing in this crate panics or terminates the process. Transient
//! non-blocking conditions (would-block, no datagram available) are not
//! errors at all: they surface as `Ok(None)` from the try-style calls.

use std::io;
use std::net::AddrParseError;

use thiserror::Error;

/// Errors reported by the link and its buffer wrappers.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The ground station host string is not a valid IPv4 address.
    #[error("invalid ground station address: {0}")]
    InvalidAddress(#[from] AddrParseError),

    /// Send or receive was attempted before `connect` (or after
    /// `disconnect`).
    #[error("link is not connected")]
    NotConnected,

    /// A sender or receiver was constructed with a zero-sized buffer.
    #[error("buffer capacity must be non-zero")]
    ZeroCapacity,

    /// A send was requested for more bytes than the buffer holds.
    #[error("payload length {len} exceeds buffer capacity {capacity}")]
    PayloadTooLarge {
        /// Requested payload length.
        len: usize,
        /// Fixed capacity of the buffer.
        capacity: usize,
    },

    /// I/O error (socket create, bind, send, or receive).
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for link operations.
pub type LinkResult<T> = Result<T, LinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_from_parse() {
        let err: LinkError = "not-an-ip".parse::<std::net::Ipv4Addr>().unwrap_err().into();
        assert!(matches!(err, LinkError::InvalidAddress(_)));
    }

    #[test]
    fn test_payload_too_large_message() {
        let err = LinkError::PayloadTooLarge { len: 10, capacity: 4 };
        assert_eq!(
            err.to_string(),
            "payload length 10 exceeds buffer capacity 4"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: LinkError = io::Error::new(io::ErrorKind::AddrInUse, "bind").into();
        assert!(matches!(err, LinkError::Io(_)));
    }
}
