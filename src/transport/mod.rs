//! GCSLINK - Transport Layer
//!
//! This module owns the UDP side of the crate:
//!
//! - **Address configuration**: [`LinkConfig`] fixes the ground station
//!   endpoint and the local bind port before the socket exists
//! - **The link**: [`GcsLink`] handles socket lifecycle (connect,
//!   disconnect, re-connect) and non-blocking datagram send/receive
//!
//! # Architecture
//!
//! The transport sits between the OS socket and the buffer-owning wrappers
//! in [`telemetry`](crate::telemetry). It moves whole datagrams and stays
//! agnostic to their contents.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     Message encoding (external)         │
//! ├─────────────────────────────────────────┤
//! │   TelemetrySender / TelemetryReceiver   │
//! ├─────────────────────────────────────────┤
//! │         Transport Layer                 │  ← This module
//! │      LinkConfig, GcsLink                │
//! ├─────────────────────────────────────────┤
//! │              UDP                        │
//! └─────────────────────────────────────────┘
//! ```

mod config;
mod socket;

pub use config::*;
pub use socket::*;
