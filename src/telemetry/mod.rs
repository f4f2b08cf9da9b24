//! GCSLINK - Telemetry buffer wrappers
//!
//! Buffer-owning endpoints of the link: [`TelemetrySender`] fills and
//! transmits fixed-capacity payloads, [`TelemetryReceiver`] collects
//! inbound datagrams. Both borrow the one shared
//! [`GcsLink`](crate::transport::GcsLink) and stay entirely agnostic to
//! what the bytes mean; message encoding and decoding belong to the
//! layer above.

mod receiver;
mod sender;

pub use receiver::*;
pub use sender::*;
