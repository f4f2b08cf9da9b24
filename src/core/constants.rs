//! Link constants.
//!
//! Defaults follow common MAVLink ground-station conventions; none of
//! them are enforced by the transport itself.

/// Default capacity of a telemetry send buffer.
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 1024;

/// Default capacity of a telemetry receive buffer.
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 1024;

/// Conventional UDP port a ground control station listens on.
pub const DEFAULT_GCS_PORT: u16 = 14550;

/// Conventional UDP port for the onboard side of the link.
pub const DEFAULT_LOCAL_PORT: u16 = 14551;
