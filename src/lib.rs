//! # GCSLINK
//!
//! **G**round **C**ontrol **S**tation **Link**
//!
//! GCSLINK is a minimal, non-blocking UDP transport for pushing telemetry
//! and command byte buffers from an onboard process to a single ground
//! control station. It provides:
//!
//! - **Simplicity**: one socket, one configured peer, raw datagrams
//! - **Non-blocking I/O**: send/receive never suspend the caller;
//!   would-block is reported as `Ok(None)`, not as an error
//! - **Explicit ownership**: the link is an ordinary value the caller
//!   constructs and owns; senders and receivers borrow it
//! - **Payload agnosticism**: no framing, headers, or checksums; message
//!   encoding lives entirely in the layer above
//!
//! ## Modules
//!
//! - [`core`]: Error types and protocol constants
//! - [`transport`]: Address configuration and the UDP link
//! - [`telemetry`]: Buffer-owning sender/receiver wrappers
//!
//! ## Example Usage
//!
//! ```no_run
//! use gcslink::prelude::*;
//!
//! # async fn run() -> LinkResult<()> {
//! // Configure the GCS peer and the local bind port.
//! let config = LinkConfig::new("10.42.0.1", 14550, 14551)?;
//!
//! let mut link = GcsLink::new(config);
//! link.connect().await?;
//!
//! // Fill a sender's buffer and push one datagram.
//! let mut sender = TelemetrySender::new(&link);
//! sender.buffer_mut()[..5].copy_from_slice(&[1, 2, 3, 4, 5]);
//! match sender.send(5)? {
//!     Some(sent) => println!("sent {sent} bytes"),
//!     None => println!("socket not ready, try again later"),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod telemetry;
pub mod transport;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::telemetry::{TelemetryReceiver, TelemetrySender};
    pub use crate::transport::{GcsLink, LinkConfig};
}

// Re-export commonly used items at crate root
pub use crate::core::{LinkError, LinkResult};
pub use crate::telemetry::{TelemetryReceiver, TelemetrySender};
pub use crate::transport::{GcsLink, LinkConfig};
