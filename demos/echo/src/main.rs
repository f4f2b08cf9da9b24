//! GCSLINK Echo Demo
//!
//! Exercises the full uplink path end to end on one machine:
//!
//! - `gcs` mode binds a plain UDP socket and echoes every datagram back to
//!   its source, standing in for a ground control station.
//! - `uplink` mode drives the library: configure a [`GcsLink`], connect,
//!   push counter-stamped payloads through a [`TelemetrySender`], and poll
//!   a [`TelemetryReceiver`] for the echoes.
//!
//! Usage:
//!
//! ```text
//! gcslink-echo gcs <port>
//! gcslink-echo uplink <gcs_host> <gcs_port> <local_port>
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default `info`).

use std::env;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use tokio::net::UdpSocket;
use tracing_subscriber::EnvFilter;

use gcslink::prelude::*;

/// Rounds the uplink side sends before exiting.
const UPLINK_ROUNDS: u64 = 10;

/// How long the uplink side waits for each echo.
const ECHO_DEADLINE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("gcs") => {
            let port: u16 = args
                .get(2)
                .context("usage: gcslink-echo gcs <port>")?
                .parse()?;
            run_gcs(port).await
        }
        Some("uplink") if args.len() >= 5 => {
            let gcs_port: u16 = args[3].parse()?;
            let local_port: u16 = args[4].parse()?;
            run_uplink(&args[2], gcs_port, local_port).await
        }
        Some("uplink") => bail!("usage: gcslink-echo uplink <gcs_host> <gcs_port> <local_port>"),
        _ => bail!("usage: gcslink-echo <gcs|uplink> ..."),
    }
}

/// Stand-in ground control station: echo every datagram to its source.
async fn run_gcs(port: u16) -> Result<()> {
    let socket = UdpSocket::bind(("0.0.0.0", port)).await?;
    tracing::info!("GCS echo peer listening on {}", socket.local_addr()?);

    let mut buf = [0u8; 2048];
    loop {
        let (len, from) = socket.recv_from(&mut buf).await?;
        tracing::info!("echoing {} bytes back to {}", len, from);
        socket.send_to(&buf[..len], from).await?;
    }
}

/// Onboard side: send counter payloads, poll for echoes.
async fn run_uplink(gcs_host: &str, gcs_port: u16, local_port: u16) -> Result<()> {
    let config = LinkConfig::new(gcs_host, gcs_port, local_port)?;
    let mut link = GcsLink::new(config);
    link.connect().await?;

    let mut sender = TelemetrySender::new(&link);
    let mut receiver = TelemetryReceiver::new(&link);

    for seq in 0..UPLINK_ROUNDS {
        sender.buffer_mut()[..8].copy_from_slice(&seq.to_le_bytes());
        match sender.send(8)? {
            Some(sent) => tracing::info!("sent frame {} ({} bytes)", seq, sent),
            None => {
                tracing::warn!("socket not ready, skipping frame {}", seq);
                continue;
            }
        }

        let deadline = Instant::now() + ECHO_DEADLINE;
        loop {
            match receiver.recv()? {
                Some((len, from)) => {
                    tracing::info!("echo of {} bytes from {}", len, from);
                    break;
                }
                None if Instant::now() < deadline => {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
                None => {
                    tracing::warn!("no echo for frame {} within {:?}", seq, ECHO_DEADLINE);
                    break;
                }
            }
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    Ok(())
}
