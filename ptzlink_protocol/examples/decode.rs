//! Decodes hex-encoded VISCA wire bytes from the command line.
//!
//! ```sh
//! cargo run --example decode -- 81090612ff 90500102030405060708ff
//! ```
//!
//! Each argument is pushed into one shared [`FrameBuffer`], so a frame may
//! be split across arguments, and one argument may hold several frames.

#[macro_use]
extern crate tracing;

use ptzlink_protocol::{FrameBuffer, Message};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

type Result<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .compact()
        .init();

    let mut buffer = FrameBuffer::new();
    for arg in std::env::args().skip(1) {
        buffer.push(&hex::decode(&arg)?);

        loop {
            match buffer.next_frame() {
                Ok(Some(frame)) => match Message::decode(&frame) {
                    Some(msg) => info!("{frame:?}: {msg:?}"),
                    None => warn!("{frame:?}: unrecognized"),
                },
                Ok(None) => break,
                Err(e) => {
                    warn!("corrupt input ({e}), discarding {} bytes", buffer.resync());
                }
            }
        }
    }

    if !buffer.is_empty() {
        warn!("{} bytes of trailing partial frame", buffer.len());
    }

    Ok(())
}
