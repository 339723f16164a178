//! Media file probing module.
//!
//! Only the primary video stream is inspected: its dimensions, and a runtime
//! derived from frame count and frame rate.

mod ffprobe;
mod types;

pub use ffprobe::probe_with_ffprobe;
pub use types::*;
