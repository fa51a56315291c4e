//! FFmpeg filter graph synthesis
//!
//! Renders the per-language channel extraction and duplication filters,
//! the `-map` sequence in canonical slot order, and the full argument list.

pub mod command;
pub mod emitter;

pub use command::{build_command, MuxCommand};
pub use emitter::{emit_filter_graph, FilterGraph, VIDEO_MAP};
