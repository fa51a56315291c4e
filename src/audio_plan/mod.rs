//! Audio track planning module
//!
//! This module maps a sparse set of per-language audio files onto the fixed
//! broadcast layout:
//! - Slot planning (own file or borrowed fallback per canonical language)
//! - Channel demand counting per source language
//! - Ordered label pools drained in slot order

pub mod demand;
pub mod planner;
pub mod pool;

pub use demand::{count_demand, ChannelDemand, DemandTable};
pub use planner::{plan_slots, SlotPlan, SourceFile, TrackAssignment};
pub use pool::{base_label, channel_labels, ChannelSide, LabelPools, LabelQueue};
