//! Filter graph emitter

use crate::audio_plan::{
    base_label, channel_labels, ChannelDemand, ChannelSide, DemandTable, LabelPools, SlotPlan,
    SourceFile,
};
use crate::error::{MuxError, Result};
use crate::languages::{AUDIO_TRACK_COUNT, SLOT_COUNT};

/// Map reference of the passthrough video stream
pub const VIDEO_MAP: &str = "0:v";

/// Filter statements plus map references in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGraph {
    /// Statements in source-encounter order
    pub statements: Vec<String>,
    /// `-map` values: video first, then 16 audio labels in slot order
    pub maps: Vec<String>,
}

impl FilterGraph {
    /// Value of the `-filter_complex` flag
    pub fn description(&self) -> String {
        self.statements.join(";")
    }

    /// Audio map references only
    pub fn audio_maps(&self) -> &[String] {
        &self.maps[1..]
    }
}

/// Emit the filter graph and drain the label pools in slot order
pub fn emit_filter_graph(
    plan: &SlotPlan,
    demand: &DemandTable,
    sample_rate: u32,
) -> Result<FilterGraph> {
    if plan.assignments.len() != SLOT_COUNT {
        return Err(MuxError::AllocationInvariant(format!(
            "expected {} slot assignments, got {}",
            SLOT_COUNT,
            plan.assignments.len()
        )));
    }

    let mut statements = Vec::new();
    let mut pools = LabelPools::new();

    for source in &plan.sources {
        let source_demand = demand.get(&source.language).ok_or_else(|| {
            MuxError::AllocationInvariant(format!(
                "no channel demand recorded for {}",
                source.language
            ))
        })?;
        if source_demand.left == 0 {
            return Err(MuxError::AllocationInvariant(format!(
                "source {} is attached but never consumed",
                source.language
            )));
        }

        statements.push(extraction_filter(source, source_demand, sample_rate));

        for (side, count) in [
            (ChannelSide::Left, source_demand.left),
            (ChannelSide::Right, source_demand.right),
        ] {
            let labels = channel_labels(&source.language, side, count);
            if count > 1 {
                statements.push(split_filter(&base_label(&source.language, side), &labels));
            }
            pools.insert(&source.language, side, labels);
        }
    }

    let mut maps = Vec::with_capacity(AUDIO_TRACK_COUNT + 1);
    maps.push(VIDEO_MAP.to_string());

    for assignment in &plan.assignments {
        let language = &assignment.resolved_language;
        maps.push(bracket(&pools.take_next(language, ChannelSide::Left)?));
        if assignment.is_stereo() {
            maps.push(bracket(&pools.take_next(language, ChannelSide::Right)?));
        }
    }

    pools.ensure_drained()?;

    if maps.len() != AUDIO_TRACK_COUNT + 1 {
        return Err(MuxError::AllocationInvariant(format!(
            "expected {} audio maps, produced {}",
            AUDIO_TRACK_COUNT,
            maps.len() - 1
        )));
    }

    for statement in &statements {
        tracing::debug!(filter = %statement, "Filter statement");
    }

    Ok(FilterGraph { statements, maps })
}

/// Resample the source and expose its channels under base labels
fn extraction_filter(source: &SourceFile, demand: ChannelDemand, sample_rate: u32) -> String {
    let left = base_label(&source.language, ChannelSide::Left);
    if demand.needs_stereo() {
        let right = base_label(&source.language, ChannelSide::Right);
        format!(
            "[{}:a]aresample={},channelsplit=channel_layout=stereo[{}][{}]",
            source.ordinal, sample_rate, left, right
        )
    } else {
        format!(
            "[{}:a]aresample={},pan=mono|c0=c0[{}]",
            source.ordinal, sample_rate, left
        )
    }
}

/// Fan one labelled stream out into numbered copies
fn split_filter(input: &str, outputs: &[String]) -> String {
    let labels: String = outputs.iter().map(|l| bracket(l)).collect();
    format!("[{}]asplit={}{}", input, outputs.len(), labels)
}

fn bracket(label: &str) -> String {
    format!("[{}]", label)
}
