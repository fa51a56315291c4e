//! Multiplex planning pipeline
//!
//! Runs the single forward pass from request to argument list:
//! slot planning, demand counting, filter graph emission, command assembly.
//! Pure and synchronous; safe to call concurrently for independent requests.

use crate::audio_plan::{count_demand, plan_slots, DemandTable, SlotPlan};
use crate::config::MuxConfig;
use crate::error::Result;
use crate::filtergraph::{build_command, emit_filter_graph, FilterGraph, MuxCommand};
use crate::languages::LanguageTable;
use crate::request::MuxRequest;

/// Every intermediate decision plus the final command
#[derive(Debug, Clone)]
pub struct MuxPlan {
    pub slots: SlotPlan,
    pub demand: DemandTable,
    pub graph: FilterGraph,
    pub command: MuxCommand,
}

impl MuxPlan {
    /// Argument tokens handed to the executor
    pub fn args(&self) -> &[String] {
        &self.command.args
    }
}

/// Plan a multiplex with the language table from `config`
pub fn plan_multiplex(request: &MuxRequest, config: &MuxConfig) -> Result<MuxPlan> {
    let table = config.language_table()?;
    plan_multiplex_with_table(&table, request, config)
}

/// Plan a multiplex against an explicit language table
pub fn plan_multiplex_with_table(
    table: &LanguageTable,
    request: &MuxRequest,
    config: &MuxConfig,
) -> Result<MuxPlan> {
    let slots = plan_slots(table, request)?;
    let demand = count_demand(&slots.assignments);
    let graph = emit_filter_graph(&slots, &demand, config.sample_rate)?;
    let command = build_command(
        &request.video_file,
        &slots.sources,
        &graph,
        &request.output_path(),
        config,
    );

    tracing::info!(
        fallback = %slots.fallback_language,
        sources = slots.sources.len(),
        borrowed = slots.borrowed_count(),
        filters = graph.statements.len(),
        audio_tracks = graph.audio_maps().len(),
        "Multiplex planned"
    );

    Ok(MuxPlan {
        slots,
        demand,
        graph,
        command,
    })
}
