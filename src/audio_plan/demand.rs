//! Channel demand - how many copies of each source channel the layout consumes

use super::planner::TrackAssignment;

/// Number of consumers for one source language's channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelDemand {
    /// Every slot resolving to the language consumes its left channel
    pub left: usize,
    /// Only stereo slots consume the right channel
    pub right: usize,
}

impl ChannelDemand {
    /// Whether the source must be split into a stereo pair
    pub fn needs_stereo(&self) -> bool {
        self.right > 0
    }
}

/// Demand per source language, in first-referenced order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemandTable {
    entries: Vec<(String, ChannelDemand)>,
}

impl DemandTable {
    pub fn get(&self, language: &str) -> Option<ChannelDemand> {
        self.entries
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, demand)| *demand)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ChannelDemand)> {
        self.entries.iter().map(|(code, demand)| (code.as_str(), *demand))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total labels consumed across all languages and sides
    pub fn total_tracks(&self) -> usize {
        self.entries.iter().map(|(_, d)| d.left + d.right).sum()
    }
}

/// Count left/right demand by scanning every assignment's resolved language
pub fn count_demand(assignments: &[TrackAssignment]) -> DemandTable {
    let mut table = DemandTable::default();

    for assignment in assignments {
        let idx = match table
            .entries
            .iter()
            .position(|(code, _)| *code == assignment.resolved_language)
        {
            Some(idx) => idx,
            None => {
                table
                    .entries
                    .push((assignment.resolved_language.clone(), ChannelDemand::default()));
                table.entries.len() - 1
            }
        };

        let demand = &mut table.entries[idx].1;
        demand.left += 1;
        if assignment.is_stereo() {
            demand.right += 1;
        }
    }

    for (language, demand) in table.iter() {
        tracing::debug!(
            language,
            left = demand.left,
            right = demand.right,
            "Channel demand"
        );
    }

    table
}
