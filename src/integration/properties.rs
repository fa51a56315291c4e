//! Layout properties that hold for every valid request

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use super::fixtures;
use crate::config::MuxConfig;
use crate::filtergraph::VIDEO_MAP;
use crate::languages::AUDIO_TRACK_COUNT;
use crate::plan::{plan_multiplex, MuxPlan};
use crate::request::MuxRequest;

fn plan(request: &MuxRequest) -> MuxPlan {
    plan_multiplex(request, &MuxConfig::default()).unwrap()
}

/// Output labels of every statement in the graph
fn produced_labels(plan: &MuxPlan) -> Vec<String> {
    let mut produced = Vec::new();
    for statement in &plan.graph.statements {
        // Output pads follow the filter expression, which contains no '['.
        let after_input = statement.split_once(']').map(|(_, rest)| rest).unwrap_or("");
        let outputs = &after_input[after_input.find('[').unwrap_or(after_input.len())..];
        produced.extend(
            outputs
                .split(']')
                .filter(|s| !s.is_empty())
                .map(|s| format!("{}]", s)),
        );
    }
    produced
}

#[test]
fn test_always_seventeen_maps() {
    for request in fixtures::valid_requests() {
        let plan = plan(&request);
        assert_eq!(plan.graph.maps.len(), AUDIO_TRACK_COUNT + 1);
        assert_eq!(plan.graph.maps[0], VIDEO_MAP);
        let map_flags = plan.args().iter().filter(|a| *a == "-map").count();
        assert_eq!(map_flags, 17);
    }
}

#[test]
fn test_single_consumers_have_no_split() {
    for request in fixtures::valid_requests() {
        let plan = plan(&request);
        for (language, demand) in plan.demand.iter() {
            let left_split = format!("[{}_l]asplit=", language);
            let right_split = format!("[{}_r]asplit=", language);
            let description = plan.graph.description();

            assert_eq!(description.contains(&left_split), demand.left > 1);
            assert_eq!(description.contains(&right_split), demand.right > 1);
            if demand.left > 1 {
                assert!(description.contains(&format!("{}{}[", left_split, demand.left)));
            }
            if demand.right > 1 {
                assert!(description.contains(&format!("{}{}[", right_split, demand.right)));
            }
        }
    }
}

#[test]
fn test_every_copy_consumed_exactly_once() {
    for request in fixtures::valid_requests() {
        let plan = plan(&request);
        let audio_maps: Vec<&String> = plan.graph.audio_maps().iter().collect();

        let unique: HashSet<&String> = audio_maps.iter().copied().collect();
        assert_eq!(unique.len(), audio_maps.len(), "label consumed twice");

        // Labels that feed a split are intermediate, everything else is mapped.
        let split_inputs: HashSet<String> = plan
            .graph
            .statements
            .iter()
            .filter(|s| s.contains("asplit="))
            .filter_map(|s| s.split_once(']').map(|(input, _)| format!("{}]", input)))
            .collect();
        let terminal: HashSet<String> = produced_labels(&plan)
            .into_iter()
            .filter(|l| !split_inputs.contains(l))
            .collect();
        let mapped: HashSet<String> = audio_maps.iter().map(|m| m.to_string()).collect();
        assert_eq!(terminal, mapped);
    }
}

#[test]
fn test_insertion_order_does_not_matter() {
    let forward = fixtures::request_with("spa", &["spa", "fra", "por", "ron", "nor"]);

    let mut reversed = MuxRequest::new(
        fixtures::VIDEO,
        "spa",
        fixtures::DESTINATION,
        fixtures::OUTPUT_NAME,
    );
    for code in ["nor", "ron", "por", "fra", "spa"] {
        reversed = reversed.with_audio(code, fixtures::audio_path(code));
    }

    // Mixed-case keys land on the same slots.
    let mut shouted = MuxRequest::new(
        fixtures::VIDEO,
        "SPA",
        fixtures::DESTINATION,
        fixtures::OUTPUT_NAME,
    );
    shouted.audio_files = ["SPA", "Fra", "POR", "ron", "NOR"]
        .iter()
        .map(|code| {
            let path = PathBuf::from(fixtures::audio_path(&code.to_lowercase()));
            (code.to_string(), path)
        })
        .collect::<BTreeMap<_, _>>();

    let expected = plan(&forward);
    assert_eq!(plan(&reversed).args(), expected.args());
    assert_eq!(plan(&shouted).args(), expected.args());
}

#[test]
fn test_stereo_language_list_is_inert() {
    let base = fixtures::request_with("nor", &["nor", "eng", "fin"]);
    let with_list = base.clone().with_stereo_languages(&["fin", "pol"]);
    assert_eq!(plan(&base).args(), plan(&with_list).args());
}

#[test]
fn test_missing_fallback_fails_for_every_language() {
    for fallback in ["nor", "eng", "fin", "pol"] {
        let request = fixtures::request_with(fallback, &["deu", "nld"]);
        let err = plan_multiplex(&request, &MuxConfig::default()).unwrap_err();
        assert!(err.is_configuration());
    }
}

#[test]
fn test_inputs_follow_first_reference() {
    let plan = plan(&fixtures::request_with("spa", &["spa", "fra", "por", "ron", "nor"]));
    let languages: Vec<&str> = plan
        .slots
        .sources
        .iter()
        .map(|s| s.language.as_str())
        .collect();
    // nor owns slot 0; slots 1-3 borrow spa before fra (slot 4) is reached.
    assert_eq!(languages, vec!["nor", "spa", "fra", "por", "ron"]);
    assert_eq!(plan.command.inputs[0].to_str(), Some(fixtures::VIDEO));
}
