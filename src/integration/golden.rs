//! Golden argument lists

use super::fixtures::{self, audio_path, DESTINATION, OUTPUT_NAME, VIDEO};
use crate::config::MuxConfig;
use crate::error::MuxError;
use crate::plan::plan_multiplex;

fn labels(base: &str, count: usize) -> String {
    (0..count).map(|i| format!("[{}_{}]", base, i)).collect()
}

fn output() -> String {
    format!("{}/{}", DESTINATION, OUTPUT_NAME)
}

#[test]
fn test_norwegian_english_finnish_golden() {
    let plan = plan_multiplex(&fixtures::norwegian_english_finnish(), &MuxConfig::default()).unwrap();

    let filter = [
        "[1:a]aresample=48000,channelsplit=channel_layout=stereo[nor_l][nor_r]".to_string(),
        format!("[nor_l]asplit=10{}", labels("nor_l", 10)),
        format!("[nor_r]asplit=3{}", labels("nor_r", 3)),
        "[2:a]aresample=48000,channelsplit=channel_layout=stereo[eng_l][eng_r]".to_string(),
        "[3:a]aresample=48000,pan=mono|c0=c0[fin_l]".to_string(),
    ]
    .join(";");

    let mut expected: Vec<String> = [
        "-hide_banner", "-loglevel", "error", "-progress", "pipe:1", "-y",
        "-i", VIDEO,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for code in ["nor", "eng", "fin"] {
        expected.push("-i".to_string());
        expected.push(audio_path(code));
    }
    expected.push("-filter_complex".to_string());
    expected.push(filter);

    let maps = [
        "0:v",
        // nor, deu, nld: Norwegian pairs
        "[nor_l_0]", "[nor_r_0]",
        "[nor_l_1]", "[nor_r_1]",
        "[nor_l_2]", "[nor_r_2]",
        // eng
        "[eng_l]", "[eng_r]",
        // fra, spa
        "[nor_l_3]", "[nor_l_4]",
        // fin
        "[fin_l]",
        // rus, por, ron, tur, pol
        "[nor_l_5]", "[nor_l_6]", "[nor_l_7]", "[nor_l_8]", "[nor_l_9]",
    ];
    for map in maps {
        expected.push("-map".to_string());
        expected.push(map.to_string());
    }
    for arg in ["-c:v", "copy", "-c:a", "pcm_s24le"] {
        expected.push(arg.to_string());
    }
    expected.push(output());

    assert_eq!(plan.args(), expected.as_slice());
}

#[test]
fn test_fallback_only_golden() {
    let plan = plan_multiplex(&fixtures::fallback_only("nor"), &MuxConfig::default()).unwrap();

    assert_eq!(
        plan.graph.description(),
        format!(
            "[1:a]aresample=48000,channelsplit=channel_layout=stereo[nor_l][nor_r];\
             [nor_l]asplit=12{};[nor_r]asplit=4{}",
            labels("nor_l", 12),
            labels("nor_r", 4)
        )
    );

    let expected_maps: Vec<String> = std::iter::once("0:v".to_string())
        .chain((0..4).flat_map(|i| [format!("[nor_l_{}]", i), format!("[nor_r_{}]", i)]))
        .chain((4..12).map(|i| format!("[nor_l_{}]", i)))
        .collect();
    assert_eq!(plan.graph.maps, expected_maps);
}

#[test]
fn test_custom_encoding_settings() {
    let config = MuxConfig {
        sample_rate: 44100,
        audio_codec: "pcm_s16le".to_string(),
        overwrite: false,
        ..Default::default()
    };
    let plan = plan_multiplex(&fixtures::norwegian_english_finnish(), &config).unwrap();
    let args = plan.args();

    assert_eq!(&args[..6], ["-hide_banner", "-loglevel", "error", "-progress", "pipe:1", "-i"]);
    assert!(plan.graph.description().starts_with("[1:a]aresample=44100,"));
    assert_eq!(&args[args.len() - 5..], ["-c:v", "copy", "-c:a", "pcm_s16le", output().as_str()]);
}

#[test]
fn test_missing_fallback_emits_nothing() {
    let request = fixtures::request_with("nor", &["eng", "fin"]);
    let err = plan_multiplex(&request, &MuxConfig::default()).unwrap_err();
    assert!(matches!(err, MuxError::Configuration(_)));
    assert!(err.to_string().contains("nor"));
}
