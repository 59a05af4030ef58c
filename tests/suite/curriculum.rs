//! Curriculum files at the serde boundary.

use numvault_engine::{Curriculum, LevelMode};
use serde_json::json;

use crate::common::BUILTIN_CURRICULUM;

#[test]
fn builtin_curriculum_is_valid() {
    let curriculum = numvault_config::parse_curriculum(BUILTIN_CURRICULUM).unwrap();
    let levels = curriculum.levels();

    // Place value first, then vaults.
    assert!(matches!(levels[0].mode(), LevelMode::NumberInput(_)));
    assert!(
        levels
            .iter()
            .any(|level| matches!(level.mode(), LevelMode::VerticalSubtraction(_)))
    );

    // At least one vault forces borrowing across a zero.
    assert!(levels.iter().any(|level| match level.mode() {
        LevelMode::VerticalSubtraction(problem) => problem.minuend()[1..]
            .iter()
            .any(|&d| u8::from(d) == 0),
        LevelMode::NumberInput(_) => false,
    }));
}

#[test]
fn json_curriculum_round_trips_through_validation() {
    let curriculum: Curriculum = serde_json::from_value(json!({
        "levels": [
            { "id": "pv", "mode": "number_input", "instruction": "Build 305", "target": [3, 0, 5] },
            { "id": "vault", "mode": "vertical_math", "minuend": [6, 0, 3], "subtrahend": [2, 4, 7] }
        ]
    }))
    .unwrap();
    assert_eq!(curriculum.len(), 2);
    assert_eq!(curriculum.levels()[1].column_count(), 3);
}

#[test]
fn invalid_curricula_are_rejected() {
    let cases = [
        json!({ "levels": [] }),
        json!({ "levels": [
            { "id": "a", "mode": "number_input", "instruction": "x", "target": [1] },
            { "id": "a", "mode": "number_input", "instruction": "y", "target": [2] }
        ]}),
        json!({ "levels": [
            { "id": "a", "mode": "vertical_math", "minuend": [1, 2], "subtrahend": [3, 4] }
        ]}),
        json!({ "levels": [
            { "id": "a", "mode": "vertical_math", "minuend": [1, 2, 3], "subtrahend": [4, 5] }
        ]}),
        json!({ "levels": [
            { "id": "a", "mode": "number_input", "instruction": "x", "target": [10] }
        ]}),
        json!({ "levels": [
            { "id": "a", "mode": "number_input", "instruction": "x", "target": [] }
        ]}),
        json!({ "levels": [
            { "id": "a", "mode": "long_division", "dividend": [4, 2] }
        ]}),
    ];

    for case in cases {
        let result = serde_json::from_value::<Curriculum>(case.clone());
        assert!(result.is_err(), "accepted {case}");
    }
}

#[test]
fn curriculum_file_overrides_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("levels.toml");
    std::fs::write(
        &path,
        "[[levels]]\nid = \"only\"\nmode = \"number_input\"\ninstruction = \"Build 9\"\ntarget = [9]\n",
    )
    .unwrap();

    let curriculum = numvault_config::load_curriculum(&path).unwrap();
    assert_eq!(curriculum.len(), 1);
    assert_eq!(curriculum.levels()[0].id().as_str(), "only");
}
