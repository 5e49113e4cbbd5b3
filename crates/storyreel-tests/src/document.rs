//! Document-level integration tests: serialized shape, identifier
//! integrity, persistence, and template role handling.

use crate::fixtures::{write_images, write_minimal_template, write_wav};
use std::collections::HashSet;
use std::path::Path;
use storyreel_core::Micros;
use storyreel_draft::{Draft, TrackKind, DRAFT_BACKUP_FILE_NAME};
use storyreel_engine::{synthesize, BuildConfig, TemplateRoles};
use storyreel_media::MediaFolder;

fn synthesized_draft(dir: &Path) -> Draft {
    let template = write_minimal_template(dir);
    write_wav(&dir.join("1.wav"), 1.0);
    write_wav(&dir.join("2.wav"), 2.0);
    write_images(dir, 6);

    let media = MediaFolder::scan(dir).unwrap();
    let (draft, _) = synthesize(&template, &media, &BuildConfig::new("doc-test")).unwrap();
    draft
}

#[test]
fn top_level_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let draft = synthesized_draft(dir.path());
    let value = serde_json::to_value(&draft).unwrap();

    for key in [
        "id",
        "draft_name",
        "duration",
        "canvas_config",
        "create_time",
        "update_time",
        "materials",
        "tracks",
    ] {
        assert!(value.get(key).is_some(), "missing top-level key {key}");
    }
    assert_eq!(value["canvas_config"]["width"], 1920);
    assert_eq!(value["canvas_config"]["height"], 1080);
    assert_eq!(value["canvas_config"]["ratio"], "16:9");

    // Time fields are bare integers in microseconds.
    assert!(value["duration"].is_i64());
    assert!(value["create_time"].is_i64());
    let segment = &value["tracks"][0]["segments"][0];
    assert!(segment["target_timerange"]["start"].is_i64());
    assert!(segment["target_timerange"]["duration"].is_i64());

    // Materials catalog is keyed by kind.
    for key in ["audios", "videos", "texts", "speeds", "vocal_separations"] {
        assert!(value["materials"].get(key).is_some(), "missing catalog key {key}");
    }

    // Tracks carry id/type/segments.
    assert!(value["tracks"][0]["id"].is_string());
    assert_eq!(value["tracks"][0]["type"], "video");
}

#[test]
fn identifiers_are_uppercase_and_unique_and_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let draft = synthesized_draft(dir.path());

    let mut seen = HashSet::new();
    for id in draft.materials.all_ids() {
        assert_eq!(id.as_str(), id.as_str().to_uppercase());
        assert!(seen.insert(id.clone()), "duplicate id {id}");
    }

    for track in &draft.tracks {
        for segment in &track.segments {
            assert!(
                seen.contains(&segment.material_id),
                "unresolved material {}",
                segment.material_id
            );
            for reference in &segment.extra_material_refs {
                assert!(seen.contains(reference), "unresolved sidecar {reference}");
            }
        }
    }

    assert!(draft.validate().is_empty());
}

#[test]
fn sidecar_refs_keep_positional_order_in_json() {
    let dir = tempfile::tempdir().unwrap();
    let draft = synthesized_draft(dir.path());
    let value = serde_json::to_value(&draft).unwrap();

    // First video segment: seven refs, positionally speed, placeholder,
    // canvas, color, loudness, channel mapping, vocal separation.
    let refs = value["tracks"][0]["segments"][0]["extra_material_refs"]
        .as_array()
        .unwrap();
    assert_eq!(refs.len(), 7);
    assert_eq!(refs[0], value["materials"]["speeds"][0]["id"]);
    assert_eq!(refs[1], value["materials"]["placeholders"][0]["id"]);
    assert_eq!(refs[2], value["materials"]["canvases"][0]["id"]);
    assert_eq!(refs[3], value["materials"]["material_colors"][0]["id"]);
    assert_eq!(refs[4], value["materials"]["loudnesses"][0]["id"]);
    assert_eq!(refs[5], value["materials"]["sound_channel_mappings"][0]["id"]);
    assert_eq!(refs[6], value["materials"]["vocal_separations"][0]["id"]);
}

#[test]
fn save_writes_identical_backup_and_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let draft = synthesized_draft(dir.path());

    let out = dir.path().join("out");
    let primary = draft.save_with_backup(&out).unwrap();
    let backup = out.join(DRAFT_BACKUP_FILE_NAME);

    let primary_bytes = std::fs::read(&primary).unwrap();
    assert_eq!(primary_bytes, std::fs::read(&backup).unwrap());

    let reloaded = Draft::load_template(&primary).unwrap();
    assert_eq!(reloaded.duration, draft.duration);
    assert_eq!(reloaded.tracks.len(), draft.tracks.len());
    assert!(reloaded.validate().is_empty());
}

#[test]
fn template_roles_survive_and_fit_the_final_timeline() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("template.json");
    std::fs::write(
        &template_path,
        r#"{
            "canvas_config": {"height": 1080, "ratio": "16:9", "width": 1920},
            "draft_name": "template",
            "materials": {
                "audios": [
                    {"duration": 60000000, "id": "BED-1", "name": "bed.mp3",
                     "path": "/t/bed.mp3", "type": "music"}
                ],
                "videos": [
                    {"duration": 5000000, "height": 720, "id": "CLOSE-1",
                     "material_name": "closing.mp4", "path": "/t/closing.mp4",
                     "type": "video", "width": 1280}
                ]
            },
            "tracks": [
                {"id": "AT-1", "type": "audio", "segments": [
                    {"id": "S-BED", "material_id": "BED-1",
                     "source_timerange": {"start": 0, "duration": 60000000},
                     "target_timerange": {"start": 0, "duration": 60000000}}
                ]},
                {"id": "VT-9", "flag": 1, "type": "video", "segments": [
                    {"id": "S-CLOSE", "material_id": "CLOSE-1",
                     "source_timerange": {"start": 0, "duration": 5000000},
                     "target_timerange": {"start": 0, "duration": 5000000}}
                ]}
            ]
        }"#,
    )
    .unwrap();

    write_wav(&dir.path().join("1.wav"), 4.0);
    write_wav(&dir.path().join("2.wav"), 6.0);
    write_images(dir.path(), 4);

    let media = MediaFolder::scan(dir.path()).unwrap();
    let mut config = BuildConfig::new("roles");
    config.roles = TemplateRoles {
        background_audio: Some("bed.mp3".into()),
        background_image: None,
        closing_overlay: Some("closing.mp4".into()),
    };
    config.background_volume = 3.16;

    let (draft, report) = synthesize(&template_path, &media, &config).unwrap();
    let total = Micros::from_secs(10);
    assert_eq!(draft.duration, total);
    assert_eq!(report.warnings, 0);

    // Bed stretched across the final timeline at the configured gain.
    let bed = draft
        .tracks
        .iter()
        .filter(|t| t.kind == TrackKind::Audio)
        .flat_map(|t| &t.segments)
        .find(|s| s.material_id.as_str() == "BED-1")
        .unwrap();
    assert_eq!(bed.target_timerange.duration, total);
    assert_eq!(bed.volume, 3.16);

    // Closing overlay repositioned to end exactly at the timeline's end.
    let closing = draft
        .tracks
        .iter()
        .flat_map(|t| &t.segments)
        .find(|s| s.material_id.as_str() == "CLOSE-1")
        .unwrap();
    assert_eq!(closing.target_timerange.end(), total);
    assert_eq!(closing.target_timerange.duration, Micros::from_secs(5));

    // Role materials still resolve alongside the generated ones.
    assert!(draft.validate().is_empty());
}
