//! End-to-end synthesis tests: real files on disk, the real metadata probe,
//! the full allocation and assembly pipeline.

use crate::fixtures::{write_images, write_minimal_template, write_wav};
use storyreel_core::Micros;
use storyreel_draft::TrackKind;
use storyreel_engine::{synthesize, BuildConfig};
use storyreel_media::MediaFolder;

#[test]
fn worked_example_covers_timeline_without_gaps() {
    // 1.0s (short), 2.0s (long), 0.8s (short) narration with 6 images.
    let dir = tempfile::tempdir().unwrap();
    let template = write_minimal_template(dir.path());
    write_wav(&dir.path().join("1.wav"), 1.0);
    write_wav(&dir.path().join("2.wav"), 2.0);
    write_wav(&dir.path().join("3.wav"), 0.8);
    write_images(dir.path(), 6);

    let media = MediaFolder::scan(dir.path()).unwrap();
    let config = BuildConfig::new("worked-example");
    let (draft, report) = synthesize(&template, &media, &config).unwrap();

    assert_eq!(report.audio_segments, 3);
    assert_eq!(report.video_segments, 4);
    assert_eq!(report.images_used, 4);
    assert_eq!(report.images_skipped, 2);
    assert_eq!(report.images_unused, 0);
    assert_eq!(report.starved_segments, 0);
    assert_eq!(report.warnings, 0);
    assert_eq!(report.total_duration, Micros::from_secs_f64(3.8));

    // Video segments cover [0,1.0), [1.0,2.0), [2.0,3.0), [3.0,3.8).
    let video = &draft.tracks[0];
    assert_eq!(video.kind, TrackKind::Video);
    let starts: Vec<i64> = video
        .segments
        .iter()
        .map(|s| s.target_timerange.start.as_micros())
        .collect();
    assert_eq!(starts, vec![0, 1_000_000, 2_000_000, 3_000_000]);
    assert!(draft
        .coverage_gaps(&video.id, draft.duration)
        .is_empty());

    // The short-segment rule binds image 1 then image 3; image 2 is never
    // referenced by any segment.
    let bound_names: Vec<String> = video
        .segments
        .iter()
        .map(|s| {
            draft
                .materials
                .videos
                .iter()
                .find(|m| m.id == s.material_id)
                .unwrap()
                .material_name
                .clone()
        })
        .collect();
    assert_eq!(bound_names, vec!["1.png", "3.png", "4.png", "5.png"]);
}

#[test]
fn natural_filename_order_drives_allocation() {
    // 10.png must sort after 2.png, so the first binding is 1.png, not
    // 10.png.
    let dir = tempfile::tempdir().unwrap();
    let template = write_minimal_template(dir.path());
    write_wav(&dir.path().join("clip.wav"), 2.0);
    for name in ["10.png", "2.png", "1.png"] {
        std::fs::File::create(dir.path().join(name)).unwrap();
    }

    let media = MediaFolder::scan(dir.path()).unwrap();
    let (draft, _) = synthesize(&template, &media, &BuildConfig::new("order")).unwrap();

    let catalog_names: Vec<_> = draft
        .materials
        .videos
        .iter()
        .map(|m| m.material_name.clone())
        .collect();
    assert_eq!(catalog_names, vec!["1.png", "2.png", "10.png"]);
}

#[test]
fn narration_cursor_survives_image_shortage() {
    // Three long clips, two images: only the first clip gets images, yet
    // the document duration covers all three.
    let dir = tempfile::tempdir().unwrap();
    let template = write_minimal_template(dir.path());
    write_wav(&dir.path().join("1.wav"), 2.0);
    write_wav(&dir.path().join("2.wav"), 2.0);
    write_wav(&dir.path().join("3.wav"), 2.0);
    write_images(dir.path(), 2);

    let media = MediaFolder::scan(dir.path()).unwrap();
    let (draft, report) = synthesize(&template, &media, &BuildConfig::new("short")).unwrap();

    assert_eq!(report.starved_segments, 2);
    assert_eq!(report.unfilled, Micros::from_secs(4));
    assert_eq!(draft.duration, Micros::from_secs(6));

    let narration = draft
        .tracks
        .iter()
        .find(|t| t.kind == TrackKind::Audio)
        .unwrap();
    assert_eq!(narration.duration_sum(), Micros::from_secs(6));

    // The degraded video track really does leave the tail uncovered.
    let video = &draft.tracks[0];
    let gaps = draft.coverage_gaps(&video.id, draft.duration);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].start, Micros::from_secs(2));
    assert_eq!(gaps[0].duration, Micros::from_secs(4));
}

#[test]
fn render_indices_strictly_increase_in_emission_order() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_minimal_template(dir.path());
    for i in 1..=3 {
        write_wav(&dir.path().join(format!("{i}.wav")), 2.0);
    }
    write_images(dir.path(), 6);

    let media = MediaFolder::scan(dir.path()).unwrap();
    let (draft, _) = synthesize(&template, &media, &BuildConfig::new("render")).unwrap();

    let indices: Vec<u32> = draft.tracks[0]
        .segments
        .iter()
        .map(|s| s.render_index)
        .collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn probe_reads_exact_wav_durations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exact.wav");
    write_wav(&path, 1.25);

    let resolved = storyreel_media::resolve_duration(&path);
    assert!(!resolved.from_fallback);
    assert_eq!(resolved.duration, Micros::from_secs_f64(1.25));
}
