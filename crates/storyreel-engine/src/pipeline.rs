//! The synthesis pipeline: one sequential pass from assets to a finalized
//! draft document.
//!
//! Order of operations: load template, resolve durations, prune template to
//! its role materials, build the catalog, allocate the timeline, assemble
//! tracks, finalize, post-pass the template roles. Fatal conditions abort
//! before anything is written; everything recoverable degrades with a
//! warning and lands in the build report.

use std::path::Path;
use storyreel_core::{Result, StoryReelError};
use storyreel_draft::Draft;
use storyreel_media::{probe, MediaFolder};
use tracing::{info, warn};

use crate::allocate::Allocator;
use crate::assemble::TrackAssembler;
use crate::catalog;
use crate::config::{BuildConfig, ExhaustionPolicy};
use crate::finalize::finalize;
use crate::report::BuildReport;

/// Synthesize a draft document from a template and a scanned media folder.
///
/// Returns the finalized document (not yet written to disk) and the run's
/// build report. Writing is the caller's decision so a fatal outcome never
/// leaves partial output behind.
pub fn synthesize(
    template_path: &Path,
    source: &MediaFolder,
    config: &BuildConfig,
) -> Result<(Draft, BuildReport)> {
    let mut draft = Draft::load_template(template_path)?;

    if source.audio.is_empty() {
        return Err(StoryReelError::NoAudioAssets(source.folder.clone()));
    }
    if source.images.is_empty() {
        return Err(StoryReelError::NoImageAssets(source.folder.clone()));
    }

    let mut warnings = 0;

    // Resolve narration durations up front; fallbacks are warnings.
    let mut slots = Vec::with_capacity(source.audio.len());
    let mut narration = Vec::with_capacity(source.audio.len());
    for asset in &source.audio {
        let resolved = probe::resolve_duration(&asset.path);
        if resolved.from_fallback {
            warnings += 1;
        }
        let (material, slot) = catalog::narration_material(asset, resolved.duration);
        narration.push(material);
        slots.push(slot);
    }

    let mut assembler = TrackAssembler::new(&mut draft, config);
    warnings += assembler.prune_template();

    let images: Vec<_> = source.images.iter().map(catalog::image_material).collect();
    let image_ids: Vec<_> = images.iter().map(|m| m.id.clone()).collect();
    draft.materials.audios.extend(narration);
    draft.materials.videos.extend(images);

    let outcome = Allocator::new(config.short_threshold).run(&slots, &image_ids);
    warnings += outcome.starved_segments;

    if config.exhaustion == ExhaustionPolicy::Abort && !outcome.unfilled.is_zero() {
        return Err(StoryReelError::Allocation(format!(
            "image inventory exhausted with {} uncovered across {} audio segment(s)",
            outcome.unfilled, outcome.starved_segments
        )));
    }

    let mut assembler = TrackAssembler::new(&mut draft, config);
    let video_track = assembler.fill_video_track(&outcome.placements);
    let narration_track = assembler.append_narration_track(&slots);

    if let Some(sound_path) = &config.opening_sound {
        let resolved = probe::resolve_duration(sound_path);
        if resolved.from_fallback {
            warnings += 1;
        }
        let (material, slot) = catalog::sound_effect_material(sound_path, resolved.duration);
        draft.materials.audios.push(material);
        TrackAssembler::new(&mut draft, config).append_opening_sound(&slot);
    }

    let total = finalize(&mut draft, config, &narration_track);
    debug_assert_eq!(total, outcome.cursor);

    let mut assembler = TrackAssembler::new(&mut draft, config);
    assembler.append_visual_effect(total);
    assembler.apply_template_overrides(total);

    for issue in draft.validate() {
        warn!("draft integrity: {issue}");
        warnings += 1;
    }
    let gaps = draft.coverage_gaps(&video_track, total);
    if !gaps.is_empty() {
        warn!("video track leaves {} uncovered span(s)", gaps.len());
    }

    let report = BuildReport {
        audio_segments: slots.len(),
        video_segments: outcome.placements.len(),
        images_used: outcome.images_used,
        images_skipped: outcome.images_skipped,
        images_unused: outcome.images_unused,
        starved_segments: outcome.starved_segments,
        unfilled: outcome.unfilled,
        warnings,
        total_duration: total,
    };
    info!("{report}");

    Ok((draft, report))
}
