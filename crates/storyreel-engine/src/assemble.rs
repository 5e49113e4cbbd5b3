//! Track assembly.
//!
//! Turns allocator output and cataloged narration into the document's
//! tracks, instantiates the per-segment sidecar sets, and runs the
//! whole-document post-pass that fits template role materials (background
//! bed, full-bleed placeholder, trailing overlay) to the final timeline.

use storyreel_core::{Id, Micros, TimeRange};
use storyreel_draft::{
    AnimationMaterial, Draft, EffectMaterial, Segment, Track, TrackKind,
};
use tracing::{debug, warn};

use crate::allocate::Placement;
use crate::catalog::AudioSlot;
use crate::config::BuildConfig;

/// Entrance animation presets applied round-robin to video segments after
/// the first. Cycling through four means adjacent segments never share one.
const ENTRANCE_ANIMATIONS: [(&str, &str, &str); 4] = [
    ("Dynamic Zoom", "431662", "6740867832570974733"),
    ("Gentle Shake", "431664", "6739418227031413256"),
    ("Swipe Right", "431636", "6739338727866241539"),
    ("Side Sway", "431654", "6739418540421419524"),
];

/// How long each entrance animation plays.
const ENTRANCE_DURATION: Micros = Micros::new(200_000);

/// Builds tracks into a draft under one configuration.
pub struct TrackAssembler<'a> {
    draft: &'a mut Draft,
    config: &'a BuildConfig,
}

impl<'a> TrackAssembler<'a> {
    pub fn new(draft: &'a mut Draft, config: &'a BuildConfig) -> Self {
        Self { draft, config }
    }

    /// Reduce the template to its role materials.
    ///
    /// Materials whose name fills a configured role survive, along with
    /// their segments; effect-track segments survive as well. Everything
    /// else the template carried is dropped. Returns the number of
    /// configured roles with no matching template material (each already
    /// logged as a warning).
    pub fn prune_template(&mut self) -> usize {
        let roles = &self.config.roles;

        let mut missing = 0;
        for configured in [
            &roles.background_audio,
            &roles.background_image,
            &roles.closing_overlay,
        ]
        .into_iter()
        .flatten()
        {
            let in_audios = self.draft.materials.audios.iter().any(|m| &m.name == configured);
            let in_videos = self
                .draft
                .materials
                .videos
                .iter()
                .any(|m| &m.material_name == configured);
            if !in_audios && !in_videos {
                warn!("template has no material named {configured:?} for its role");
                missing += 1;
            }
        }

        self.draft.materials.audios.retain(|m| roles.is_role(&m.name));
        self.draft
            .materials
            .videos
            .retain(|m| roles.is_role(&m.material_name));

        let retained: Vec<Id> = self
            .draft
            .materials
            .audios
            .iter()
            .map(|m| m.id.clone())
            .chain(self.draft.materials.videos.iter().map(|m| m.id.clone()))
            .collect();

        for track in &mut self.draft.tracks {
            if track.kind == TrackKind::Effect {
                continue;
            }
            track.segments.retain(|s| retained.contains(&s.material_id));
        }
        // Empty non-effect tracks are gone; the primary video track shell is
        // recreated on demand when segments are filled in.
        self.draft
            .tracks
            .retain(|t| !t.segments.is_empty() || (t.kind == TrackKind::Video && t.flag == 0));

        missing
    }

    /// Fill the primary video track from allocator output, attaching the
    /// seven-sidecar default set to every segment and entrance animations
    /// to every segment after the first.
    pub fn fill_video_track(&mut self, placements: &[Placement]) -> Id {
        let mut segments = Vec::with_capacity(placements.len());
        for placement in placements {
            let mut segment =
                Segment::video(placement.image.clone(), placement.target, placement.render_index);
            segment.extra_material_refs = self.draft.materials.new_video_sidecar_refs();
            segments.push(segment);
        }

        if self.config.entrance_animations && segments.len() > 1 {
            let animation_ids: Vec<Id> = ENTRANCE_ANIMATIONS
                .iter()
                .map(|(name, effect_id, resource_id)| {
                    let material = AnimationMaterial::entrance(
                        *name,
                        *effect_id,
                        *resource_id,
                        ENTRANCE_DURATION,
                    );
                    let id = material.id.clone();
                    self.draft.materials.material_animations.push(material);
                    id
                })
                .collect();

            // The opening image stays still; everything after it animates in.
            for (index, segment) in segments.iter_mut().enumerate().skip(1) {
                let animation = &animation_ids[(index - 1) % animation_ids.len()];
                segment.extra_material_refs.push(animation.clone());
            }
            debug!("attached entrance animations to {} segments", segments.len() - 1);
        }

        let track = self.draft.primary_video_track_mut();
        track.segments = segments;
        track.id.clone()
    }

    /// Append the primary narration track: one segment per audio material
    /// at cumulative offsets, each with the four-sidecar audio default set.
    pub fn append_narration_track(&mut self, slots: &[AudioSlot]) -> Id {
        let mut track = Track::new(TrackKind::Audio);
        let mut cursor = Micros::ZERO;

        for (index, slot) in slots.iter().enumerate() {
            let mut segment = Segment::audio(
                slot.id.clone(),
                TimeRange::new(cursor, slot.duration),
                index as u32,
                self.config.narration_volume,
            );
            segment.extra_material_refs = self.draft.materials.new_audio_sidecar_refs();
            track.push(segment);
            cursor += slot.duration;
        }

        let id = track.id.clone();
        debug!("narration track: {} segments, {cursor}", track.segments.len());
        self.draft.tracks.push(track);
        id
    }

    /// Append the opening sound-effect overlay on its own track, pinned to
    /// the timeline start.
    pub fn append_opening_sound(&mut self, slot: &AudioSlot) {
        let mut segment = Segment::audio(
            slot.id.clone(),
            TimeRange::from_zero(slot.duration),
            0,
            1.0,
        );
        segment.extra_material_refs = self.draft.materials.new_audio_sidecar_refs();

        let mut track = Track::new(TrackKind::Audio);
        track.push(segment);
        self.draft.tracks.push(track);
    }

    /// Append a whole-timeline visual effect track when one is configured.
    pub fn append_visual_effect(&mut self, total: Micros) {
        let Some(preset) = &self.config.visual_effect else {
            return;
        };
        let material = EffectMaterial::new(
            preset.name.clone(),
            preset.effect_id.clone(),
            preset.resource_id.clone(),
        );
        let material_id = material.id.clone();
        self.draft.materials.video_effects.push(material);

        let mut track = Track::new(TrackKind::Effect);
        track.push(Segment::effect(material_id, TimeRange::from_zero(total)));
        self.draft.tracks.push(track);
    }

    /// The whole-document post-pass over template role materials:
    /// background bed and full-bleed placeholder stretched to the final
    /// total, the trailing overlay repositioned to end exactly at the
    /// timeline's end, effect-track segments stretched to the total.
    pub fn apply_template_overrides(&mut self, total: Micros) {
        let roles = &self.config.roles;

        let background_audio = self
            .draft
            .materials
            .audios
            .iter()
            .find(|m| Some(&m.name) == roles.background_audio.as_ref())
            .map(|m| m.id.clone());
        let background_image = self
            .draft
            .materials
            .videos
            .iter()
            .find(|m| Some(&m.material_name) == roles.background_image.as_ref())
            .map(|m| m.id.clone());
        let closing_overlay = self
            .draft
            .materials
            .videos
            .iter()
            .find(|m| Some(&m.material_name) == roles.closing_overlay.as_ref())
            .map(|m| m.id.clone());

        let overlay_duration = self.config.closing_overlay_duration;
        let background_volume = self.config.background_volume;

        for track in &mut self.draft.tracks {
            if track.kind == TrackKind::Effect {
                for segment in &mut track.segments {
                    segment.stretch_to(total);
                }
                continue;
            }
            for segment in &mut track.segments {
                if Some(&segment.material_id) == background_audio.as_ref() {
                    segment.stretch_to(total);
                    segment.volume = background_volume;
                    debug!("stretched background bed to {total}");
                } else if Some(&segment.material_id) == background_image.as_ref() {
                    segment.stretch_to(total);
                    debug!("stretched background placeholder to {total}");
                } else if Some(&segment.material_id) == closing_overlay.as_ref() {
                    segment.target_timerange =
                        TimeRange::new(total - overlay_duration, overlay_duration);
                    segment.source_timerange = TimeRange::from_zero(overlay_duration);
                    debug!("repositioned closing overlay to end at {total}");
                }
            }
        }
    }
}
