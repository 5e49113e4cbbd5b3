//! Build configuration for one synthesis run.

use std::path::PathBuf;
use storyreel_core::Micros;
use storyreel_draft::CanvasPreset;

use crate::allocate::DEFAULT_SHORT_THRESHOLD;

/// What to do when the image inventory runs out mid-allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustionPolicy {
    /// Keep going, leave reported gaps on the video track.
    #[default]
    Degrade,
    /// Abort the run before any output file is written.
    Abort,
}

/// Template materials recognized by name and given special treatment in the
/// post-pass. A configured name with no matching template material is a
/// warning, not an error.
#[derive(Debug, Clone, Default)]
pub struct TemplateRoles {
    /// Audio bed stretched across the whole timeline.
    pub background_audio: Option<String>,
    /// Full-bleed placeholder image stretched across the whole timeline.
    pub background_image: Option<String>,
    /// Fixed-length clip repositioned to end exactly at the timeline's end.
    pub closing_overlay: Option<String>,
}

impl TemplateRoles {
    /// True when the name fills any configured role.
    pub fn is_role(&self, name: &str) -> bool {
        [
            &self.background_audio,
            &self.background_image,
            &self.closing_overlay,
        ]
        .into_iter()
        .any(|role| role.as_deref() == Some(name))
    }
}

/// A whole-timeline visual effect to overlay.
#[derive(Debug, Clone)]
pub struct EffectPreset {
    pub name: String,
    pub effect_id: String,
    pub resource_id: String,
}

/// Configuration for one draft synthesis run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Name stamped into the document.
    pub draft_name: String,
    /// Canvas preset written at finalization.
    pub canvas: CanvasPreset,
    /// Audio shorter than this takes the one-image path.
    pub short_threshold: Micros,
    /// Gap handling when images run out.
    pub exhaustion: ExhaustionPolicy,
    /// Gain applied to every narration segment (1.0 = full volume).
    pub narration_volume: f64,
    /// Gain applied to the background audio bed role.
    pub background_volume: f64,
    /// Length of the closing-overlay role clip.
    pub closing_overlay_duration: Micros,
    /// Attach entrance animations to video segments after the first.
    pub entrance_animations: bool,
    /// Sound effect placed at the very start of the timeline.
    pub opening_sound: Option<PathBuf>,
    /// Visual effect spanning the whole timeline.
    pub visual_effect: Option<EffectPreset>,
    /// Named template materials with post-pass treatment.
    pub roles: TemplateRoles,
}

impl BuildConfig {
    /// Configuration with the documented policy defaults.
    pub fn new(draft_name: impl Into<String>) -> Self {
        Self {
            draft_name: draft_name.into(),
            canvas: CanvasPreset::Landscape1080p,
            short_threshold: DEFAULT_SHORT_THRESHOLD,
            exhaustion: ExhaustionPolicy::Degrade,
            narration_volume: 1.0,
            background_volume: 1.0,
            closing_overlay_duration: Micros::from_secs(5),
            entrance_animations: true,
            opening_sound: None,
            visual_effect: None,
            roles: TemplateRoles::default(),
        }
    }
}
