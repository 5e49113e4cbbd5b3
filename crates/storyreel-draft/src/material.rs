//! Material types for the draft catalog.
//!
//! Each catalog array carries its own struct so a kind cannot be built with
//! another kind's fields. The common envelope (id, kind tag, duration where
//! time-bearing) is repeated per struct because the downstream format stores
//! the kinds in separate arrays with different field sets.

use serde::{Deserialize, Serialize};
use storyreel_core::{Id, Micros};

/// Source duration declared for still images: three hours, far beyond any
/// target range a segment will request from it.
pub const PHOTO_SOURCE_DURATION: Micros = Micros::new(10_800_000_000);

/// Default declared pixel size for imported stills.
pub const DEFAULT_PHOTO_WIDTH: u32 = 1152;
/// Default declared pixel size for imported stills.
pub const DEFAULT_PHOTO_HEIGHT: u32 = 2048;

fn default_photo_check_flag() -> u32 {
    63487
}

fn default_audio_check_flag() -> u32 {
    1
}

fn none_string() -> String {
    "none".to_string()
}

/// Kind tag for audio materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioKind {
    /// Narration extracted or imported per-clip.
    ExtractMusic,
    /// Whole-timeline background bed.
    Music,
    /// Short overlay effect (e.g. an opening whoosh).
    SoundEffect,
}

/// An audio catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioMaterial {
    #[serde(default)]
    pub app_id: u32,
    #[serde(default)]
    pub category_id: String,
    #[serde(default = "default_audio_check_flag")]
    pub check_flag: u32,
    /// Playable duration in microseconds.
    pub duration: Micros,
    pub id: Id,
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: AudioKind,
    #[serde(default)]
    pub wave_points: Vec<f64>,
}

impl AudioMaterial {
    /// Create an audio material with a fresh identifier.
    pub fn new(name: impl Into<String>, path: impl Into<String>, duration: Micros, kind: AudioKind) -> Self {
        Self {
            app_id: 0,
            category_id: String::new(),
            check_flag: default_audio_check_flag(),
            duration,
            id: Id::generate(),
            name: name.into(),
            path: path.into(),
            kind,
            wave_points: Vec::new(),
        }
    }
}

/// Crop rectangle normalized to [0,1], one corner pair per field.
///
/// Field order is the downstream object order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub lower_left_x: f64,
    pub lower_left_y: f64,
    pub lower_right_x: f64,
    pub lower_right_y: f64,
    pub upper_left_x: f64,
    pub upper_left_y: f64,
    pub upper_right_x: f64,
    pub upper_right_y: f64,
}

impl Crop {
    /// The identity crop covering the whole image.
    pub const FULL: Self = Self {
        lower_left_x: 0.0,
        lower_left_y: 1.0,
        lower_right_x: 1.0,
        lower_right_y: 1.0,
        upper_left_x: 0.0,
        upper_left_y: 0.0,
        upper_right_x: 1.0,
        upper_right_y: 0.0,
    };
}

impl Default for Crop {
    fn default() -> Self {
        Self::FULL
    }
}

/// Kind tag for entries of the visual (`videos`) catalog array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualKind {
    /// A still image.
    Photo,
    /// A motion clip (e.g. a trailing overlay).
    Video,
}

/// A visual catalog entry (still image or motion clip).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualMaterial {
    #[serde(default = "none_string")]
    pub aigc_type: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default = "default_photo_check_flag")]
    pub check_flag: u32,
    #[serde(default)]
    pub crop: Crop,
    /// Declared source duration in microseconds.
    pub duration: Micros,
    #[serde(default)]
    pub has_audio: bool,
    pub height: u32,
    pub id: Id,
    pub material_name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: VisualKind,
    pub width: u32,
}

impl VisualMaterial {
    /// Create a still-image material with a fresh identifier and the fixed
    /// photo defaults.
    pub fn photo(material_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            aigc_type: none_string(),
            category_id: String::new(),
            check_flag: default_photo_check_flag(),
            crop: Crop::FULL,
            duration: PHOTO_SOURCE_DURATION,
            has_audio: false,
            height: DEFAULT_PHOTO_HEIGHT,
            id: Id::generate(),
            material_name: material_name.into(),
            path: path.into(),
            kind: VisualKind::Photo,
            width: DEFAULT_PHOTO_WIDTH,
        }
    }
}

/// Kind tag for visual effect materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    VideoEffect,
}

/// A full-timeline visual effect catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectMaterial {
    #[serde(default)]
    pub category_id: String,
    pub effect_id: String,
    pub id: Id,
    pub name: String,
    pub resource_id: String,
    #[serde(rename = "type")]
    pub kind: EffectKind,
}

impl EffectMaterial {
    /// Create an effect material with a fresh identifier.
    pub fn new(
        name: impl Into<String>,
        effect_id: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            category_id: String::new(),
            effect_id: effect_id.into(),
            id: Id::generate(),
            name: name.into(),
            resource_id: resource_id.into(),
            kind: EffectKind::VideoEffect,
        }
    }
}

/// Kind tag for animation envelope materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    StickerAnimation,
}

/// One animation inside an [`AnimationMaterial`] envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationEntry {
    pub anim_adjust_params: Option<serde_json::Value>,
    pub category_id: String,
    pub category_name: String,
    /// How long the entrance effect plays, from segment start.
    pub duration: Micros,
    pub id: String,
    pub material_type: String,
    pub name: String,
    pub panel: String,
    pub platform: String,
    pub request_id: Id,
    pub resource_id: String,
    pub start: Micros,
    #[serde(rename = "type")]
    pub kind: String,
}

/// An entrance-animation catalog entry referenced from video segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationMaterial {
    pub animations: Vec<AnimationEntry>,
    pub id: Id,
    pub multi_language_current: String,
    #[serde(rename = "type")]
    pub kind: AnimationKind,
}

impl AnimationMaterial {
    /// Create an entrance animation envelope with a fresh identifier.
    pub fn entrance(
        name: impl Into<String>,
        effect_id: impl Into<String>,
        resource_id: impl Into<String>,
        duration: Micros,
    ) -> Self {
        Self {
            animations: vec![AnimationEntry {
                anim_adjust_params: None,
                category_id: "in".to_string(),
                category_name: "In".to_string(),
                duration,
                id: effect_id.into(),
                material_type: "video".to_string(),
                name: name.into(),
                panel: "video".to_string(),
                platform: "all".to_string(),
                request_id: Id::generate(),
                resource_id: resource_id.into(),
                start: Micros::ZERO,
                kind: "in".to_string(),
            }],
            id: Id::generate(),
            multi_language_current: none_string(),
            kind: AnimationKind::StickerAnimation,
        }
    }
}
