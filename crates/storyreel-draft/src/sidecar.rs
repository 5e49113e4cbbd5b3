//! Sidecar materials.
//!
//! Behaviorally inert catalog entries attached to segments solely to satisfy
//! the downstream schema: speed 1.0, no placeholder, no canvas fill, no
//! color grade, neutral loudness, default channel mapping, no vocal
//! separation. The downstream application is sensitive to object layout, so
//! every struct fixes its exact field set and order, and values never vary
//! from the defaults at creation time.

use serde::{Deserialize, Serialize};
use storyreel_core::{Id, TimeRange};

/// Playback speed sidecar (always 1.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speed {
    pub curve_speed: Option<serde_json::Value>,
    pub id: Id,
    pub mode: i32,
    pub speed: f64,
    #[serde(rename = "type")]
    pub kind: SpeedKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedKind {
    Speed,
}

impl Speed {
    pub fn unit() -> Self {
        Self {
            curve_speed: None,
            id: Id::generate(),
            mode: 0,
            speed: 1.0,
            kind: SpeedKind::Speed,
        }
    }
}

/// Placeholder-slot sidecar (empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderInfo {
    pub error_path: String,
    pub error_text: String,
    pub id: Id,
    pub meta_type: String,
    pub res_path: String,
    pub res_text: String,
    #[serde(rename = "type")]
    pub kind: PlaceholderKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    PlaceholderInfo,
}

impl PlaceholderInfo {
    pub fn empty() -> Self {
        Self {
            error_path: String::new(),
            error_text: String::new(),
            id: Id::generate(),
            meta_type: "none".to_string(),
            res_path: String::new(),
            res_text: String::new(),
            kind: PlaceholderKind::PlaceholderInfo,
        }
    }
}

/// Canvas-fill sidecar (no fill).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasColor {
    pub album_image: String,
    pub blur: f64,
    pub color: String,
    pub id: Id,
    pub image: String,
    pub image_id: String,
    pub image_name: String,
    pub source_platform: i32,
    pub team_id: String,
    #[serde(rename = "type")]
    pub kind: CanvasKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasKind {
    CanvasColor,
}

impl CanvasColor {
    pub fn none() -> Self {
        Self {
            album_image: String::new(),
            blur: 0.0,
            color: String::new(),
            id: Id::generate(),
            image: String::new(),
            image_id: String::new(),
            image_name: String::new(),
            source_platform: 0,
            team_id: String::new(),
            kind: CanvasKind::CanvasColor,
        }
    }
}

/// Color-grade sidecar (disabled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialColor {
    pub enable: bool,
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: MaterialColorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialColorKind {
    MaterialColor,
}

impl MaterialColor {
    pub fn disabled() -> Self {
        Self {
            enable: false,
            id: Id::generate(),
            kind: MaterialColorKind::MaterialColor,
        }
    }
}

/// Loudness-normalization sidecar (neutral).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loudness {
    pub id: Id,
    pub loudness: f64,
    pub peak: f64,
    #[serde(rename = "type")]
    pub kind: LoudnessKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoudnessKind {
    Loudness,
}

impl Loudness {
    pub fn neutral() -> Self {
        Self {
            id: Id::generate(),
            loudness: 0.0,
            peak: 0.0,
            kind: LoudnessKind::Loudness,
        }
    }
}

/// Audio channel mapping sidecar (default stereo mapping).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundChannelMapping {
    pub audio_channel_mapping: i32,
    pub id: Id,
    pub is_config_open: bool,
    #[serde(rename = "type")]
    pub kind: SoundChannelMappingKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundChannelMappingKind {
    SoundChannelMapping,
}

impl SoundChannelMapping {
    pub fn default_mapping() -> Self {
        Self {
            audio_channel_mapping: 0,
            id: Id::generate(),
            is_config_open: false,
            kind: SoundChannelMappingKind::SoundChannelMapping,
        }
    }
}

/// Vocal-separation sidecar (off).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocalSeparation {
    pub choice: i32,
    pub id: Id,
    pub production_path: String,
    pub time_range: Option<TimeRange>,
    #[serde(rename = "type")]
    pub kind: VocalSeparationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocalSeparationKind {
    VocalSeparation,
}

impl VocalSeparation {
    pub fn off() -> Self {
        Self {
            choice: 0,
            id: Id::generate(),
            production_path: String::new(),
            time_range: None,
            kind: VocalSeparationKind::VocalSeparation,
        }
    }
}
