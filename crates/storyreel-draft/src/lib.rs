//! StoryReel Draft - the editor draft document model
//!
//! Implements the document structure the downstream editor consumes:
//! - Materials catalog keyed by kind (audio, visual, effects, sidecars)
//! - Segments placing materials on tracks with target/source time ranges
//! - Tracks in playback order
//! - The top-level document with canvas config and timestamps,
//!   serialized to JSON with a `.bak` sibling for crash safety
//!
//! Field declaration order inside the serde structs is deliberate: the
//! downstream application is sensitive to the order of some objects, so the
//! serialized order reproduces the documents it writes itself.

pub mod document;
pub mod material;
pub mod segment;
pub mod sidecar;
pub mod track;
pub mod validate;

pub use document::{
    CanvasConfig, CanvasPreset, Draft, MaterialCatalog, DRAFT_BACKUP_FILE_NAME, DRAFT_FILE_NAME,
};
pub use material::{
    AnimationEntry, AnimationMaterial, AudioKind, AudioMaterial, Crop, EffectMaterial,
    VisualKind, VisualMaterial, PHOTO_SOURCE_DURATION,
};
pub use segment::{ClipSettings, Segment};
pub use sidecar::{
    CanvasColor, Loudness, MaterialColor, PlaceholderInfo, SoundChannelMapping, Speed,
    VocalSeparation,
};
pub use track::{Track, TrackKind};
pub use validate::ValidationIssue;
