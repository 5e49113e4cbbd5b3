//! StoryReel Media - asset discovery and metadata probing
//!
//! This crate handles:
//! - Enumerating audio and image files in a source folder, in natural
//!   (numeric-aware) filename order
//! - Reading playable audio durations from container metadata

pub mod discover;
pub mod probe;

pub use discover::{natural_cmp, Asset, AssetKind, MediaFolder};
pub use probe::{resolve_duration, ResolvedDuration, FALLBACK_DURATION};
