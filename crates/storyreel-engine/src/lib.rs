//! StoryReel Engine - draft document synthesis
//!
//! The single-pass pipeline that turns ordered media assets into a complete
//! draft document:
//! - Catalog builder: assets in, materials with fresh identifiers out
//! - Timeline allocator: binds images to audio segments by duration policy
//! - Track assembler: video/audio/effect tracks, sidecars, template roles
//! - Finalizer: totals, timestamps, canvas, persistence
//! - Build report: the counts a user needs to diagnose an asset folder

pub mod allocate;
pub mod assemble;
pub mod catalog;
pub mod config;
pub mod finalize;
pub mod pipeline;
pub mod report;

pub use allocate::{AllocationOutcome, Allocator, Placement, DEFAULT_SHORT_THRESHOLD};
pub use catalog::AudioSlot;
pub use config::{BuildConfig, EffectPreset, ExhaustionPolicy, TemplateRoles};
pub use pipeline::synthesize;
pub use report::BuildReport;
