//! Segment types: the placement of one material on one track.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use storyreel_core::{Id, Micros, TimeRange};

/// Horizontal/vertical mirroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

/// 2D scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

/// 2D translation in canvas-relative units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

/// Visual transform carried by video segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipSettings {
    pub alpha: f64,
    pub flip: Flip,
    pub rotation: f64,
    pub scale: Scale,
    pub transform: Translation,
}

impl Default for ClipSettings {
    /// Identity transform: fully opaque, unflipped, unrotated, unscaled.
    fn default() -> Self {
        Self {
            alpha: 1.0,
            flip: Flip::default(),
            rotation: 0.0,
            scale: Scale { x: 1.0, y: 1.0 },
            transform: Translation::default(),
        }
    }
}

/// A timed placement of exactly one material onto exactly one track.
///
/// Immutable after assembly, except for the whole-document post-pass that
/// stretches background segments and repositions the trailing overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Visual transform; audio segments carry none.
    #[serde(default)]
    pub clip: Option<ClipSettings>,
    /// Ordered sidecar references. Position matters downstream.
    #[serde(default)]
    pub extra_material_refs: SmallVec<[Id; 8]>,
    pub id: Id,
    pub material_id: Id,
    /// Draw order among video segments; 0 for audio.
    #[serde(default)]
    pub render_index: u32,
    /// Range into the material's own timeline.
    pub source_timerange: TimeRange,
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Range on the master document timeline.
    pub target_timerange: TimeRange,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_speed() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

fn default_volume() -> f64 {
    1.0
}

impl Segment {
    /// A video segment: identity transform, untrimmed source starting at 0.
    pub fn video(material_id: Id, target: TimeRange, render_index: u32) -> Self {
        Self {
            clip: Some(ClipSettings::default()),
            extra_material_refs: SmallVec::new(),
            id: Id::generate(),
            material_id,
            render_index,
            source_timerange: TimeRange::from_zero(target.duration),
            speed: 1.0,
            target_timerange: target,
            visible: true,
            volume: 1.0,
        }
    }

    /// An audio segment: no transform, untrimmed source starting at 0.
    pub fn audio(material_id: Id, target: TimeRange, render_index: u32, volume: f64) -> Self {
        Self {
            clip: None,
            extra_material_refs: SmallVec::new(),
            id: Id::generate(),
            material_id,
            render_index,
            source_timerange: TimeRange::from_zero(target.duration),
            speed: 1.0,
            target_timerange: target,
            visible: true,
            volume,
        }
    }

    /// An effect segment: no transform, no gain semantics.
    pub fn effect(material_id: Id, target: TimeRange) -> Self {
        Self {
            clip: None,
            extra_material_refs: SmallVec::new(),
            id: Id::generate(),
            material_id,
            render_index: 0,
            source_timerange: TimeRange::from_zero(target.duration),
            speed: 1.0,
            target_timerange: target,
            visible: true,
            volume: 1.0,
        }
    }

    /// Rewrite both ranges to span `duration` from the current target start.
    /// Used by the background post-pass.
    pub fn stretch_to(&mut self, duration: Micros) {
        self.target_timerange.duration = duration;
        self.source_timerange.duration = duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_segment_source_mirrors_target_duration() {
        let target = TimeRange::new(Micros::from_secs(3), Micros::from_secs(2));
        let seg = Segment::video(Id::generate(), target, 1);

        assert_eq!(seg.source_timerange.start, Micros::ZERO);
        assert_eq!(seg.source_timerange.duration, target.duration);
        assert!(seg.clip.is_some());
        assert_eq!(seg.volume, 1.0);
    }

    #[test]
    fn test_audio_segment_has_no_clip() {
        let seg = Segment::audio(
            Id::generate(),
            TimeRange::from_zero(Micros::from_secs(1)),
            0,
            1.0,
        );
        assert!(seg.clip.is_none());
    }

    #[test]
    fn test_stretch_rewrites_both_ranges() {
        let mut seg = Segment::audio(
            Id::generate(),
            TimeRange::from_zero(Micros::from_secs(1)),
            0,
            1.0,
        );
        seg.stretch_to(Micros::from_secs(9));
        assert_eq!(seg.target_timerange.duration, Micros::from_secs(9));
        assert_eq!(seg.source_timerange.duration, Micros::from_secs(9));
    }
}
