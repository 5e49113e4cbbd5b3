//! Track types: ordered, kind-homogeneous timeline layers.

use serde::{Deserialize, Serialize};
use storyreel_core::{Id, Micros};

use crate::segment::Segment;

/// Kind of track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Video,
    Audio,
    Effect,
}

/// An ordered sequence of segments of one kind.
///
/// Segments are stored in non-decreasing target-start order matching
/// playback order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub attribute: u32,
    #[serde(default)]
    pub flag: u32,
    pub id: Id,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(rename = "type")]
    pub kind: TrackKind,
}

impl Track {
    /// Create an empty track with a fresh identifier.
    pub fn new(kind: TrackKind) -> Self {
        Self {
            attribute: 0,
            flag: 0,
            id: Id::generate(),
            segments: Vec::new(),
            kind,
        }
    }

    /// Append a segment at the end of playback order.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Latest end time among this track's segments.
    pub fn end(&self) -> Micros {
        self.segments
            .iter()
            .map(|s| s.target_timerange.end())
            .max()
            .unwrap_or(Micros::ZERO)
    }

    /// Sum of segment target durations (the track's occupied time).
    pub fn duration_sum(&self) -> Micros {
        self.segments.iter().map(|s| s.target_timerange.duration).sum()
    }

    /// True when segments are in non-decreasing start order with no two
    /// target ranges overlapping.
    pub fn is_ordered_disjoint(&self) -> bool {
        self.segments.windows(2).all(|pair| {
            pair[0].target_timerange.start <= pair[1].target_timerange.start
                && !pair[0].target_timerange.overlaps(pair[1].target_timerange)
        })
    }
}
