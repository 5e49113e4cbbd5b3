//! Document integrity checks.
//!
//! A draft leaving the pipeline must satisfy:
//! - every material identifier is unique within the document
//! - every identifier a segment references (material or sidecar) resolves
//!   to a catalog entry
//! - segments within a track are ordered and their target ranges disjoint
//! - the designated video track covers `[0, total)` without gaps
//!
//! Violations come back as a list rather than an error so callers can decide
//! between reporting and aborting (image shortage legitimately produces
//! coverage gaps under the degrade policy).

use std::collections::HashSet;
use std::fmt;
use storyreel_core::{Id, Micros, TimeRange};

use crate::document::Draft;

/// One integrity violation found in a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The same identifier appears on more than one catalog entry.
    DuplicateMaterialId { id: Id },
    /// A segment references an identifier with no catalog entry.
    UnresolvedReference { segment: Id, reference: Id },
    /// A track's segments are out of order or overlapping.
    DisorderedTrack { track: Id },
    /// An uncovered span on the designated video track.
    CoverageGap { at: Micros, gap: Micros },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMaterialId { id } => write!(f, "duplicate material id {id}"),
            Self::UnresolvedReference { segment, reference } => {
                write!(f, "segment {segment} references unknown id {reference}")
            }
            Self::DisorderedTrack { track } => {
                write!(f, "track {track} has overlapping or out-of-order segments")
            }
            Self::CoverageGap { at, gap } => {
                write!(f, "video track gap of {gap} at {at}")
            }
        }
    }
}

impl Draft {
    /// Run the document-wide checks: identifier uniqueness, reference
    /// resolution, per-track ordering. Coverage is a separate per-track
    /// check, see [`Draft::coverage_gaps`].
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let mut seen: HashSet<&Id> = HashSet::new();
        for id in self.materials.all_ids() {
            if !seen.insert(id) {
                issues.push(ValidationIssue::DuplicateMaterialId { id: id.clone() });
            }
        }

        for track in &self.tracks {
            for segment in &track.segments {
                if !seen.contains(&segment.material_id) {
                    issues.push(ValidationIssue::UnresolvedReference {
                        segment: segment.id.clone(),
                        reference: segment.material_id.clone(),
                    });
                }
                for reference in &segment.extra_material_refs {
                    if !seen.contains(reference) {
                        issues.push(ValidationIssue::UnresolvedReference {
                            segment: segment.id.clone(),
                            reference: reference.clone(),
                        });
                    }
                }
            }
            if !track.is_ordered_disjoint() {
                issues.push(ValidationIssue::DisorderedTrack {
                    track: track.id.clone(),
                });
            }
        }

        issues
    }

    /// Uncovered spans of `[0, total)` on the given track, in timeline
    /// order. Empty when the track covers every instant.
    pub fn coverage_gaps(&self, track_id: &Id, total: Micros) -> Vec<TimeRange> {
        let Some(track) = self.track(track_id) else {
            return vec![TimeRange::from_zero(total)];
        };

        let mut gaps = Vec::new();
        let mut cursor = Micros::ZERO;
        for segment in &track.segments {
            let range = segment.target_timerange;
            if range.start > cursor {
                gaps.push(TimeRange::new(cursor, range.start - cursor));
            }
            if range.end() > cursor {
                cursor = range.end();
            }
        }
        if cursor < total {
            gaps.push(TimeRange::new(cursor, total - cursor));
        }
        gaps
    }
}
