//! Timeline allocation: binding images to audio segments.
//!
//! A single deterministic pass over the audio materials in order. The
//! allocator keeps an image cursor separate from the audio index and a
//! running timeline cursor equal to the audio duration consumed so far.
//!
//! Policy, per audio duration `d` against the short threshold:
//! - `d < threshold` (short): one image over the full range, then the
//!   following image is skipped permanently. One image held for a blink
//!   feels static; sacrificing its neighbor keeps the overall pacing even.
//! - `d >= threshold` (long): two images split the range as
//!   `floor(d/2)` + remainder. With exactly one image left, that image
//!   takes the whole range. The threshold comparison is strict `<` for
//!   short, uniformly.
//! - Out of images: nothing is emitted for that audio segment, the gap is
//!   counted, and the run continues.
//!
//! The timeline cursor advances by `d` in every case, so the audio timeline
//! stays intact no matter how the image inventory holds out.

use storyreel_core::{Id, Micros, TimeRange};
use tracing::{debug, warn};

use crate::catalog::AudioSlot;

/// Default short/long threshold: 1.5 seconds.
pub const DEFAULT_SHORT_THRESHOLD: Micros = Micros::new(1_500_000);

/// One image bound to a slice of the master timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Image material being shown.
    pub image: Id,
    /// Where on the master timeline.
    pub target: TimeRange,
    /// Strictly increasing draw order, starting at 1.
    pub render_index: u32,
}

/// Result of one allocation pass.
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// Emitted placements in timeline order.
    pub placements: Vec<Placement>,
    /// Final timeline cursor: the sum of all audio durations.
    pub cursor: Micros,
    /// Images bound to a segment.
    pub images_used: usize,
    /// Images sacrificed by the short-segment pacing rule.
    pub images_skipped: usize,
    /// Images never reached.
    pub images_unused: usize,
    /// Audio segments that got no image at all.
    pub starved_segments: usize,
    /// Total duration of timeline left uncovered.
    pub unfilled: Micros,
}

/// The allocation pass. All state is local to the value so runs are
/// reentrant and independently testable.
#[derive(Debug)]
pub struct Allocator {
    threshold: Micros,
    image_cursor: usize,
    next_render_index: u32,
    cursor: Micros,
}

impl Allocator {
    /// Create an allocator with the given short/long threshold.
    pub fn new(threshold: Micros) -> Self {
        Self {
            threshold,
            image_cursor: 0,
            next_render_index: 1,
            cursor: Micros::ZERO,
        }
    }

    /// Walk the audio slots in order and bind images from `images`.
    pub fn run(mut self, audio: &[AudioSlot], images: &[Id]) -> AllocationOutcome {
        let mut placements = Vec::new();
        let mut images_skipped = 0;
        let mut starved_segments = 0;
        let mut unfilled = Micros::ZERO;

        for (index, slot) in audio.iter().enumerate() {
            let d = slot.duration;
            let remaining = images.len().saturating_sub(self.image_cursor);

            if d < self.threshold {
                // Short segment: one image, and its follower is retired.
                if remaining == 0 {
                    warn!("audio segment {}: no images left, leaving a gap of {d}", index + 1);
                    starved_segments += 1;
                    unfilled += d;
                } else {
                    placements.push(self.bind(images, TimeRange::new(self.cursor, d)));
                    if remaining > 1 {
                        debug!(
                            "audio segment {}: short ({d}), skipping image {}",
                            index + 1,
                            self.image_cursor + 2
                        );
                        images_skipped += 1;
                    }
                    // One bound, one retired.
                    self.image_cursor += 2;
                }
            } else {
                // Long segment: two images split the range.
                match remaining {
                    0 => {
                        warn!("audio segment {}: no images left, leaving a gap of {d}", index + 1);
                        starved_segments += 1;
                        unfilled += d;
                    }
                    1 => {
                        placements.push(self.bind(images, TimeRange::new(self.cursor, d)));
                        self.image_cursor += 1;
                    }
                    _ => {
                        let first = d.half_floor();
                        placements.push(self.bind(images, TimeRange::new(self.cursor, first)));
                        self.image_cursor += 1;
                        placements.push(self.bind(
                            images,
                            TimeRange::new(self.cursor + first, d - first),
                        ));
                        self.image_cursor += 1;
                    }
                }
            }

            self.cursor += d;
        }

        let images_used = placements.len();
        AllocationOutcome {
            placements,
            cursor: self.cursor,
            images_used,
            images_skipped,
            images_unused: images.len().saturating_sub(self.image_cursor),
            starved_segments,
            unfilled,
        }
    }

    /// Emit a placement for the image under the cursor. Does not advance
    /// the image cursor; callers decide how far to move it.
    fn bind(&mut self, images: &[Id], target: TimeRange) -> Placement {
        let placement = Placement {
            image: images[self.image_cursor].clone(),
            target,
            render_index: self.next_render_index,
        };
        self.next_render_index += 1;
        placement
    }
}
