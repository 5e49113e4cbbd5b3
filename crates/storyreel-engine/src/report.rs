//! The end-of-run summary.
//!
//! Surfaces the counts a user needs to diagnose an under- or
//! over-provisioned asset folder without reading logs.

use std::fmt;
use storyreel_core::Micros;

/// Counts collected across one synthesis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Audio segments processed.
    pub audio_segments: usize,
    /// Video segments emitted.
    pub video_segments: usize,
    /// Images bound to segments.
    pub images_used: usize,
    /// Images retired by the short-segment pacing rule.
    pub images_skipped: usize,
    /// Images never reached.
    pub images_unused: usize,
    /// Audio segments left without any image.
    pub starved_segments: usize,
    /// Timeline time left uncovered on the video track.
    pub unfilled: Micros,
    /// Warnings raised across the run.
    pub warnings: usize,
    /// Final document duration.
    pub total_duration: Micros,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "draft synthesis summary")?;
        writeln!(f, "  total duration:  {}", self.total_duration)?;
        writeln!(f, "  audio segments:  {}", self.audio_segments)?;
        writeln!(f, "  video segments:  {}", self.video_segments)?;
        writeln!(
            f,
            "  images:          {} used, {} skipped, {} unused",
            self.images_used, self.images_skipped, self.images_unused
        )?;
        if self.starved_segments > 0 {
            writeln!(
                f,
                "  uncovered:       {} across {} segment(s)",
                self.unfilled, self.starved_segments
            )?;
        }
        write!(f, "  warnings:        {}", self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mentions_gaps_only_when_present() {
        let mut report = BuildReport {
            audio_segments: 3,
            video_segments: 4,
            images_used: 4,
            images_skipped: 2,
            images_unused: 0,
            total_duration: Micros::from_secs_f64(3.8),
            ..Default::default()
        };
        let text = report.to_string();
        assert!(text.contains("4 used, 2 skipped"));
        assert!(!text.contains("uncovered"));

        report.starved_segments = 1;
        report.unfilled = Micros::from_secs(2);
        report.warnings = 1;
        let text = report.to_string();
        assert!(text.contains("uncovered"));
        assert!(text.contains("2.00s"));
    }
}
