//! Shared fixtures: on-disk media files and template documents.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const SAMPLE_RATE: u32 = 8000;
const BYTES_PER_SAMPLE: u32 = 2;

/// Write a silent mono 16-bit PCM WAV of the given duration. The container
/// metadata (byte rate vs. data size) yields the duration exactly, which is
/// what the probe reads.
pub fn write_wav(path: &Path, seconds: f64) {
    let byte_rate = SAMPLE_RATE * BYTES_PER_SAMPLE;
    let data_len = ((seconds * byte_rate as f64).round() as u32) & !1;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&(BYTES_PER_SAMPLE as u16).to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.resize(44 + data_len as usize, 0);

    let mut file = File::create(path).unwrap();
    file.write_all(&out).unwrap();
}

/// Write `count` empty image files named `1.png` .. `count.png`.
pub fn write_images(dir: &Path, count: usize) {
    for i in 1..=count {
        File::create(dir.join(format!("{i}.png"))).unwrap();
    }
}

/// A bare template carrying only canvas defaults.
pub fn write_minimal_template(dir: &Path) -> PathBuf {
    let path = dir.join("template.json");
    std::fs::write(
        &path,
        r#"{
            "canvas_config": {"height": 1080, "ratio": "16:9", "width": 1920},
            "draft_name": "template"
        }"#,
    )
    .unwrap();
    path
}
