//! Catalog building: raw assets in, catalog materials out.

use std::path::Path;
use storyreel_core::{Id, Micros};
use storyreel_draft::{AudioKind, AudioMaterial, VisualMaterial};
use storyreel_media::Asset;
use tracing::debug;

/// What the allocator and assembler need to know about one audio material:
/// its catalog identifier and resolved duration.
#[derive(Debug, Clone)]
pub struct AudioSlot {
    pub id: Id,
    pub duration: Micros,
}

/// Build a narration material from a discovered asset and its resolved
/// duration. Returns the material together with its slot.
pub fn narration_material(asset: &Asset, duration: Micros) -> (AudioMaterial, AudioSlot) {
    let material = AudioMaterial::new(
        asset.file_name(),
        asset.path.to_string_lossy(),
        duration,
        AudioKind::ExtractMusic,
    );
    debug!("cataloged narration {} ({duration})", material.name);
    let slot = AudioSlot {
        id: material.id.clone(),
        duration,
    };
    (material, slot)
}

/// Build a still-image material from a discovered asset.
pub fn image_material(asset: &Asset) -> VisualMaterial {
    let material = VisualMaterial::photo(asset.file_name(), asset.path.to_string_lossy());
    debug!("cataloged image {}", material.material_name);
    material
}

/// Build a sound-effect material for the opening overlay.
pub fn sound_effect_material(path: &Path, duration: Micros) -> (AudioMaterial, AudioSlot) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let material = AudioMaterial::new(
        name,
        path.to_string_lossy(),
        duration,
        AudioKind::SoundEffect,
    );
    let slot = AudioSlot {
        id: material.id.clone(),
        duration,
    };
    (material, slot)
}
