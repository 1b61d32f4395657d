//! Normalized float palette derived from the hue table.
//!
//! Each hue gets 32 ramp steps of `[r, g, b]` in `[0, 1]`, flattened to 96
//! floats. Channel `r` comes from bits 10-14 of the packed colour, `g` from
//! bits 5-9 and `b` from bits 0-4, each divided by 31.
//!
//! # Complexity
//! O(hue_count × 32). The palette is a snapshot; mutating the table after a
//! build does not update it.

use glam::Vec3;

use crate::convert::channels16;
use crate::layout::COLORS_PER_ENTRY;
use crate::table::HueTable;

/// Floats per hue: 32 steps × 3 channels.
pub const RAMP_LEN: usize = COLORS_PER_ENTRY * 3;

/// Float RGB ramps for every hue, indexed by 0-based hue (`hue - 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    ramps: Vec<[f32; RAMP_LEN]>,
}

impl Palette {
    /// Build the full palette from `table`.
    pub fn build(table: &HueTable) -> Self {
        let mut ramps = Vec::with_capacity(table.hue_count());
        for group in table.groups() {
            for entry in &group.entries {
                let mut ramp = [0.0_f32; RAMP_LEN];
                for (rgb, &c) in ramp.chunks_exact_mut(3).zip(&entry.colors) {
                    for (out, channel) in rgb.iter_mut().zip(channels16(c)) {
                        *out = f32::from(channel) / 31.0;
                    }
                }
                ramps.push(ramp);
            }
        }
        tracing::debug!("Built hue palette: {} ramps", ramps.len());
        Self { ramps }
    }

    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }

    pub fn ramps(&self) -> &[[f32; RAMP_LEN]] {
        &self.ramps
    }

    /// Ramp for a 0-based palette index.
    pub fn ramp(&self, index: usize) -> Option<&[f32; RAMP_LEN]> {
        self.ramps.get(index)
    }

    /// RGB of one ramp step.
    pub fn rgb(&self, index: usize, step: usize) -> Option<Vec3> {
        if step >= COLORS_PER_ENTRY {
            return None;
        }
        let ramp = self.ramp(index)?;
        Some(Vec3::from_slice(&ramp[step * 3..step * 3 + 3]))
    }

    /// The whole palette as raw bytes, ready for a storage buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.ramps.as_flattened())
    }
}
