//! Hue remap lookups.
//!
//! Every lookup takes a 1-based hue. Hue `0` means "no remap", as does any
//! hue at or past [`HueTable::hue_count`]; those fall back to an identity or
//! sentinel result instead of failing, so renderers can pass hue `0` freely.
//!
//! Lookups index a ramp in one of two ways. [`HueTable::remap_channel16`]
//! and the functions built on it use the colour's bits 10-14 as the ramp
//! step. [`HueTable::remap_polygon_color`] takes the value itself as the
//! step. Both conventions are relied on by existing art and are kept apart.

use crate::convert::{self, POLYGON_FALLBACK};
use crate::layout::COLORS_PER_ENTRY;
use crate::table::HueTable;

/// Ramp step selected by a packed colour: its bits 10-14.
#[inline]
const fn ramp_step(c: u16) -> usize {
    ((c >> 10) & 0x1F) as usize
}

/// Step used for text colour.
const FONT_STEP: usize = 8;

impl HueTable {
    /// Recolour `c` through `hue`, indexing the ramp by bits 10-14 of `c`.
    ///
    /// Returns `c` unchanged when `hue` does not select a ramp.
    pub fn remap_channel16(&self, c: u16, hue: u16) -> u16 {
        match self.entry(hue) {
            Some(entry) => entry.colors[ramp_step(c)],
            None => c,
        }
    }

    /// Expanded colour of ramp step `step` for `hue`.
    ///
    /// `step` is a direct ramp index, not a packed colour. Returns
    /// [`POLYGON_FALLBACK`] when `hue` does not select a ramp or `step` is
    /// past the end of it.
    pub fn remap_polygon_color(&self, step: u16, hue: u16) -> u32 {
        self.entry(hue)
            .and_then(|entry| entry.colors.get(usize::from(step)))
            .map_or(POLYGON_FALLBACK, |&c| convert::expand16_to32(c))
    }

    /// Text colour for `hue`: the expanded ramp step 8.
    ///
    /// Falls back to the expanded `c` when `hue` does not select a ramp.
    pub fn font_color(&self, c: u16, hue: u16) -> u32 {
        match self.entry(hue) {
            Some(entry) => convert::expand16_to32(entry.colors[FONT_STEP]),
            None => convert::expand16_to32(c),
        }
    }

    /// [`remap_channel16`](Self::remap_channel16) followed by expansion.
    pub fn remap_full(&self, c: u16, hue: u16) -> u32 {
        convert::expand16_to32(self.remap_channel16(c, hue))
    }

    /// Recolour `c` only if it is a pure gray.
    ///
    /// Coloured pixels (and every pixel when `hue` selects nothing) come back
    /// expanded but otherwise unchanged.
    pub fn remap_if_gray(&self, c: u16, hue: u16) -> u32 {
        let rgb = convert::expand16_to32(c);
        if convert::is_gray(rgb) && self.entry(hue).is_some() {
            self.remap_full(c, hue)
        } else {
            rgb
        }
    }
}

const _: () = assert!(FONT_STEP < COLORS_PER_ENTRY);
