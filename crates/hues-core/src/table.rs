//! In-memory hue and radar colour tables.
//!
//! A hue table is a flat run of 708-byte groups, eight named colour ramps per
//! group. Hues are addressed by a 1-based index across all groups, so hue `n`
//! lives in group `(n - 1) / 8`, entry `(n - 1) % 8`.

use serde::{Deserialize, Serialize};

use crate::layout::{
    self, COLORS_PER_ENTRY, ENTRIES_PER_GROUP, ENTRY_SIZE, GROUP_SIZE, NAME_LEN, NAME_OFFSET,
    TABLE_END_OFFSET, TABLE_START_OFFSET,
};
use crate::patch::PatchGroup;

/// One named colour ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueEntry {
    /// 32 packed 16-bit colours, darkest first.
    pub colors: [u16; COLORS_PER_ENTRY],
    /// Range marker; informational only.
    pub table_start: u16,
    /// Range marker; informational only.
    pub table_end: u16,
    /// Fixed-width name bytes, not NUL-delimited on disk.
    pub name: [u8; NAME_LEN],
}

impl HueEntry {
    /// Decode one entry from the first [`ENTRY_SIZE`] bytes of `bytes`.
    pub(crate) fn decode(bytes: &[u8]) -> Self {
        let mut name = [0u8; NAME_LEN];
        name.copy_from_slice(&bytes[NAME_OFFSET..NAME_OFFSET + NAME_LEN]);
        Self {
            colors: layout::read_color_table(bytes, 0),
            table_start: layout::read_u16(bytes, TABLE_START_OFFSET),
            table_end: layout::read_u16(bytes, TABLE_END_OFFSET),
            name,
        }
    }

    /// The entry name up to the first NUL, decoded as Latin-1.
    pub fn name(&self) -> String {
        self.name
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect()
    }
}

impl Default for HueEntry {
    fn default() -> Self {
        Self {
            colors: [0; COLORS_PER_ENTRY],
            table_start: 0,
            table_end: 0,
            name: [0; NAME_LEN],
        }
    }
}

/// A header word followed by eight hue entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HueGroup {
    /// Unused by any conversion; preserved verbatim.
    pub header: u32,
    pub entries: [HueEntry; ENTRIES_PER_GROUP],
}

impl HueGroup {
    /// Decode one group from the first [`GROUP_SIZE`] bytes of `bytes`.
    pub(crate) fn decode(bytes: &[u8]) -> Self {
        Self {
            header: layout::read_u32(bytes, 0),
            entries: std::array::from_fn(|i| {
                let start = layout::entry_offset(i, ENTRY_SIZE);
                HueEntry::decode(&bytes[start..start + ENTRY_SIZE])
            }),
        }
    }
}

/// The decoded hue table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HueTable {
    groups: Vec<HueGroup>,
}

impl HueTable {
    /// Build a table from already decoded groups.
    pub fn new(groups: Vec<HueGroup>) -> Self {
        Self { groups }
    }

    /// Decode as many whole groups as `bytes` holds.
    ///
    /// Trailing bytes that do not make up a full 708-byte group are ignored.
    pub fn decode(bytes: &[u8]) -> Self {
        let groups = bytes.chunks_exact(GROUP_SIZE).map(HueGroup::decode).collect();
        Self { groups }
    }

    /// Number of groups in the table.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of addressable hues (`group_count * 8`).
    pub fn hue_count(&self) -> usize {
        self.groups.len() * ENTRIES_PER_GROUP
    }

    pub fn groups(&self) -> &[HueGroup] {
        &self.groups
    }

    /// Group at a 0-based index.
    pub fn group(&self, index: usize) -> Option<&HueGroup> {
        self.groups.get(index)
    }

    /// Resolve a 1-based hue to its ramp.
    ///
    /// Returns `None` for hue `0` (no remap) and for any hue at or beyond
    /// [`hue_count`](Self::hue_count). Hue `hue_count` itself falls back.
    pub fn entry(&self, hue: u16) -> Option<&HueEntry> {
        if hue == 0 || usize::from(hue) >= self.hue_count() {
            return None;
        }
        let index = usize::from(hue - 1);
        let group = &self.groups[index / ENTRIES_PER_GROUP];
        Some(&group.entries[index % ENTRIES_PER_GROUP])
    }

    /// Overwrite the header and colour tables of one group.
    ///
    /// `index` is 0-based. Negative or out-of-range indices are ignored, so
    /// stale patch data cannot fail a load. Names and range markers keep
    /// their previous values.
    pub fn replace_group(&mut self, index: i32, patch: &PatchGroup) {
        let group_count = self.groups.len();
        let Some(group) = usize::try_from(index)
            .ok()
            .and_then(|i| self.groups.get_mut(i))
        else {
            tracing::debug!("Ignoring hue patch for group {index} (table has {group_count} groups)");
            return;
        };

        group.header = patch.header;
        for (entry, colors) in group.entries.iter_mut().zip(&patch.color_tables) {
            entry.colors = *colors;
        }
    }
}

/// Radar map colours, one packed 16-bit colour per map colour class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RadarColorTable {
    colors: Vec<u16>,
}

impl RadarColorTable {
    pub fn new(colors: Vec<u16>) -> Self {
        Self { colors }
    }

    /// Decode a headerless run of little-endian `u16` values.
    ///
    /// An odd trailing byte is ignored.
    pub fn decode(bytes: &[u8]) -> Self {
        let colors = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[u16] {
        &self.colors
    }

    /// Radar colour at `index`, or `0` when out of range.
    pub fn color(&self, index: usize) -> u16 {
        self.colors.get(index).copied().unwrap_or(0)
    }
}
