//! Replacement group records for patching a loaded hue table.
//!
//! Patch sources only need to supply a header word and eight colour ramps.
//! Patch-archive records share the 708-byte group layout of the hue table.
//! Some sources widen each entry with 32 reserved colours; either way only
//! the header and colour tables are consumed.

use crate::error::PatchError;
use crate::layout::{
    self, COLORS_PER_ENTRY, ENTRIES_PER_GROUP, ENTRY_SIZE, EXTENDED_ENTRY_SIZE,
    EXTENDED_GROUP_SIZE, GROUP_SIZE,
};
use crate::table::HueGroup;

/// Byte shape of a replacement group record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchLayout {
    /// Patch-archive record: the same 708-byte layout as the hue table.
    Verdata,
    /// Each entry is followed by 32 reserved colours (1220-byte record).
    Extended,
}

impl PatchLayout {
    /// Size of one group record in this layout.
    pub const fn group_size(self) -> usize {
        match self {
            Self::Verdata => GROUP_SIZE,
            Self::Extended => EXTENDED_GROUP_SIZE,
        }
    }

    const fn entry_size(self) -> usize {
        match self {
            Self::Verdata => ENTRY_SIZE,
            Self::Extended => EXTENDED_ENTRY_SIZE,
        }
    }
}

/// The parts of a hue group a patch overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGroup {
    pub header: u32,
    pub color_tables: [[u16; COLORS_PER_ENTRY]; ENTRIES_PER_GROUP],
}

impl PatchGroup {
    /// Decode one replacement record from the start of `bytes`.
    ///
    /// Extra bytes past the record are ignored.
    pub fn decode(bytes: &[u8], layout: PatchLayout) -> Result<Self, PatchError> {
        let expected = layout.group_size();
        if bytes.len() < expected {
            return Err(PatchError::Truncated {
                expected,
                actual: bytes.len(),
            });
        }

        let entry_size = layout.entry_size();
        Ok(Self {
            header: layout::read_u32(bytes, 0),
            color_tables: std::array::from_fn(|i| {
                layout::read_color_table(bytes, layout::entry_offset(i, entry_size))
            }),
        })
    }
}

impl From<&HueGroup> for PatchGroup {
    fn from(group: &HueGroup) -> Self {
        Self {
            header: group.header,
            color_tables: std::array::from_fn(|i| group.entries[i].colors),
        }
    }
}
