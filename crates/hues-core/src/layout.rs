//! Fixed-width record layout of the hue table and its patch records.
//!
//! Every multi-byte field is little-endian. Record sizes and field offsets
//! are derived from the field widths below and read at explicit byte
//! offsets; nothing here depends on how Rust lays out a struct in memory.
//!
//! ```text
//! group  = u32 header, 8 × entry                          (708 bytes)
//! entry  = [u16; 32] colors, u16 start, u16 end, [u8; 20] name  (88 bytes)
//! extended entry = entry, [u16; 32] reserved              (152 bytes)
//! ```

/// Packed colours in one hue ramp.
pub const COLORS_PER_ENTRY: usize = 32;
/// Hue entries in one group.
pub const ENTRIES_PER_GROUP: usize = 8;
/// Width of the fixed-length entry name.
pub const NAME_LEN: usize = 20;

const HEADER_SIZE: usize = 4;
const RESERVED_COLORS: usize = 32;

/// Size of one hue entry on disk.
pub const ENTRY_SIZE: usize = COLORS_PER_ENTRY * 2 + 2 + 2 + NAME_LEN;
/// Size of one hue group on disk.
pub const GROUP_SIZE: usize = HEADER_SIZE + ENTRIES_PER_GROUP * ENTRY_SIZE;
/// Size of one entry in an extended patch record (trailing reserved colours).
pub const EXTENDED_ENTRY_SIZE: usize = ENTRY_SIZE + RESERVED_COLORS * 2;
/// Size of one extended patch record.
pub const EXTENDED_GROUP_SIZE: usize = HEADER_SIZE + ENTRIES_PER_GROUP * EXTENDED_ENTRY_SIZE;

const _: () = assert!(ENTRY_SIZE == 88);
const _: () = assert!(GROUP_SIZE == 708);
const _: () = assert!(EXTENDED_GROUP_SIZE == 1220);

// Field offsets relative to the start of an entry.
pub(crate) const TABLE_START_OFFSET: usize = COLORS_PER_ENTRY * 2;
pub(crate) const TABLE_END_OFFSET: usize = TABLE_START_OFFSET + 2;
pub(crate) const NAME_OFFSET: usize = TABLE_END_OFFSET + 2;

/// Offset of entry `index` within a group whose entries are `entry_size` wide.
pub(crate) const fn entry_offset(index: usize, entry_size: usize) -> usize {
    HEADER_SIZE + index * entry_size
}

// The readers below index directly; callers slice to a full record first.

pub(crate) fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Read one 32-colour ramp starting at `offset`.
pub(crate) fn read_color_table(bytes: &[u8], offset: usize) -> [u16; COLORS_PER_ENTRY] {
    std::array::from_fn(|i| read_u16(bytes, offset + i * 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_follow_field_widths() {
        assert_eq!(TABLE_START_OFFSET, 64);
        assert_eq!(TABLE_END_OFFSET, 66);
        assert_eq!(NAME_OFFSET, 68);
        assert_eq!(entry_offset(0, ENTRY_SIZE), 4);
        assert_eq!(entry_offset(7, ENTRY_SIZE) + ENTRY_SIZE, GROUP_SIZE);
        assert_eq!(entry_offset(7, EXTENDED_ENTRY_SIZE) + EXTENDED_ENTRY_SIZE, EXTENDED_GROUP_SIZE);
    }

    #[test]
    fn test_readers_are_little_endian() {
        let bytes = [0x34, 0x12, 0x78, 0x56, 0xBC, 0x9A];
        assert_eq!(read_u16(&bytes, 0), 0x1234);
        assert_eq!(read_u16(&bytes, 1), 0x7812);
        assert_eq!(read_u32(&bytes, 0), 0x5678_1234);
    }

    #[test]
    fn test_read_color_table_reads_consecutive_words() {
        let bytes: Vec<u8> = (0..COLORS_PER_ENTRY as u16).flat_map(u16::to_le_bytes).collect();
        let table = read_color_table(&bytes, 0);
        for (i, c) in table.iter().enumerate() {
            assert_eq!(*c as usize, i);
        }
    }
}
