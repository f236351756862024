use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

/// Base `Data2..Data4` shared by every FOURCC / wave-format derived subtype:
/// `xxxxxxxx-0000-0010-8000-00AA00389B71`.
const SUBTYPE_BASE_D4: [u8; 8] = [0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B, 0x71];

/// A 128-bit identifier in the classic Windows GUID layout.
///
/// Used as an opaque key: equality and hashing only, no ordering semantics.
/// `Display` renders the canonical braced form, which doubles as the
/// deterministic fallback name for identifiers missing from the known table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Video subtype derived from a FOURCC, e.g. `Guid::from_fourcc(*b"NV12")`.
    ///
    /// The four characters land in `data1` as a little-endian `u32`; the rest
    /// is the fixed media subtype base.
    pub const fn from_fourcc(fourcc: [u8; 4]) -> Self {
        Self {
            data1: u32::from_le_bytes(fourcc),
            data2: 0x0000,
            data3: 0x0010,
            data4: SUBTYPE_BASE_D4,
        }
    }

    /// Audio subtype derived from a legacy wave-format tag (PCM = 1, MP3 = 0x55, ...).
    pub const fn from_wave_format(tag: u16) -> Self {
        Self {
            data1: tag as u32,
            data2: 0x0000,
            data3: 0x0010,
            data4: SUBTYPE_BASE_D4,
        }
    }

    /// Serializes into the 16-byte mixed-endian wire layout (fields 1-3
    /// little-endian, `data4` as-is).
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut buf = [0u8; 16];
        LittleEndian::write_u32(&mut buf[0..4], self.data1);
        LittleEndian::write_u16(&mut buf[4..6], self.data2);
        LittleEndian::write_u16(&mut buf[6..8], self.data3);
        buf[8..16].copy_from_slice(&self.data4);
        buf
    }

    pub fn from_bytes(buf: &[u8; 16]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&buf[8..16]);
        Self {
            data1: LittleEndian::read_u32(&buf[0..4]),
            data2: LittleEndian::read_u16(&buf[4..6]),
            data3: LittleEndian::read_u16(&buf[6..8]),
            data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn display_is_canonical_braced_form() {
        let g = Guid::new(
            0x1652C33D,
            0xD6B2,
            0x4012,
            [0xB8, 0x34, 0x72, 0x03, 0x08, 0x49, 0xA3, 0x7D],
        );
        assert_eq!(g.to_string(), "{1652C33D-D6B2-4012-B834-72030849A37D}");
    }

    #[test]
    fn display_is_deterministic() {
        let g = Guid::from_fourcc(*b"XXXX");
        assert_eq!(g.to_string(), g.to_string());
        assert!(!g.to_string().is_empty());
    }

    #[test]
    fn fourcc_lands_in_data1_little_endian() {
        let g = Guid::from_fourcc(*b"NV12");
        assert_eq!(g.data1, 0x3231564E);
        assert_eq!(g.data2, 0x0000);
        assert_eq!(g.data3, 0x0010);
        assert_eq!(g.data4, SUBTYPE_BASE_D4);
    }

    #[test]
    fn fourcc_display_matches_platform_subtype_form() {
        let g = Guid::from_fourcc(*b"YUY2");
        assert_eq!(g.to_string(), "{32595559-0000-0010-8000-00AA00389B71}");
    }

    #[test]
    fn wave_format_tag_pcm() {
        let g = Guid::from_wave_format(0x0001);
        assert_eq!(g.data1, 1);
        assert_eq!(g.data4, SUBTYPE_BASE_D4);
        assert_eq!(g.to_string(), "{00000001-0000-0010-8000-00AA00389B71}");
    }

    #[test]
    fn bytes_round_trip() {
        let g = Guid::new(
            0xC459A2E8,
            0x3D2C,
            0x4E44,
            [0xB1, 0x32, 0xFE, 0xE5, 0x15, 0x6C, 0x7B, 0xB0],
        );
        assert_eq!(Guid::from_bytes(&g.to_bytes()), g);
    }

    #[test]
    fn wire_form_is_mixed_endian() {
        let g = Guid::new(
            0x01020304,
            0x0506,
            0x0708,
            [0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10],
        );
        assert_eq!(
            g.to_bytes(),
            [
                0x04, 0x03, 0x02, 0x01, // data1 LE
                0x06, 0x05, // data2 LE
                0x08, 0x07, // data3 LE
                0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10,
            ]
        );
    }
}
