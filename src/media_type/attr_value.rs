use bytes::Bytes;

use crate::guid::Guid;

// Raw variant-tag codes, numerically compatible with the platform's
// property-variant encoding so unrecognized tags print the real number.
pub const TAG_F64: u32 = 5;
pub const TAG_OBJECT: u32 = 13;
pub const TAG_U32: u32 = 19;
pub const TAG_U64: u32 = 21;
pub const TAG_STR: u32 = 31;
pub const TAG_GUID: u32 = 72;
pub const TAG_BLOB: u32 = 0x1011; // VECTOR | UI1

/// A typed attribute payload.
///
/// The discriminant set mirrors what a format description can actually hold:
/// plain integers, a double, a nested identifier, a string, an opaque byte
/// blob, an object reference, or a tag this crate does not recognize.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    U32(u32),
    U64(u64),
    F64(f64),
    Guid(Guid),
    Str(String),
    Blob(Bytes),
    /// Reference to some live framework object; only its presence is traced.
    Object,
    /// Carries the raw tag so diagnostics can show what was actually stored.
    Unknown(u32),
}

impl AttrValue {
    /// The raw variant-tag code for this value.
    pub fn tag(&self) -> u32 {
        match self {
            AttrValue::U32(_) => TAG_U32,
            AttrValue::U64(_) => TAG_U64,
            AttrValue::F64(_) => TAG_F64,
            AttrValue::Guid(_) => TAG_GUID,
            AttrValue::Str(_) => TAG_STR,
            AttrValue::Blob(_) => TAG_BLOB,
            AttrValue::Object => TAG_OBJECT,
            AttrValue::Unknown(tag) => *tag,
        }
    }
}
