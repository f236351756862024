use crate::guid::Guid;
use crate::media_type::{
    attr_value::AttrValue,
    media_type_error::DumpError,
    pack::pack_u32_pair,
};

/// An ordered, indexable collection of `(identifier, value)` pairs
/// describing a media format.
///
/// The real source lives in the surrounding media stack; this trait is the
/// seam the dumper walks. `get` fails when the collection is exhausted early
/// or malformed, and the dumper treats that as fatal for the remaining walk.
pub trait AttributeSource {
    fn count(&self) -> usize;
    fn get(&self, index: usize) -> Result<(Guid, AttrValue), DumpError>;
}

/// In-memory format description: an ordered list of attributes with typed
/// setters. Setting an existing key replaces its value in place so the
/// attribute order stays stable.
#[derive(Debug, Clone, Default)]
pub struct MediaTypeDesc {
    entries: Vec<(Guid, AttrValue)>,
}

impl MediaTypeDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Guid, value: AttrValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn set_u32(&mut self, key: Guid, value: u32) {
        self.set(key, AttrValue::U32(value));
    }

    pub fn set_u64(&mut self, key: Guid, value: u64) {
        self.set(key, AttrValue::U64(value));
    }

    pub fn set_guid(&mut self, key: Guid, value: Guid) {
        self.set(key, AttrValue::Guid(value));
    }

    /// Stores two u32 values packed into one u64 payload, for the ratio-like
    /// attributes (frame rate, frame size, pixel aspect ratio).
    pub fn set_u32_pair(&mut self, key: Guid, high: u32, low: u32) {
        self.set(key, AttrValue::U64(pack_u32_pair(high, low)));
    }

    pub fn get_value(&self, key: &Guid) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl AttributeSource for MediaTypeDesc {
    fn count(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, index: usize) -> Result<(Guid, AttrValue), DumpError> {
        self.entries
            .get(index)
            .cloned()
            .ok_or(DumpError::Lookup { index })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::media_type::consts::{MF_MT_AUDIO_NUM_CHANNELS, MF_MT_FRAME_RATE};

    #[test]
    fn set_preserves_insertion_order() {
        let mut desc = MediaTypeDesc::new();
        desc.set_u32(MF_MT_AUDIO_NUM_CHANNELS, 2);
        desc.set_u32_pair(MF_MT_FRAME_RATE, 30, 1);

        assert_eq!(desc.count(), 2);
        let (first, _) = desc.get(0).unwrap();
        assert_eq!(first, MF_MT_AUDIO_NUM_CHANNELS);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut desc = MediaTypeDesc::new();
        desc.set_u32(MF_MT_AUDIO_NUM_CHANNELS, 2);
        desc.set_u32(MF_MT_AUDIO_NUM_CHANNELS, 6);

        assert_eq!(desc.count(), 1);
        assert_eq!(
            desc.get_value(&MF_MT_AUDIO_NUM_CHANNELS),
            Some(&AttrValue::U32(6))
        );
    }

    #[test]
    fn get_out_of_range_is_lookup_error() {
        let desc = MediaTypeDesc::new();
        assert_eq!(desc.get(0), Err(DumpError::Lookup { index: 0 }));
    }

    #[test]
    fn set_u32_pair_packs_high_then_low() {
        let mut desc = MediaTypeDesc::new();
        desc.set_u32_pair(MF_MT_FRAME_RATE, 30, 1);
        assert_eq!(
            desc.get_value(&MF_MT_FRAME_RATE),
            Some(&AttrValue::U64((30u64 << 32) | 1))
        );
    }
}
