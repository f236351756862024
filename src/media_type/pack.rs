//! Packed-pair helpers.
//!
//! Ratio-like attributes (frame rate, frame size, pixel aspect ratio) store
//! two 32-bit integers in one 64-bit payload: the first value in the high
//! half, the second in the low half.

pub const fn pack_u32_pair(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | (low as u64)
}

pub const fn unpack_u32_pair(packed: u64) -> (u32, u32) {
    ((packed >> 32) as u32, packed as u32)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn pack_then_unpack() {
        assert_eq!(unpack_u32_pair(pack_u32_pair(30, 1)), (30, 1));
        assert_eq!(unpack_u32_pair(pack_u32_pair(1920, 1080)), (1920, 1080));
    }

    #[test]
    fn halves_do_not_bleed() {
        assert_eq!(unpack_u32_pair(pack_u32_pair(u32::MAX, 0)), (u32::MAX, 0));
        assert_eq!(unpack_u32_pair(pack_u32_pair(0, u32::MAX)), (0, u32::MAX));
    }
}
