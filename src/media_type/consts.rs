//! Well-known media format identifiers.
//!
//! These are the platform-defined GUIDs a format description is keyed by:
//! per-attribute keys (`MF_MT_*`), the major media types, and the video /
//! audio subtype families. Subtypes derive from a FOURCC or a legacy
//! wave-format tag over a fixed base; everything else is a standalone GUID.

use crate::guid::Guid;

const SUBTYPE_D4: [u8; 8] = [0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B, 0x71];

/// RGB subtypes reuse legacy display-format codes instead of a FOURCC.
const fn display_format(code: u32) -> Guid {
    Guid::new(code, 0x0000, 0x0010, SUBTYPE_D4)
}

// ---------------------------------------------------------------------------
// Format attribute keys
// ---------------------------------------------------------------------------

pub const MF_MT_MAJOR_TYPE: Guid = Guid::new(
    0x48EBA18E,
    0xF8C9,
    0x4687,
    [0xBF, 0x11, 0x0A, 0x74, 0xC9, 0xF9, 0x6A, 0x8F],
);
pub const MF_MT_SUBTYPE: Guid = Guid::new(
    0xF7E34C9A,
    0x42E8,
    0x4714,
    [0xB7, 0x4B, 0xCB, 0x29, 0xD7, 0x2C, 0x35, 0xE5],
);
pub const MF_MT_ALL_SAMPLES_INDEPENDENT: Guid = Guid::new(
    0xC9173739,
    0x5E56,
    0x461C,
    [0xB7, 0x13, 0x46, 0xFB, 0x99, 0x5C, 0xB9, 0x5F],
);
pub const MF_MT_FIXED_SIZE_SAMPLES: Guid = Guid::new(
    0xB8EBEFAF,
    0xB718,
    0x4E04,
    [0xB0, 0xA9, 0x11, 0x67, 0x75, 0xE3, 0x32, 0x1B],
);
pub const MF_MT_COMPRESSED: Guid = Guid::new(
    0x3AFD0CEE,
    0x18F2,
    0x4BA5,
    [0xA1, 0x10, 0x8B, 0xEA, 0x50, 0x2E, 0x1F, 0x92],
);
pub const MF_MT_SAMPLE_SIZE: Guid = Guid::new(
    0xDAD3AB78,
    0x1990,
    0x408B,
    [0xBC, 0xE2, 0xEB, 0xA6, 0x73, 0xDA, 0xCC, 0x10],
);
pub const MF_MT_WRAPPED_TYPE: Guid = Guid::new(
    0x4D3F7B23,
    0xD02F,
    0x4E6C,
    [0x9B, 0xEE, 0xE4, 0xBF, 0x2C, 0x6C, 0x69, 0x5D],
);

// Audio attributes.

pub const MF_MT_AUDIO_NUM_CHANNELS: Guid = Guid::new(
    0x37E48BF5,
    0x645E,
    0x4C5B,
    [0x89, 0xDE, 0xAD, 0xA9, 0xE2, 0x9B, 0x69, 0x6A],
);
pub const MF_MT_AUDIO_SAMPLES_PER_SECOND: Guid = Guid::new(
    0x5FAEEAE7,
    0x0290,
    0x4C31,
    [0x9E, 0x8A, 0xC5, 0x34, 0xF6, 0x8D, 0x9D, 0xBA],
);
pub const MF_MT_AUDIO_FLOAT_SAMPLES_PER_SECOND: Guid = Guid::new(
    0xFB3B724A,
    0xCFB5,
    0x4319,
    [0xAE, 0xFE, 0x6E, 0x42, 0xB2, 0x40, 0x61, 0x32],
);
pub const MF_MT_AUDIO_AVG_BYTES_PER_SECOND: Guid = Guid::new(
    0x1AAB75C8,
    0xCFEF,
    0x451C,
    [0xAB, 0x95, 0xAC, 0x03, 0x4B, 0x8E, 0x17, 0x31],
);
pub const MF_MT_AUDIO_BLOCK_ALIGNMENT: Guid = Guid::new(
    0x322DE230,
    0x9EEB,
    0x43BD,
    [0xAB, 0x7A, 0xFF, 0x41, 0x22, 0x51, 0x54, 0x1D],
);
pub const MF_MT_AUDIO_BITS_PER_SAMPLE: Guid = Guid::new(
    0xF2DEB57F,
    0x40FA,
    0x4764,
    [0xAA, 0x33, 0xED, 0x4F, 0x2D, 0x1F, 0xF6, 0x69],
);
pub const MF_MT_AUDIO_VALID_BITS_PER_SAMPLE: Guid = Guid::new(
    0xD9BF8D6A,
    0x9530,
    0x4B7C,
    [0x9D, 0xDF, 0xFF, 0x6F, 0xD5, 0x8B, 0xBD, 0x06],
);
pub const MF_MT_AUDIO_SAMPLES_PER_BLOCK: Guid = Guid::new(
    0xAAB15AAC,
    0xE13A,
    0x4995,
    [0x92, 0x22, 0x50, 0x1E, 0xA1, 0x5C, 0x68, 0x77],
);
pub const MF_MT_AUDIO_CHANNEL_MASK: Guid = Guid::new(
    0x55FB5765,
    0x644A,
    0x4CAF,
    [0x84, 0x79, 0x93, 0x89, 0x83, 0xBB, 0x15, 0x88],
);
pub const MF_MT_AUDIO_FOLDDOWN_MATRIX: Guid = Guid::new(
    0x9D62927C,
    0x36BE,
    0x4CF2,
    [0xB5, 0xC4, 0xA3, 0x92, 0x6E, 0x3E, 0x87, 0x11],
);
pub const MF_MT_AUDIO_WMADRC_PEAKREF: Guid = Guid::new(
    0x9D62927D,
    0x36BE,
    0x4CF2,
    [0xB5, 0xC4, 0xA3, 0x92, 0x6E, 0x3E, 0x87, 0x11],
);
pub const MF_MT_AUDIO_WMADRC_PEAKTARGET: Guid = Guid::new(
    0x9D62927E,
    0x36BE,
    0x4CF2,
    [0xB5, 0xC4, 0xA3, 0x92, 0x6E, 0x3E, 0x87, 0x11],
);
pub const MF_MT_AUDIO_WMADRC_AVGREF: Guid = Guid::new(
    0x9D62927F,
    0x36BE,
    0x4CF2,
    [0xB5, 0xC4, 0xA3, 0x92, 0x6E, 0x3E, 0x87, 0x11],
);
pub const MF_MT_AUDIO_WMADRC_AVGTARGET: Guid = Guid::new(
    0x9D629280,
    0x36BE,
    0x4CF2,
    [0xB5, 0xC4, 0xA3, 0x92, 0x6E, 0x3E, 0x87, 0x11],
);
pub const MF_MT_AUDIO_PREFER_WAVEFORMATEX: Guid = Guid::new(
    0xA901AABA,
    0xE037,
    0x458A,
    [0xBD, 0xF6, 0x54, 0x5B, 0xE2, 0x07, 0x40, 0x42],
);

// Video attributes. FRAME_SIZE, FRAME_RATE and PIXEL_ASPECT_RATIO carry two
// u32 values packed into one u64 payload.

pub const MF_MT_FRAME_SIZE: Guid = Guid::new(
    0x1652C33D,
    0xD6B2,
    0x4012,
    [0xB8, 0x34, 0x72, 0x03, 0x08, 0x49, 0xA3, 0x7D],
);
pub const MF_MT_FRAME_RATE: Guid = Guid::new(
    0xC459A2E8,
    0x3D2C,
    0x4E44,
    [0xB1, 0x32, 0xFE, 0xE5, 0x15, 0x6C, 0x7B, 0xB0],
);
pub const MF_MT_PIXEL_ASPECT_RATIO: Guid = Guid::new(
    0xC6376A1E,
    0x8D0A,
    0x4027,
    [0xBE, 0x45, 0x6D, 0x9A, 0x0A, 0xD3, 0x9B, 0xB6],
);
pub const MF_MT_DRM_FLAGS: Guid = Guid::new(
    0x8772F323,
    0x355A,
    0x4CC7,
    [0xBB, 0x78, 0x6D, 0x61, 0xA0, 0x48, 0xAE, 0x82],
);
pub const MF_MT_PAD_CONTROL_FLAGS: Guid = Guid::new(
    0x4D0E73E5,
    0x80EA,
    0x4354,
    [0xA9, 0xD0, 0x11, 0x76, 0xCE, 0xB0, 0x28, 0xEA],
);
pub const MF_MT_SOURCE_CONTENT_HINT: Guid = Guid::new(
    0x68ACA3CC,
    0x22D0,
    0x44E6,
    [0x85, 0xF8, 0x28, 0x16, 0x71, 0x97, 0xFA, 0x38],
);
pub const MF_MT_VIDEO_CHROMA_SITING: Guid = Guid::new(
    0x65DF2370,
    0xC773,
    0x4C33,
    [0xAA, 0x64, 0x84, 0x3E, 0x06, 0x8E, 0xFB, 0x0C],
);
pub const MF_MT_INTERLACE_MODE: Guid = Guid::new(
    0xE2724BB8,
    0xE676,
    0x4806,
    [0xB4, 0xB2, 0xA8, 0xD6, 0xEF, 0xB4, 0x4C, 0xCD],
);
pub const MF_MT_TRANSFER_FUNCTION: Guid = Guid::new(
    0x5FB0FCE9,
    0xBE5C,
    0x4935,
    [0xA8, 0x11, 0xEC, 0x83, 0x8F, 0x8E, 0xED, 0x93],
);
pub const MF_MT_VIDEO_PRIMARIES: Guid = Guid::new(
    0xDBFBE4D7,
    0x0740,
    0x4EE0,
    [0x81, 0x92, 0x85, 0x0A, 0xB0, 0xE2, 0x19, 0x35],
);
pub const MF_MT_CUSTOM_VIDEO_PRIMARIES: Guid = Guid::new(
    0x47537213,
    0x8CFB,
    0x4722,
    [0xAA, 0x34, 0xFB, 0xC9, 0xE2, 0x4D, 0x77, 0xB8],
);
pub const MF_MT_YUV_MATRIX: Guid = Guid::new(
    0x3E23D450,
    0x2C75,
    0x4D25,
    [0xA0, 0x0E, 0xB9, 0x16, 0x70, 0xD1, 0x23, 0x27],
);
pub const MF_MT_VIDEO_LIGHTING: Guid = Guid::new(
    0x53A0529C,
    0x890B,
    0x4216,
    [0x8B, 0xF9, 0x59, 0x93, 0x67, 0xAD, 0x6D, 0x20],
);
pub const MF_MT_VIDEO_NOMINAL_RANGE: Guid = Guid::new(
    0xC21B8EE5,
    0xB956,
    0x4071,
    [0x8D, 0xAF, 0x32, 0x5E, 0xDF, 0x5C, 0xAB, 0x11],
);
pub const MF_MT_GEOMETRIC_APERTURE: Guid = Guid::new(
    0x66758743,
    0x7E5F,
    0x400D,
    [0x98, 0x0A, 0xAA, 0x85, 0x96, 0xC8, 0x56, 0x96],
);
pub const MF_MT_MINIMUM_DISPLAY_APERTURE: Guid = Guid::new(
    0xD7388766,
    0x18FE,
    0x48C6,
    [0xA1, 0x77, 0xEE, 0x89, 0x48, 0x67, 0xC8, 0xC4],
);
pub const MF_MT_PAN_SCAN_APERTURE: Guid = Guid::new(
    0x79614DDE,
    0x9187,
    0x48FB,
    [0xB8, 0xC7, 0x4D, 0x52, 0x68, 0x9D, 0xE6, 0x49],
);
pub const MF_MT_PAN_SCAN_ENABLED: Guid = Guid::new(
    0x4B7F6BC3,
    0x8B13,
    0x40B2,
    [0xA9, 0x93, 0xAB, 0xF6, 0x30, 0xB8, 0x20, 0x4E],
);
pub const MF_MT_AVG_BITRATE: Guid = Guid::new(
    0x20332624,
    0xFB0D,
    0x4D9E,
    [0xBD, 0x0D, 0xCB, 0xF6, 0x78, 0x6C, 0x10, 0x2E],
);
pub const MF_MT_AVG_BIT_ERROR_RATE: Guid = Guid::new(
    0x799CABD6,
    0x3508,
    0x4DB4,
    [0xA3, 0xC7, 0x56, 0x9C, 0xD5, 0x33, 0xDE, 0xB1],
);
pub const MF_MT_MAX_KEYFRAME_SPACING: Guid = Guid::new(
    0xC16EB52B,
    0x73A1,
    0x476F,
    [0x8D, 0x62, 0x83, 0x9D, 0x6A, 0x02, 0x06, 0x52],
);
pub const MF_MT_DEFAULT_STRIDE: Guid = Guid::new(
    0x644B4E48,
    0x1E02,
    0x4516,
    [0xB0, 0xEB, 0xC0, 0x1C, 0xA9, 0xD4, 0x9A, 0xC6],
);
pub const MF_MT_PALETTE: Guid = Guid::new(
    0x6D283F42,
    0x9846,
    0x4010,
    [0xBF, 0x5F, 0x6A, 0xA6, 0xDF, 0xB6, 0xFA, 0x93],
);
pub const MF_MT_USER_DATA: Guid = Guid::new(
    0xB6BC765F,
    0x4C3B,
    0x40A4,
    [0xBD, 0x51, 0x25, 0x35, 0xB6, 0x6F, 0xE0, 0x9D],
);
pub const MF_MT_AM_FORMAT_TYPE: Guid = Guid::new(
    0x73D1072D,
    0x1870,
    0x4174,
    [0xA0, 0x63, 0x29, 0xFF, 0x4F, 0xF6, 0xC1, 0x1E],
);

// MPEG / DV attributes.

pub const MF_MT_MPEG_START_TIME_CODE: Guid = Guid::new(
    0x91F67885,
    0x4333,
    0x4280,
    [0x97, 0xCD, 0xBD, 0x5A, 0x6C, 0x03, 0xA0, 0x6E],
);
pub const MF_MT_MPEG2_PROFILE: Guid = Guid::new(
    0xAD76A80B,
    0x2D5C,
    0x4E0B,
    [0xB3, 0x75, 0x64, 0xE5, 0x20, 0x13, 0x70, 0x36],
);
pub const MF_MT_MPEG2_LEVEL: Guid = Guid::new(
    0x96F66574,
    0x11C5,
    0x4015,
    [0x86, 0x66, 0xBF, 0xF5, 0x16, 0x43, 0x6D, 0xA7],
);
pub const MF_MT_MPEG2_FLAGS: Guid = Guid::new(
    0x31E3991D,
    0xF701,
    0x4B2F,
    [0xB4, 0x26, 0x8A, 0xE3, 0xBD, 0xA9, 0xE0, 0x4B],
);
pub const MF_MT_MPEG_SEQUENCE_HEADER: Guid = Guid::new(
    0x3C036DE7,
    0x3AD0,
    0x4C9E,
    [0x92, 0x16, 0xEE, 0x6D, 0x6A, 0xC2, 0x1C, 0xB3],
);
pub const MF_MT_DV_AAUX_SRC_PACK_0: Guid = Guid::new(
    0x84BD5D88,
    0x0FB8,
    0x4AC8,
    [0xBE, 0x4B, 0xA8, 0x84, 0x8B, 0xEF, 0x98, 0xF3],
);
pub const MF_MT_DV_AAUX_CTRL_PACK_0: Guid = Guid::new(
    0xF731004E,
    0x1DD1,
    0x4515,
    [0xAA, 0xBE, 0xF0, 0xC0, 0x6A, 0xA5, 0x36, 0xAC],
);
pub const MF_MT_DV_AAUX_SRC_PACK_1: Guid = Guid::new(
    0x720E6544,
    0x0225,
    0x4003,
    [0xA6, 0x51, 0x01, 0x96, 0x56, 0x3A, 0x95, 0x8E],
);
pub const MF_MT_DV_AAUX_CTRL_PACK_1: Guid = Guid::new(
    0xCD1F470D,
    0x1F04,
    0x4FE0,
    [0xBF, 0xB9, 0xD0, 0x7A, 0xE0, 0x38, 0x6A, 0xD8],
);
pub const MF_MT_DV_VAUX_SRC_PACK: Guid = Guid::new(
    0x41402D9D,
    0x7B57,
    0x43C6,
    [0xB1, 0x29, 0x2C, 0xB9, 0x97, 0xF1, 0x50, 0x09],
);
pub const MF_MT_DV_VAUX_CTRL_PACK: Guid = Guid::new(
    0x2F84E1C4,
    0x0DA1,
    0x4788,
    [0x93, 0x8E, 0x0D, 0xFB, 0xFB, 0xB3, 0x4B, 0x48],
);

// Newer attributes (AAC, arbitrary binary formats, MPEG-4 boxes).

pub const MF_MT_AAC_PAYLOAD_TYPE: Guid = Guid::new(
    0xBFBABE79,
    0x7434,
    0x4D1C,
    [0x94, 0xF0, 0x72, 0xA3, 0xB9, 0xE1, 0x71, 0x88],
);
pub const MF_MT_AAC_AUDIO_PROFILE_LEVEL_INDICATION: Guid = Guid::new(
    0x7632F0E6,
    0x9538,
    0x4D61,
    [0xAC, 0xDA, 0xEA, 0x29, 0xC8, 0xC1, 0x44, 0x56],
);
pub const MF_MT_ARBITRARY_HEADER: Guid = Guid::new(
    0x9E6BD6F5,
    0x0109,
    0x4F95,
    [0x84, 0xAC, 0x93, 0x09, 0x15, 0x3A, 0x19, 0xFC],
);
pub const MF_MT_ARBITRARY_FORMAT: Guid = Guid::new(
    0x5A75B249,
    0x0D7D,
    0x49A1,
    [0xA1, 0xC3, 0xE0, 0xD8, 0x7F, 0x0C, 0xAD, 0xE5],
);
pub const MF_MT_IMAGE_LOSS_TOLERANT: Guid = Guid::new(
    0xED062CF4,
    0xE34E,
    0x4922,
    [0xBE, 0x99, 0x93, 0x40, 0x32, 0x13, 0x3D, 0x7C],
);
pub const MF_MT_MPEG4_SAMPLE_DESCRIPTION: Guid = Guid::new(
    0x261E9D83,
    0x9529,
    0x4B8F,
    [0xA1, 0x11, 0x8B, 0x9C, 0x95, 0x0A, 0x81, 0xA9],
);
pub const MF_MT_MPEG4_CURRENT_SAMPLE_ENTRY: Guid = Guid::new(
    0x9AA7E155,
    0xB64A,
    0x4C1D,
    [0xA5, 0x00, 0x45, 0x5D, 0x60, 0x0B, 0x65, 0x60],
);
pub const MF_MT_ORIGINAL_4CC: Guid = Guid::new(
    0xD7BE3FE0,
    0x2BC7,
    0x492D,
    [0xB8, 0x43, 0x61, 0xA1, 0x91, 0x9B, 0x70, 0xC3],
);
pub const MF_MT_ORIGINAL_WAVE_FORMAT_TAG: Guid = Guid::new(
    0x8CBBC843,
    0x9FD9,
    0x49C2,
    [0x88, 0x2F, 0xA7, 0x25, 0x86, 0xC4, 0x08, 0xAD],
);
pub const MF_MT_FRAME_RATE_RANGE_MIN: Guid = Guid::new(
    0xD2E7558C,
    0xDC1F,
    0x403F,
    [0x9A, 0x72, 0xD2, 0x8B, 0xB1, 0xEB, 0x3B, 0x5E],
);
pub const MF_MT_FRAME_RATE_RANGE_MAX: Guid = Guid::new(
    0xE3371D41,
    0xB4CF,
    0x4A05,
    [0xBD, 0x4E, 0x20, 0xB8, 0x8B, 0xB2, 0xC4, 0xD6],
);

// ---------------------------------------------------------------------------
// Major media types
// ---------------------------------------------------------------------------

pub const MFMEDIATYPE_DEFAULT: Guid = Guid::new(
    0x81A412E6,
    0x8103,
    0x4B06,
    [0x85, 0x7F, 0x18, 0x62, 0x78, 0x10, 0x24, 0xAC],
);
pub const MFMEDIATYPE_AUDIO: Guid = Guid::from_fourcc(*b"auds");
pub const MFMEDIATYPE_VIDEO: Guid = Guid::from_fourcc(*b"vids");
pub const MFMEDIATYPE_PROTECTED: Guid = Guid::new(
    0x7B4B6FE6,
    0x9D04,
    0x4494,
    [0xBE, 0x14, 0x7E, 0x0B, 0xD0, 0x76, 0xC8, 0xE4],
);
pub const MFMEDIATYPE_SAMI: Guid = Guid::new(
    0xE69669A0,
    0x3DCD,
    0x40CB,
    [0x9E, 0x2E, 0x37, 0x08, 0x38, 0x7C, 0x06, 0x16],
);
pub const MFMEDIATYPE_SCRIPT: Guid = Guid::new(
    0x72178C22,
    0xE45B,
    0x11D5,
    [0xBC, 0x2A, 0x00, 0xB0, 0xD0, 0xF3, 0xF4, 0xAB],
);
pub const MFMEDIATYPE_IMAGE: Guid = Guid::new(
    0x72178C23,
    0xE45B,
    0x11D5,
    [0xBC, 0x2A, 0x00, 0xB0, 0xD0, 0xF3, 0xF4, 0xAB],
);
pub const MFMEDIATYPE_HTML: Guid = Guid::new(
    0x72178C24,
    0xE45B,
    0x11D5,
    [0xBC, 0x2A, 0x00, 0xB0, 0xD0, 0xF3, 0xF4, 0xAB],
);
pub const MFMEDIATYPE_BINARY: Guid = Guid::new(
    0x72178C25,
    0xE45B,
    0x11D5,
    [0xBC, 0x2A, 0x00, 0xB0, 0xD0, 0xF3, 0xF4, 0xAB],
);
pub const MFMEDIATYPE_FILETRANSFER: Guid = Guid::new(
    0x72178C26,
    0xE45B,
    0x11D5,
    [0xBC, 0x2A, 0x00, 0xB0, 0xD0, 0xF3, 0xF4, 0xAB],
);

// ---------------------------------------------------------------------------
// Video subtypes
// ---------------------------------------------------------------------------

pub const MFVIDEOFORMAT_RGB32: Guid = display_format(22); // X8R8G8B8
pub const MFVIDEOFORMAT_ARGB32: Guid = display_format(21); // A8R8G8B8
pub const MFVIDEOFORMAT_RGB24: Guid = display_format(20); // R8G8B8
pub const MFVIDEOFORMAT_RGB555: Guid = display_format(24); // X1R5G5B5
pub const MFVIDEOFORMAT_RGB565: Guid = display_format(23); // R5G6B5
pub const MFVIDEOFORMAT_AI44: Guid = Guid::from_fourcc(*b"AI44");
pub const MFVIDEOFORMAT_AYUV: Guid = Guid::from_fourcc(*b"AYUV");
pub const MFVIDEOFORMAT_YUY2: Guid = Guid::from_fourcc(*b"YUY2");
pub const MFVIDEOFORMAT_UYVY: Guid = Guid::from_fourcc(*b"UYVY");
pub const MFVIDEOFORMAT_NV11: Guid = Guid::from_fourcc(*b"NV11");
pub const MFVIDEOFORMAT_NV12: Guid = Guid::from_fourcc(*b"NV12");
pub const MFVIDEOFORMAT_YV12: Guid = Guid::from_fourcc(*b"YV12");
pub const MFVIDEOFORMAT_IYUV: Guid = Guid::from_fourcc(*b"IYUV");
pub const MFVIDEOFORMAT_I420: Guid = Guid::from_fourcc(*b"I420");
pub const MFVIDEOFORMAT_Y210: Guid = Guid::from_fourcc(*b"Y210");
pub const MFVIDEOFORMAT_Y216: Guid = Guid::from_fourcc(*b"Y216");
pub const MFVIDEOFORMAT_Y410: Guid = Guid::from_fourcc(*b"Y410");
pub const MFVIDEOFORMAT_Y416: Guid = Guid::from_fourcc(*b"Y416");
pub const MFVIDEOFORMAT_P210: Guid = Guid::from_fourcc(*b"P210");
pub const MFVIDEOFORMAT_P216: Guid = Guid::from_fourcc(*b"P216");
pub const MFVIDEOFORMAT_P010: Guid = Guid::from_fourcc(*b"P010");
pub const MFVIDEOFORMAT_P016: Guid = Guid::from_fourcc(*b"P016");
pub const MFVIDEOFORMAT_V210: Guid = Guid::from_fourcc(*b"v210");
pub const MFVIDEOFORMAT_V410: Guid = Guid::from_fourcc(*b"v410");
pub const MFVIDEOFORMAT_MP43: Guid = Guid::from_fourcc(*b"MP43");
pub const MFVIDEOFORMAT_MP4S: Guid = Guid::from_fourcc(*b"MP4S");
pub const MFVIDEOFORMAT_M4S2: Guid = Guid::from_fourcc(*b"M4S2");
pub const MFVIDEOFORMAT_MP4V: Guid = Guid::from_fourcc(*b"MP4V");
pub const MFVIDEOFORMAT_H264: Guid = Guid::from_fourcc(*b"H264");
pub const MFVIDEOFORMAT_WMV1: Guid = Guid::from_fourcc(*b"WMV1");
pub const MFVIDEOFORMAT_WMV2: Guid = Guid::from_fourcc(*b"WMV2");
pub const MFVIDEOFORMAT_WMV3: Guid = Guid::from_fourcc(*b"WMV3");
pub const MFVIDEOFORMAT_WVC1: Guid = Guid::from_fourcc(*b"WVC1");
pub const MFVIDEOFORMAT_MSS1: Guid = Guid::from_fourcc(*b"MSS1");
pub const MFVIDEOFORMAT_MSS2: Guid = Guid::from_fourcc(*b"MSS2");
pub const MFVIDEOFORMAT_MPG1: Guid = Guid::from_fourcc(*b"MPG1");
pub const MFVIDEOFORMAT_MJPG: Guid = Guid::from_fourcc(*b"MJPG");
pub const MFVIDEOFORMAT_DVSL: Guid = Guid::from_fourcc(*b"dvsl");
pub const MFVIDEOFORMAT_DVSD: Guid = Guid::from_fourcc(*b"dvsd");
pub const MFVIDEOFORMAT_DV25: Guid = Guid::from_fourcc(*b"dv25");
pub const MFVIDEOFORMAT_DV50: Guid = Guid::from_fourcc(*b"dv50");
pub const MFVIDEOFORMAT_DVH1: Guid = Guid::from_fourcc(*b"dvh1");
pub const MFVIDEOFORMAT_DVHD: Guid = Guid::from_fourcc(*b"dvhd");
pub const MFVIDEOFORMAT_DVC: Guid = Guid::from_fourcc(*b"dvc ");

// ---------------------------------------------------------------------------
// Audio subtypes (legacy wave-format tags)
// ---------------------------------------------------------------------------

pub const MFAUDIOFORMAT_PCM: Guid = Guid::from_wave_format(0x0001);
pub const MFAUDIOFORMAT_FLOAT: Guid = Guid::from_wave_format(0x0003);
pub const MFAUDIOFORMAT_DTS: Guid = Guid::from_wave_format(0x0008);
pub const MFAUDIOFORMAT_DRM: Guid = Guid::from_wave_format(0x0009);
pub const MFAUDIOFORMAT_MSP1: Guid = Guid::from_wave_format(0x000A);
pub const MFAUDIOFORMAT_MPEG: Guid = Guid::from_wave_format(0x0050);
pub const MFAUDIOFORMAT_MP3: Guid = Guid::from_wave_format(0x0055);
pub const MFAUDIOFORMAT_DOLBY_AC3_SPDIF: Guid = Guid::from_wave_format(0x0092);
pub const MFAUDIOFORMAT_WMAUDIO_V8: Guid = Guid::from_wave_format(0x0161);
pub const MFAUDIOFORMAT_WMAUDIO_V9: Guid = Guid::from_wave_format(0x0162);
pub const MFAUDIOFORMAT_WMAUDIO_LOSSLESS: Guid = Guid::from_wave_format(0x0163);
pub const MFAUDIOFORMAT_WMASPDIF: Guid = Guid::from_wave_format(0x0164);
pub const MFAUDIOFORMAT_ADTS: Guid = Guid::from_wave_format(0x1600);
pub const MFAUDIOFORMAT_AAC: Guid = Guid::from_wave_format(0x1610);
