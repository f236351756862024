//! Symbolic names for the well-known format identifiers.

use crate::guid::Guid;
use crate::media_type::consts::*;

/// Static name table, built into the binary and never mutated. One row per
/// well-known identifier; the label is the platform's symbolic name.
pub const NAMED_GUIDS: &[(Guid, &str)] = &[
    (MF_MT_MAJOR_TYPE, "MF_MT_MAJOR_TYPE"),
    (MF_MT_SUBTYPE, "MF_MT_SUBTYPE"),
    (MF_MT_ALL_SAMPLES_INDEPENDENT, "MF_MT_ALL_SAMPLES_INDEPENDENT"),
    (MF_MT_FIXED_SIZE_SAMPLES, "MF_MT_FIXED_SIZE_SAMPLES"),
    (MF_MT_COMPRESSED, "MF_MT_COMPRESSED"),
    (MF_MT_SAMPLE_SIZE, "MF_MT_SAMPLE_SIZE"),
    (MF_MT_WRAPPED_TYPE, "MF_MT_WRAPPED_TYPE"),
    (MF_MT_AUDIO_NUM_CHANNELS, "MF_MT_AUDIO_NUM_CHANNELS"),
    (
        MF_MT_AUDIO_SAMPLES_PER_SECOND,
        "MF_MT_AUDIO_SAMPLES_PER_SECOND",
    ),
    (
        MF_MT_AUDIO_FLOAT_SAMPLES_PER_SECOND,
        "MF_MT_AUDIO_FLOAT_SAMPLES_PER_SECOND",
    ),
    (
        MF_MT_AUDIO_AVG_BYTES_PER_SECOND,
        "MF_MT_AUDIO_AVG_BYTES_PER_SECOND",
    ),
    (MF_MT_AUDIO_BLOCK_ALIGNMENT, "MF_MT_AUDIO_BLOCK_ALIGNMENT"),
    (MF_MT_AUDIO_BITS_PER_SAMPLE, "MF_MT_AUDIO_BITS_PER_SAMPLE"),
    (
        MF_MT_AUDIO_VALID_BITS_PER_SAMPLE,
        "MF_MT_AUDIO_VALID_BITS_PER_SAMPLE",
    ),
    (
        MF_MT_AUDIO_SAMPLES_PER_BLOCK,
        "MF_MT_AUDIO_SAMPLES_PER_BLOCK",
    ),
    (MF_MT_AUDIO_CHANNEL_MASK, "MF_MT_AUDIO_CHANNEL_MASK"),
    (MF_MT_AUDIO_FOLDDOWN_MATRIX, "MF_MT_AUDIO_FOLDDOWN_MATRIX"),
    (MF_MT_AUDIO_WMADRC_PEAKREF, "MF_MT_AUDIO_WMADRC_PEAKREF"),
    (
        MF_MT_AUDIO_WMADRC_PEAKTARGET,
        "MF_MT_AUDIO_WMADRC_PEAKTARGET",
    ),
    (MF_MT_AUDIO_WMADRC_AVGREF, "MF_MT_AUDIO_WMADRC_AVGREF"),
    (MF_MT_AUDIO_WMADRC_AVGTARGET, "MF_MT_AUDIO_WMADRC_AVGTARGET"),
    (
        MF_MT_AUDIO_PREFER_WAVEFORMATEX,
        "MF_MT_AUDIO_PREFER_WAVEFORMATEX",
    ),
    (MF_MT_FRAME_SIZE, "MF_MT_FRAME_SIZE"),
    (MF_MT_FRAME_RATE, "MF_MT_FRAME_RATE"),
    (MF_MT_PIXEL_ASPECT_RATIO, "MF_MT_PIXEL_ASPECT_RATIO"),
    (MF_MT_DRM_FLAGS, "MF_MT_DRM_FLAGS"),
    (MF_MT_PAD_CONTROL_FLAGS, "MF_MT_PAD_CONTROL_FLAGS"),
    (MF_MT_SOURCE_CONTENT_HINT, "MF_MT_SOURCE_CONTENT_HINT"),
    (MF_MT_VIDEO_CHROMA_SITING, "MF_MT_VIDEO_CHROMA_SITING"),
    (MF_MT_INTERLACE_MODE, "MF_MT_INTERLACE_MODE"),
    (MF_MT_TRANSFER_FUNCTION, "MF_MT_TRANSFER_FUNCTION"),
    (MF_MT_VIDEO_PRIMARIES, "MF_MT_VIDEO_PRIMARIES"),
    (MF_MT_CUSTOM_VIDEO_PRIMARIES, "MF_MT_CUSTOM_VIDEO_PRIMARIES"),
    (MF_MT_YUV_MATRIX, "MF_MT_YUV_MATRIX"),
    (MF_MT_VIDEO_LIGHTING, "MF_MT_VIDEO_LIGHTING"),
    (MF_MT_VIDEO_NOMINAL_RANGE, "MF_MT_VIDEO_NOMINAL_RANGE"),
    (MF_MT_GEOMETRIC_APERTURE, "MF_MT_GEOMETRIC_APERTURE"),
    (
        MF_MT_MINIMUM_DISPLAY_APERTURE,
        "MF_MT_MINIMUM_DISPLAY_APERTURE",
    ),
    (MF_MT_PAN_SCAN_APERTURE, "MF_MT_PAN_SCAN_APERTURE"),
    (MF_MT_PAN_SCAN_ENABLED, "MF_MT_PAN_SCAN_ENABLED"),
    (MF_MT_AVG_BITRATE, "MF_MT_AVG_BITRATE"),
    (MF_MT_AVG_BIT_ERROR_RATE, "MF_MT_AVG_BIT_ERROR_RATE"),
    (MF_MT_MAX_KEYFRAME_SPACING, "MF_MT_MAX_KEYFRAME_SPACING"),
    (MF_MT_DEFAULT_STRIDE, "MF_MT_DEFAULT_STRIDE"),
    (MF_MT_PALETTE, "MF_MT_PALETTE"),
    (MF_MT_USER_DATA, "MF_MT_USER_DATA"),
    (MF_MT_AM_FORMAT_TYPE, "MF_MT_AM_FORMAT_TYPE"),
    (MF_MT_MPEG_START_TIME_CODE, "MF_MT_MPEG_START_TIME_CODE"),
    (MF_MT_MPEG2_PROFILE, "MF_MT_MPEG2_PROFILE"),
    (MF_MT_MPEG2_LEVEL, "MF_MT_MPEG2_LEVEL"),
    (MF_MT_MPEG2_FLAGS, "MF_MT_MPEG2_FLAGS"),
    (MF_MT_MPEG_SEQUENCE_HEADER, "MF_MT_MPEG_SEQUENCE_HEADER"),
    (MF_MT_DV_AAUX_SRC_PACK_0, "MF_MT_DV_AAUX_SRC_PACK_0"),
    (MF_MT_DV_AAUX_CTRL_PACK_0, "MF_MT_DV_AAUX_CTRL_PACK_0"),
    (MF_MT_DV_AAUX_SRC_PACK_1, "MF_MT_DV_AAUX_SRC_PACK_1"),
    (MF_MT_DV_AAUX_CTRL_PACK_1, "MF_MT_DV_AAUX_CTRL_PACK_1"),
    (MF_MT_DV_VAUX_SRC_PACK, "MF_MT_DV_VAUX_SRC_PACK"),
    (MF_MT_DV_VAUX_CTRL_PACK, "MF_MT_DV_VAUX_CTRL_PACK"),
    (MF_MT_AAC_PAYLOAD_TYPE, "MF_MT_AAC_PAYLOAD_TYPE"),
    (
        MF_MT_AAC_AUDIO_PROFILE_LEVEL_INDICATION,
        "MF_MT_AAC_AUDIO_PROFILE_LEVEL_INDICATION",
    ),
    (MF_MT_ARBITRARY_HEADER, "MF_MT_ARBITRARY_HEADER"),
    (MF_MT_ARBITRARY_FORMAT, "MF_MT_ARBITRARY_FORMAT"),
    (MF_MT_IMAGE_LOSS_TOLERANT, "MF_MT_IMAGE_LOSS_TOLERANT"),
    (
        MF_MT_MPEG4_SAMPLE_DESCRIPTION,
        "MF_MT_MPEG4_SAMPLE_DESCRIPTION",
    ),
    (
        MF_MT_MPEG4_CURRENT_SAMPLE_ENTRY,
        "MF_MT_MPEG4_CURRENT_SAMPLE_ENTRY",
    ),
    (MF_MT_ORIGINAL_4CC, "MF_MT_ORIGINAL_4CC"),
    (
        MF_MT_ORIGINAL_WAVE_FORMAT_TAG,
        "MF_MT_ORIGINAL_WAVE_FORMAT_TAG",
    ),
    (MF_MT_FRAME_RATE_RANGE_MIN, "MF_MT_FRAME_RATE_RANGE_MIN"),
    (MF_MT_FRAME_RATE_RANGE_MAX, "MF_MT_FRAME_RATE_RANGE_MAX"),
    // Major types
    (MFMEDIATYPE_DEFAULT, "MFMediaType_Default"),
    (MFMEDIATYPE_AUDIO, "MFMediaType_Audio"),
    (MFMEDIATYPE_VIDEO, "MFMediaType_Video"),
    (MFMEDIATYPE_PROTECTED, "MFMediaType_Protected"),
    (MFMEDIATYPE_SAMI, "MFMediaType_SAMI"),
    (MFMEDIATYPE_SCRIPT, "MFMediaType_Script"),
    (MFMEDIATYPE_IMAGE, "MFMediaType_Image"),
    (MFMEDIATYPE_HTML, "MFMediaType_HTML"),
    (MFMEDIATYPE_BINARY, "MFMediaType_Binary"),
    (MFMEDIATYPE_FILETRANSFER, "MFMediaType_FileTransfer"),
    // Video subtypes
    (MFVIDEOFORMAT_RGB32, "MFVideoFormat_RGB32"),
    (MFVIDEOFORMAT_ARGB32, "MFVideoFormat_ARGB32"),
    (MFVIDEOFORMAT_RGB24, "MFVideoFormat_RGB24"),
    (MFVIDEOFORMAT_RGB555, "MFVideoFormat_RGB555"),
    (MFVIDEOFORMAT_RGB565, "MFVideoFormat_RGB565"),
    (MFVIDEOFORMAT_AI44, "MFVideoFormat_AI44"),
    (MFVIDEOFORMAT_AYUV, "MFVideoFormat_AYUV"),
    (MFVIDEOFORMAT_YUY2, "MFVideoFormat_YUY2"),
    (MFVIDEOFORMAT_UYVY, "MFVideoFormat_UYVY"),
    (MFVIDEOFORMAT_NV11, "MFVideoFormat_NV11"),
    (MFVIDEOFORMAT_NV12, "MFVideoFormat_NV12"),
    (MFVIDEOFORMAT_YV12, "MFVideoFormat_YV12"),
    (MFVIDEOFORMAT_IYUV, "MFVideoFormat_IYUV"),
    (MFVIDEOFORMAT_I420, "MFVideoFormat_I420"),
    (MFVIDEOFORMAT_Y210, "MFVideoFormat_Y210"),
    (MFVIDEOFORMAT_Y216, "MFVideoFormat_Y216"),
    (MFVIDEOFORMAT_Y410, "MFVideoFormat_Y410"),
    (MFVIDEOFORMAT_Y416, "MFVideoFormat_Y416"),
    (MFVIDEOFORMAT_P210, "MFVideoFormat_P210"),
    (MFVIDEOFORMAT_P216, "MFVideoFormat_P216"),
    (MFVIDEOFORMAT_P010, "MFVideoFormat_P010"),
    (MFVIDEOFORMAT_P016, "MFVideoFormat_P016"),
    (MFVIDEOFORMAT_V210, "MFVideoFormat_v210"),
    (MFVIDEOFORMAT_V410, "MFVideoFormat_v410"),
    (MFVIDEOFORMAT_MP43, "MFVideoFormat_MP43"),
    (MFVIDEOFORMAT_MP4S, "MFVideoFormat_MP4S"),
    (MFVIDEOFORMAT_M4S2, "MFVideoFormat_M4S2"),
    (MFVIDEOFORMAT_MP4V, "MFVideoFormat_MP4V"),
    (MFVIDEOFORMAT_H264, "MFVideoFormat_H264"),
    (MFVIDEOFORMAT_WMV1, "MFVideoFormat_WMV1"),
    (MFVIDEOFORMAT_WMV2, "MFVideoFormat_WMV2"),
    (MFVIDEOFORMAT_WMV3, "MFVideoFormat_WMV3"),
    (MFVIDEOFORMAT_WVC1, "MFVideoFormat_WVC1"),
    (MFVIDEOFORMAT_MSS1, "MFVideoFormat_MSS1"),
    (MFVIDEOFORMAT_MSS2, "MFVideoFormat_MSS2"),
    (MFVIDEOFORMAT_MPG1, "MFVideoFormat_MPG1"),
    (MFVIDEOFORMAT_MJPG, "MFVideoFormat_MJPG"),
    (MFVIDEOFORMAT_DVSL, "MFVideoFormat_DVSL"),
    (MFVIDEOFORMAT_DVSD, "MFVideoFormat_DVSD"),
    (MFVIDEOFORMAT_DV25, "MFVideoFormat_DV25"),
    (MFVIDEOFORMAT_DV50, "MFVideoFormat_DV50"),
    (MFVIDEOFORMAT_DVH1, "MFVideoFormat_DVH1"),
    (MFVIDEOFORMAT_DVHD, "MFVideoFormat_DVHD"),
    (MFVIDEOFORMAT_DVC, "MFVideoFormat_DVC"),
    // Audio subtypes
    (MFAUDIOFORMAT_PCM, "MFAudioFormat_PCM"),
    (MFAUDIOFORMAT_FLOAT, "MFAudioFormat_Float"),
    (MFAUDIOFORMAT_DTS, "MFAudioFormat_DTS"),
    (MFAUDIOFORMAT_DRM, "MFAudioFormat_DRM"),
    (MFAUDIOFORMAT_MSP1, "MFAudioFormat_MSP1"),
    (MFAUDIOFORMAT_MPEG, "MFAudioFormat_MPEG"),
    (MFAUDIOFORMAT_MP3, "MFAudioFormat_MP3"),
    (
        MFAUDIOFORMAT_DOLBY_AC3_SPDIF,
        "MFAudioFormat_Dolby_AC3_SPDIF",
    ),
    (MFAUDIOFORMAT_WMAUDIO_V8, "MFAudioFormat_WMAudioV8"),
    (MFAUDIOFORMAT_WMAUDIO_V9, "MFAudioFormat_WMAudioV9"),
    (
        MFAUDIOFORMAT_WMAUDIO_LOSSLESS,
        "MFAudioFormat_WMAudio_Lossless",
    ),
    (MFAUDIOFORMAT_WMASPDIF, "MFAudioFormat_WMASPDIF"),
    (MFAUDIOFORMAT_ADTS, "MFAudioFormat_ADTS"),
    (MFAUDIOFORMAT_AAC, "MFAudioFormat_AAC"),
];

/// Looks up the symbolic name of a well-known identifier.
///
/// Returns `None` for identifiers missing from the table; that is not an
/// error, callers fall back to [`display_name`].
pub fn guid_name(guid: &Guid) -> Option<&'static str> {
    NAMED_GUIDS
        .iter()
        .find(|(known, _)| known == guid)
        .map(|(_, name)| *name)
}

/// Resolves an identifier to a printable name.
///
/// Known identifiers get their symbolic label; anything else falls back to
/// the canonical braced GUID form, which is deterministic for a given value.
pub fn display_name(guid: &Guid) -> String {
    match guid_name(guid) {
        Some(name) => name.to_string(),
        None => guid.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn every_table_row_resolves_to_its_label() {
        for (guid, label) in NAMED_GUIDS {
            assert_eq!(guid_name(guid), Some(*label), "row for {label}");
        }
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        for (i, (a, name_a)) in NAMED_GUIDS.iter().enumerate() {
            for (b, name_b) in &NAMED_GUIDS[i + 1..] {
                assert_ne!(a, b, "{name_a} and {name_b} share a GUID");
            }
        }
    }

    #[test]
    fn unknown_guid_falls_back_to_canonical_form() {
        let g = Guid::new(0xDEADBEEF, 0x1234, 0x5678, [0; 8]);
        assert_eq!(guid_name(&g), None);
        let name = display_name(&g);
        assert!(name.starts_with('{') && name.ends_with('}'));
        assert_eq!(name, display_name(&g)); // deterministic
    }

    #[test]
    fn known_guid_display_name_is_label() {
        use crate::media_type::consts::MF_MT_FRAME_RATE;
        assert_eq!(display_name(&MF_MT_FRAME_RATE), "MF_MT_FRAME_RATE");
    }
}
