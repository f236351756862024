//! Trace dump of a media format description.
//!
//! Walks an [`AttributeSource`] in order and emits one line per attribute:
//! a tab, the resolved identifier name, a tab, then the formatted value.
//! Intended for inspecting format negotiation while debugging; the
//! [`trace_media_type!`](crate::trace_media_type) macro compiles out with
//! the `log-trace` feature disabled.

use std::fmt::Write;

use crate::guid::Guid;
use crate::log::{log_level::LogLevel, log_sink::LogSink};
use crate::media_type::{
    attr_source::AttributeSource,
    attr_value::AttrValue,
    consts::{MF_MT_FRAME_RATE, MF_MT_FRAME_SIZE, MF_MT_PIXEL_ASPECT_RATIO},
    media_type_error::DumpError,
    names::display_name,
    pack::unpack_u32_pair,
};

/// Dumps every attribute of `attrs` into `out`, one line per attribute.
///
/// Stops at the first entry that cannot be read; lines already written stay
/// in the sink. A broken collection cut short mid-dump is itself useful
/// diagnostic output.
pub fn dump_media_type<S, W>(attrs: &S, out: &mut W) -> Result<(), DumpError>
where
    S: AttributeSource + ?Sized,
    W: Write + ?Sized,
{
    for index in 0..attrs.count() {
        let (key, value) = attrs.get(index)?;
        writeln!(out, "{}", format_attr_line(&key, &value))?;
    }
    Ok(())
}

/// Like [`dump_media_type`], but routes each line through a leveled log sink
/// at `Trace` severity.
pub fn log_media_type<S>(attrs: &S, sink: &dyn LogSink) -> Result<(), DumpError>
where
    S: AttributeSource + ?Sized,
{
    for index in 0..attrs.count() {
        let (key, value) = attrs.get(index)?;
        sink.log(
            LogLevel::Trace,
            &format_attr_line(&key, &value),
            module_path!(),
        );
    }
    Ok(())
}

/// Fire-and-forget trace of a media format description.
///
/// Expands to `()` unless the `log-trace` feature is enabled, so release
/// builds pay nothing for call sites. Read failures end the trace early;
/// use [`log_media_type`](crate::media_type::dump::log_media_type) directly
/// to observe them.
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! trace_media_type {
    ($sink:expr, $attrs:expr) => {{
        let _ = $crate::media_type::dump::log_media_type($attrs, $sink);
    }};
}

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! trace_media_type {
    ($($arg:tt)*) => {
        ()
    };
}

fn format_attr_line(key: &Guid, value: &AttrValue) -> String {
    format!("\t{}\t{}", display_name(key), format_value(key, value))
}

/// Formats a single attribute value, applying the packed-pair special cases
/// before falling back to per-tag formatting.
fn format_value(key: &Guid, value: &AttrValue) -> String {
    if let Some(pair) = special_case_value(key, value) {
        return pair;
    }

    match value {
        AttrValue::U32(v) => v.to_string(),
        AttrValue::U64(v) => v.to_string(),
        AttrValue::F64(v) => v.to_string(),
        AttrValue::Guid(g) => display_name(g),
        AttrValue::Str(s) => s.clone(),
        // Intentionally lossy: blob payloads can be large and are never
        // worth dumping into a trace line.
        AttrValue::Blob(_) => "<<byte array>>".to_string(),
        AttrValue::Object => "<<object>>".to_string(),
        AttrValue::Unknown(tag) => format!("Unexpected attribute type (tag = {tag})"),
    }
}

/// The three ratio-like attributes pack two u32 values into a u64 payload;
/// render those as `"A x B"`. Everything else falls through.
fn special_case_value(key: &Guid, value: &AttrValue) -> Option<String> {
    let is_packed_pair =
        *key == MF_MT_FRAME_RATE || *key == MF_MT_FRAME_SIZE || *key == MF_MT_PIXEL_ASPECT_RATIO;

    match value {
        AttrValue::U64(packed) if is_packed_pair => {
            let (high, low) = unpack_u32_pair(*packed);
            Some(format!("{high} x {low}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::media_type::consts::{
        MF_MT_AUDIO_NUM_CHANNELS, MF_MT_MAJOR_TYPE, MF_MT_SUBTYPE, MFMEDIATYPE_VIDEO,
        MFVIDEOFORMAT_NV12,
    };
    use bytes::Bytes;

    #[test]
    fn frame_rate_formats_as_pair() {
        let packed = AttrValue::U64((30u64 << 32) | 1);
        assert_eq!(format_value(&MF_MT_FRAME_RATE, &packed), "30 x 1");
    }

    #[test]
    fn frame_size_formats_as_pair() {
        let packed = AttrValue::U64((1920u64 << 32) | 1080);
        assert_eq!(format_value(&MF_MT_FRAME_SIZE, &packed), "1920 x 1080");
    }

    #[test]
    fn packed_pair_key_with_wrong_type_falls_through() {
        // A malformed ratio attribute still prints something sensible.
        assert_eq!(format_value(&MF_MT_FRAME_RATE, &AttrValue::U32(30)), "30");
    }

    #[test]
    fn generic_u32_prints_decimal() {
        assert_eq!(
            format_value(&MF_MT_AUDIO_NUM_CHANNELS, &AttrValue::U32(42)),
            "42"
        );
    }

    #[test]
    fn guid_value_resolves_to_name() {
        assert_eq!(
            format_value(&MF_MT_MAJOR_TYPE, &AttrValue::Guid(MFMEDIATYPE_VIDEO)),
            "MFMediaType_Video"
        );
    }

    #[test]
    fn blob_prints_placeholder_not_bytes() {
        let blob = AttrValue::Blob(Bytes::from_static(&[1, 2, 3, 4]));
        let s = format_value(&MF_MT_SUBTYPE, &blob);
        assert_eq!(s, "<<byte array>>");
    }

    #[test]
    fn unknown_tag_message_contains_raw_tag() {
        let s = format_value(&MF_MT_SUBTYPE, &AttrValue::Unknown(4097));
        assert!(s.contains("4097"), "got: {s}");
    }

    #[test]
    fn line_has_name_and_value_columns() {
        let line = format_attr_line(&MF_MT_SUBTYPE, &AttrValue::Guid(MFVIDEOFORMAT_NV12));
        assert_eq!(line, "\tMF_MT_SUBTYPE\tMFVideoFormat_NV12");
    }
}
