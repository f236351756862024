//! End-to-end checks of the attribute dump output.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use mediatrace::guid::Guid;
use mediatrace::log::{BufferLogSink, log_level::LogLevel};
use mediatrace::media_type::consts::*;
use mediatrace::media_type::dump::{dump_media_type, log_media_type};
use mediatrace::media_type::names::display_name;
use mediatrace::media_type::{AttrValue, AttributeSource, DumpError, MediaTypeDesc};

/// Source that serves `good` entries and then fails, as a malformed or
/// exhausted collection would.
struct TruncatedSource {
    good: Vec<(Guid, AttrValue)>,
    claimed_count: usize,
}

impl AttributeSource for TruncatedSource {
    fn count(&self) -> usize {
        self.claimed_count
    }

    fn get(&self, index: usize) -> Result<(Guid, AttrValue), DumpError> {
        self.good
            .get(index)
            .cloned()
            .ok_or(DumpError::Lookup { index })
    }
}

#[test]
fn empty_collection_dumps_nothing() {
    let desc = MediaTypeDesc::new();
    let mut out = String::new();
    assert_eq!(dump_media_type(&desc, &mut out), Ok(()));
    assert!(out.is_empty());
}

#[test]
fn video_type_dumps_one_line_per_attribute() {
    let mut desc = MediaTypeDesc::new();
    desc.set_guid(MF_MT_MAJOR_TYPE, MFMEDIATYPE_VIDEO);
    desc.set_guid(MF_MT_SUBTYPE, MFVIDEOFORMAT_H264);
    desc.set_u32_pair(MF_MT_FRAME_SIZE, 1280, 720);
    desc.set_u32_pair(MF_MT_FRAME_RATE, 30, 1);
    desc.set_u32(MF_MT_AVG_BITRATE, 2_500_000);

    let mut out = String::new();
    dump_media_type(&desc, &mut out).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "\tMF_MT_MAJOR_TYPE\tMFMediaType_Video");
    assert_eq!(lines[1], "\tMF_MT_SUBTYPE\tMFVideoFormat_H264");
    assert_eq!(lines[2], "\tMF_MT_FRAME_SIZE\t1280 x 720");
    assert_eq!(lines[3], "\tMF_MT_FRAME_RATE\t30 x 1");
    assert_eq!(lines[4], "\tMF_MT_AVG_BITRATE\t2500000");
}

#[test]
fn frame_rate_30_over_1_formats_as_pair() {
    let mut desc = MediaTypeDesc::new();
    desc.set_u32_pair(MF_MT_FRAME_RATE, 30, 1);

    let mut out = String::new();
    dump_media_type(&desc, &mut out).unwrap();
    assert_eq!(out, "\tMF_MT_FRAME_RATE\t30 x 1\n");
}

#[test]
fn generic_u32_value_formats_as_decimal() {
    let mut desc = MediaTypeDesc::new();
    desc.set_u32(MF_MT_AUDIO_NUM_CHANNELS, 42);

    let mut out = String::new();
    dump_media_type(&desc, &mut out).unwrap();
    assert_eq!(out, "\tMF_MT_AUDIO_NUM_CHANNELS\t42\n");
}

#[test]
fn unrecognized_tag_dumps_its_number() {
    let mut desc = MediaTypeDesc::new();
    desc.set(MF_MT_USER_DATA, AttrValue::Unknown(4097));

    let mut out = String::new();
    dump_media_type(&desc, &mut out).unwrap();
    assert!(out.contains("4097"), "got: {out}");
}

#[test]
fn unknown_identifier_dumps_canonical_guid() {
    let unknown = Guid::new(0x01020304, 0x0506, 0x0708, [9, 10, 11, 12, 13, 14, 15, 16]);
    let mut desc = MediaTypeDesc::new();
    desc.set_u32(unknown, 7);

    let mut out = String::new();
    dump_media_type(&desc, &mut out).unwrap();
    assert_eq!(out, format!("\t{unknown}\t7\n"));
    assert_eq!(display_name(&unknown), unknown.to_string());
}

#[test]
fn dump_stops_at_first_failing_index() {
    let src = TruncatedSource {
        good: vec![
            (MF_MT_MAJOR_TYPE, AttrValue::Guid(MFMEDIATYPE_AUDIO)),
            (MF_MT_AUDIO_NUM_CHANNELS, AttrValue::U32(2)),
        ],
        claimed_count: 5,
    };

    let mut out = String::new();
    let err = dump_media_type(&src, &mut out).unwrap_err();
    assert_eq!(err, DumpError::Lookup { index: 2 });

    // Entries [0, 2) were already emitted and stay visible.
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "\tMF_MT_MAJOR_TYPE\tMFMediaType_Audio");
    assert_eq!(lines[1], "\tMF_MT_AUDIO_NUM_CHANNELS\t2");
}

#[test]
fn log_route_emits_trace_lines() {
    let mut desc = MediaTypeDesc::new();
    desc.set_guid(MF_MT_SUBTYPE, MFAUDIOFORMAT_PCM);
    desc.set_u32(MF_MT_AUDIO_SAMPLES_PER_SECOND, 44_100);

    let sink = BufferLogSink::new();
    log_media_type(&desc, &sink).unwrap();

    let lines = sink.take_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        (
            LogLevel::Trace,
            "\tMF_MT_SUBTYPE\tMFAudioFormat_PCM".to_string()
        )
    );
    assert_eq!(
        lines[1],
        (
            LogLevel::Trace,
            "\tMF_MT_AUDIO_SAMPLES_PER_SECOND\t44100".to_string()
        )
    );
}

#[test]
fn log_route_stops_at_failure_with_partial_output() {
    let src = TruncatedSource {
        good: vec![(MF_MT_MAJOR_TYPE, AttrValue::Guid(MFMEDIATYPE_VIDEO))],
        claimed_count: 3,
    };

    let sink = BufferLogSink::new();
    let err = log_media_type(&src, &sink).unwrap_err();
    assert_eq!(err, DumpError::Lookup { index: 1 });
    assert_eq!(sink.take_lines().len(), 1);
}

#[cfg(feature = "log-trace")]
#[test]
fn trace_macro_walks_the_collection() {
    use mediatrace::trace_media_type;

    let mut desc = MediaTypeDesc::new();
    desc.set_u32_pair(MF_MT_PIXEL_ASPECT_RATIO, 1, 1);

    let sink = BufferLogSink::new();
    trace_media_type!(&sink, &desc);
    assert_eq!(sink.take_lines().len(), 1);
}

#[cfg(not(feature = "log-trace"))]
#[test]
fn trace_macro_is_a_no_op_without_the_feature() {
    use mediatrace::trace_media_type;

    let mut desc = MediaTypeDesc::new();
    desc.set_u32_pair(MF_MT_PIXEL_ASPECT_RATIO, 1, 1);

    let sink = BufferLogSink::new();
    trace_media_type!(&sink, &desc);
    assert!(sink.is_empty());
}
