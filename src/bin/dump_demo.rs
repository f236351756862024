//! Demo binary: builds a representative video and audio format description
//! and traces both to stderr.

use mediatrace::log::{log_level::LogLevel, log_sink::LogSink};
use mediatrace::media_type::consts::*;
use mediatrace::media_type::{AttrValue, AttributeSource, MediaTypeDesc, dump::dump_media_type};
use mediatrace::{sink_info, trace_media_type};

struct StderrSink;

impl LogSink for StderrSink {
    fn log(&self, level: LogLevel, msg: &str, _target: &'static str) {
        eprintln!("[{level:?}]{msg}");
    }
}

fn sample_video_type() -> MediaTypeDesc {
    let mut desc = MediaTypeDesc::new();
    desc.set_guid(MF_MT_MAJOR_TYPE, MFMEDIATYPE_VIDEO);
    desc.set_guid(MF_MT_SUBTYPE, MFVIDEOFORMAT_NV12);
    desc.set_u32_pair(MF_MT_FRAME_SIZE, 1920, 1080);
    desc.set_u32_pair(MF_MT_FRAME_RATE, 30, 1);
    desc.set_u32_pair(MF_MT_PIXEL_ASPECT_RATIO, 1, 1);
    desc.set_u32(MF_MT_INTERLACE_MODE, 2); // progressive
    desc.set_u32(MF_MT_AVG_BITRATE, 5_000_000);
    desc
}

fn sample_audio_type() -> MediaTypeDesc {
    let mut desc = MediaTypeDesc::new();
    desc.set_guid(MF_MT_MAJOR_TYPE, MFMEDIATYPE_AUDIO);
    desc.set_guid(MF_MT_SUBTYPE, MFAUDIOFORMAT_AAC);
    desc.set_u32(MF_MT_AUDIO_NUM_CHANNELS, 2);
    desc.set_u32(MF_MT_AUDIO_SAMPLES_PER_SECOND, 48_000);
    desc.set_u32(MF_MT_AUDIO_BITS_PER_SAMPLE, 16);
    desc.set(MF_MT_USER_DATA, AttrValue::Blob(vec![0u8; 32].into()));
    desc
}

fn main() {
    let video = sample_video_type();
    let audio = sample_audio_type();

    let sink = StderrSink;
    sink_info!(
        &sink,
        "dumping {} video / {} audio attributes",
        video.count(),
        audio.count()
    );

    // Plain dump into a string sink, then print whatever was produced;
    // a dump cut short by a read failure is still worth showing.
    let mut out = String::new();
    eprintln!("video format:");
    if let Err(e) = dump_media_type(&video, &mut out) {
        eprintln!("dump aborted: {e}");
    }
    eprint!("{out}");

    // Same walk through the leveled sink; expands to () unless built
    // with --features log-trace.
    eprintln!("audio format:");
    trace_media_type!(&sink, &audio);
}
