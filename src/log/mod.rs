pub mod buffer_log_sink;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod noop_log_sink;
pub use buffer_log_sink::BufferLogSink;
pub use noop_log_sink::NoopLogSink;
