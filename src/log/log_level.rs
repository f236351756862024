/// Severity of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Per-attribute dump lines and other very fine-grained output.
    Trace,
    /// Diagnostic detail useful while debugging.
    Debug,
    /// Coarse progress messages.
    Info,
    /// Something looks wrong but the operation continues.
    Warn,
    /// The operation failed.
    Error,
}
