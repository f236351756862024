use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpError {
    /// Reading the attribute collection failed at the given index.
    Lookup { index: usize },
    /// Writing a formatted line to the output sink failed.
    Sink,
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DumpError::*;
        match self {
            Lookup { index } => write!(f, "attribute lookup failed at index {index}"),
            Sink => write!(f, "failed to write to output sink"),
        }
    }
}
impl std::error::Error for DumpError {}

impl From<fmt::Error> for DumpError {
    fn from(_: fmt::Error) -> Self {
        Self::Sink
    }
}
