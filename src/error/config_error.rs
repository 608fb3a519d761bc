use crate::interpreter::memory::{GcMode, WORD_SIZE};

#[derive(Debug)]
/// Represents all errors raised while validating the interpreter
/// configuration, before any evaluation is attempted.
pub enum ConfigError {
    /// The requested memory-management mode name is not recognized.
    UnknownGcMode {
        /// The mode name as supplied by the user.
        mode: String,
    },
    /// The requested memory-management mode is recognized but not
    /// implemented.
    UnsupportedGcMode {
        /// The requested mode.
        mode: GcMode,
    },
    /// The requested heap size is not a positive multiple of the word size.
    InvalidHeapSize {
        /// The requested heap size in bytes.
        bytes: u64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGcMode { mode } => {
                write!(f, "Error: Unknown memory-management mode '{mode}'.")
            },
            Self::UnsupportedGcMode { mode } => {
                write!(f, "Error: Memory-management mode '{mode}' is not implemented.")
            },
            Self::InvalidHeapSize { bytes } => write!(f,
                                                      "Error: Heap size must be a positive multiple of {WORD_SIZE}, found {bytes}."),
        }
    }
}

impl std::error::Error for ConfigError {}
