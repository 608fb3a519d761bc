use std::str::FromStr;

use crate::error::ConfigError;

/// The heap word size in bytes; heap sizes must be a multiple of this.
pub const WORD_SIZE: u64 = 8;

/// The requested memory-management mode.
///
/// Only [`GcMode::NoGc`] is implemented; the remaining modes are recognized
/// so that requesting one fails fast with a dedicated error before any
/// evaluation begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcMode {
    /// No memory management at all.
    NoGc,
    /// Mark-sweep garbage collection (not implemented).
    MarkSweep,
    /// Reference counting (not implemented).
    RefCount,
    /// Explicit allocation and deallocation (not implemented).
    Explicit,
}

impl std::fmt::Display for GcMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NoGc => "NoGC",
            Self::MarkSweep => "MarkSweep",
            Self::RefCount => "RefCount",
            Self::Explicit => "Explicit",
        };
        write!(f, "{name}")
    }
}

impl FromStr for GcMode {
    type Err = ConfigError;

    /// Parses a memory-management mode name.
    /// ## Example
    /// ```
    /// use quill::interpreter::memory::GcMode;
    ///
    /// assert_eq!("NoGC".parse::<GcMode>().unwrap(), GcMode::NoGc);
    /// assert!("Generational".parse::<GcMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NoGC" => Ok(Self::NoGc),
            "MarkSweep" => Ok(Self::MarkSweep),
            "RefCount" => Ok(Self::RefCount),
            "Explicit" => Ok(Self::Explicit),
            _ => Err(ConfigError::UnknownGcMode { mode: s.to_string() }),
        }
    }
}

/// Initializes the memory manager for a program run.
///
/// Validates the heap size and the requested mode. Only [`GcMode::NoGc`] is
/// supported, and it requires no setup; every other mode is rejected before
/// evaluation starts.
///
/// # Parameters
/// - `mode`: The requested memory-management mode.
/// - `heap_bytes`: The heap size in bytes.
///
/// # Errors
/// - `InvalidHeapSize` if `heap_bytes` is zero or not a multiple of
///   [`WORD_SIZE`].
/// - `UnsupportedGcMode` for any mode other than `NoGc`.
///
/// # Example
/// ```
/// use quill::interpreter::memory::{GcMode, init_memory_manager};
///
/// assert!(init_memory_manager(GcMode::NoGc, 1 << 14).is_ok());
/// assert!(init_memory_manager(GcMode::MarkSweep, 1 << 14).is_err());
/// assert!(init_memory_manager(GcMode::NoGc, 12).is_err());
/// ```
pub fn init_memory_manager(mode: GcMode, heap_bytes: u64) -> Result<(), ConfigError> {
    if heap_bytes == 0 || heap_bytes % WORD_SIZE != 0 {
        return Err(ConfigError::InvalidHeapSize { bytes: heap_bytes });
    }

    match mode {
        GcMode::NoGc => Ok(()),
        other => Err(ConfigError::UnsupportedGcMode { mode: other }),
    }
}
