//! Errors reported by the panel driver
use core::{fmt, mem};

pub use display_interface::DisplayError;

/// Which part of an operation a transport failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Toggling the reset line
    Reset,
    /// One of the fixed initialization steps
    Init,
    /// Column address window (CASET)
    ColumnSet,
    /// Row address window (RASET)
    RowSet,
    /// Memory write opcode (RAMWR)
    MemoryWrite,
    /// Pixel payload following the memory write
    Payload,
    /// Memory access control register update (MADCTL)
    Mode,
    /// Color inversion on/off
    Invert,
    /// Display on/off
    Power,
}

/// Error type for every fallible panel operation.
#[derive(Debug, Clone)]
pub enum Error {
    /// A required argument was missing or malformed
    InvalidArgument,
    /// The scratch conversion buffer could not be allocated
    OutOfMemory,
    /// The underlying transport rejected a transaction
    Transport {
        /// Opcode of the failed transaction
        cmd: u8,
        /// Operation step that failed
        phase: Phase,
        /// Error returned by the transport
        source: DisplayError,
    },
    /// A blit asked for more pixels than the scratch buffer holds
    SizeLimitExceeded {
        /// Pixels in the requested rectangle
        requested: usize,
        /// Scratch buffer capacity in pixels
        capacity: usize,
    },
}

impl Error {
    pub(crate) fn transport(cmd: u8, phase: Phase) -> impl FnOnce(DisplayError) -> Self {
        move |source| Error::Transport { cmd, phase, source }
    }
}

// `DisplayError` has no `PartialEq`; its variants carry no data, so the
// discriminant is the whole value.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::InvalidArgument, Error::InvalidArgument) => true,
            (Error::OutOfMemory, Error::OutOfMemory) => true,
            (
                Error::Transport {
                    cmd: a_cmd,
                    phase: a_phase,
                    source: a_source,
                },
                Error::Transport {
                    cmd: b_cmd,
                    phase: b_phase,
                    source: b_source,
                },
            ) => {
                a_cmd == b_cmd
                    && a_phase == b_phase
                    && mem::discriminant(a_source) == mem::discriminant(b_source)
            }
            (
                Error::SizeLimitExceeded {
                    requested: a_requested,
                    capacity: a_capacity,
                },
                Error::SizeLimitExceeded {
                    requested: b_requested,
                    capacity: b_capacity,
                },
            ) => a_requested == b_requested && a_capacity == b_capacity,
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::OutOfMemory => f.write_str("no memory for conversion buffer"),
            Error::Transport { cmd, phase, source } => {
                write!(f, "transport failed in {:?} (cmd 0x{:02X}): {:?}", phase, cmd, source)
            }
            Error::SizeLimitExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "flush too large: {} pixels, capacity {}",
                requested, capacity
            ),
        }
    }
}

impl From<Error> for DisplayError {
    fn from(err: Error) -> Self {
        match err {
            Error::Transport { source, .. } => source,
            Error::SizeLimitExceeded { .. } => DisplayError::OutOfBoundsError,
            Error::InvalidArgument | Error::OutOfMemory => DisplayError::InvalidFormatError,
        }
    }
}
