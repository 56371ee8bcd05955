use thiserror::Error;

/// Coarse error classification exposed to callers and bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Header or segment not readable within the buffer.
    MalformedInput,
    /// An optimized reader's layout assumption does not hold.
    UnsupportedShape,
}

/// Which part of the buffer a read was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    OffsetA,
    OffsetB,
    LengthWord,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Region::Header => "header",
            Region::OffsetA => "offset A",
            Region::OffsetB => "offset B",
            Region::LengthWord => "length word",
        };
        f.write_str(name)
    }
}

/// Unified decode error.
/// - Every variant maps onto one `ErrorKind` via [`AbiError::kind`].
/// - Messages carry the offending positions so a failing input can be located.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    /// A read of `need` bytes at `at` runs past the end of the buffer.
    #[error("truncated {region}: need {need} bytes at {at}, buffer has {have}")]
    Truncated {
        region: Region,
        at: usize,
        need: usize,
        have: usize,
    },

    /// A word holds a value that cannot be a native offset or length.
    #[error("{region} word at {at} does not fit a native offset: 0x{word}")]
    WordOverflow {
        region: Region,
        at: usize,
        word: String,
    },

    /// A declared segment length overruns the buffer.
    #[error("segment at {offset} declares {declared} bytes, only {available} remain")]
    LengthOverrun {
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// The optimized reader found a layout it does not handle.
    #[error("unsupported shape: expected offset A = {expected}, found {found}")]
    UnsupportedShape { expected: usize, found: usize },
}

impl AbiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AbiError::Truncated { .. }
            | AbiError::WordOverflow { .. }
            | AbiError::LengthOverrun { .. } => ErrorKind::MalformedInput,
            AbiError::UnsupportedShape { .. } => ErrorKind::UnsupportedShape,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::MalformedInput
    }
}
