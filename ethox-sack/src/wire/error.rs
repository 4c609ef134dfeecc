use core::fmt;

/// The error type for checked construction of sequence ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A range was self-contradictory.
    ///
    /// Its right edge lies before its left edge in sequence order. Such a range can not be the
    /// result of any data received locally but may appear in data provided by a remote.
    Malformed,

    #[doc(hidden)]
    __Nonexhaustive(Private),
}

/// Prevents exhaustive matching on `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Private { private: () }

/// The result type for checked constructors.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Malformed => write!(f, "malformed sequence range"),
            Error::__Nonexhaustive(_) => unreachable!()
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
