//! Error types
//!
//! Every failure carries its kind, the symbolic operation that failed and
//! the source location of the failing call site. Locations are captured with
//! `#[track_caller]`, so the constructors must be called directly at the
//! point where the fallible operation is checked.
//!
//! The hashing core never fails on a well-formed input; all kinds except
//! `Alloc` and `Internal` originate in the I/O glue.

use std::collections::TryReserveError;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::panic::Location;

/// Category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of command-line arguments.
    Usage,
    /// The input could not be opened, inspected, read, or the digest written.
    Io,
    /// The input contained no bytes.
    EmptyInput,
    /// Memory for the message buffer or the block sequence was unavailable.
    Alloc,
    /// The padded message did not segment into the expected block count.
    Internal,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Usage => "usage error",
            ErrorKind::Io => "i/o error",
            ErrorKind::EmptyInput => "empty input",
            ErrorKind::Alloc => "allocation failure",
            ErrorKind::Internal => "internal error",
        };

        f.write_str(name)
    }
}

/// A failure with its kind and the location where it was detected.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    operation: &'static str,
    location: &'static Location<'static>,
    message: String,
    source: Option<io::Error>,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[track_caller]
    fn new(kind: ErrorKind, operation: &'static str, message: String) -> Self {
        Self {
            kind,
            operation,
            location: Location::caller(),
            message,
            source: None,
        }
    }

    /// Wrong argument count or otherwise malformed invocation.
    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage, "parse arguments", message.into())
    }

    /// An operating-system level I/O failure.
    #[track_caller]
    pub fn io(operation: &'static str, subject: impl Display, source: io::Error) -> Self {
        let mut err = Self::new(ErrorKind::Io, operation, format!("{subject}: {source}"));
        err.source = Some(source);
        err
    }

    /// The input had no readable bytes.
    #[track_caller]
    pub fn empty_input(subject: impl Display) -> Self {
        Self::new(
            ErrorKind::EmptyInput,
            "read",
            format!("{subject}: no input isn't expected"),
        )
    }

    /// A fallible reservation of `bytes` bytes was refused.
    #[track_caller]
    pub fn alloc(operation: &'static str, bytes: usize, source: TryReserveError) -> Self {
        Self::new(
            ErrorKind::Alloc,
            operation,
            format!("cannot reserve {bytes} bytes: {source}"),
        )
    }

    /// A broken internal invariant.
    #[track_caller]
    pub fn internal(operation: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, operation, message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Symbolic name of the operation that failed (e.g. `"open"`).
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Source location of the call site that detected the failure.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw OS error code, when the failure came from the operating system.
    pub fn os_code(&self) -> Option<i32> {
        self.source.as_ref().and_then(io::Error::raw_os_error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed at {}:{}: {}",
            self.operation,
            self.location.file(),
            self.location.line(),
            self.message
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
