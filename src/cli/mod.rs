//! Command-line front end
//!
//! Thin glue around the hashing core: parse exactly one file argument,
//! read the file, hash it, print the digest. Every failure is returned as
//! an [`Error`] and rendered once by [`report`].

pub mod input;
pub mod output;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use log::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::hash::sha256;

/// Print the SHA-256 digest of a file.
#[derive(Debug, Parser)]
#[command(name = "usha256", version)]
pub struct Args {
    /// File to hash.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl Args {
    /// Parses `args` (including the program name).
    ///
    /// Returns `Ok(None)` when help or version text was requested and has
    /// already been printed.
    pub fn parse_from_os<I, T>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(args) => Ok(Some(args)),
            Err(e)
                if matches!(
                    e.kind(),
                    ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
                ) =>
            {
                e.print().map_err(|source| Error::io("write", "help", source))?;
                Ok(None)
            }
            Err(e) => Err(Error::usage(e.render().to_string())),
        }
    }
}

/// Runs the whole pipeline, writing the digest line to `out`.
///
/// Nothing is written to `out` unless hashing completed.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let Some(args) = Args::parse_from_os(args)? else {
        return Ok(());
    };

    let message = input::read_message(&args.file)?;
    let digest = sha256(&message)?;

    output::write_digest(out, &digest)
}

/// Process exit status for a failure of the given kind.
pub fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Usage => 2,
        _ => 1,
    }
}

/// Reports `err` on stderr and returns the matching exit status.
///
/// This is the only place where errors are rendered for the user.
pub fn report(err: &Error) -> ExitCode {
    let mut stderr = io::stderr().lock();

    // Nothing left to do if stderr itself is gone
    let _ = match err.kind() {
        ErrorKind::Usage => write!(stderr, "{}", err.message()),
        _ => writeln!(stderr, "usha256: {err}"),
    };

    debug!(
        "{} in {} (os code {:?})",
        err.kind(),
        err.operation(),
        err.os_code()
    );

    ExitCode::from(exit_code(err.kind()))
}
