//! File reader feeding the hashing core.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Reads the whole file at `path` into memory.
///
/// The buffer is reserved up front from the size reported by the file
/// system, so an oversized input fails with `ErrorKind::Alloc` instead of
/// aborting the process.
///
/// # Errors
/// - `ErrorKind::Io` if the file cannot be opened, inspected, or read.
/// - `ErrorKind::EmptyInput` if the file reports or yields zero bytes.
/// - `ErrorKind::Alloc` if the buffer cannot be reserved.
pub fn read_message(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| Error::io("open", path.display(), e))?;

    let size = file
        .metadata()
        .map_err(|e| Error::io("stat", path.display(), e))?
        .len();

    if size == 0 {
        return Err(Error::empty_input(path.display()));
    }

    // Larger than the address space: let the reservation report it
    let size = usize::try_from(size).unwrap_or(usize::MAX);

    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|e| Error::alloc("allocate buffer", size, e))?;

    let read = file
        .read_to_end(&mut buf)
        .map_err(|e| Error::io("read", path.display(), e))?;

    if read == 0 {
        return Err(Error::empty_input(path.display()));
    }

    debug!("read {read} bytes from {}", path.display());

    Ok(buf)
}
