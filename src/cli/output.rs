//! Digest printer.

use std::io::Write;

use crate::error::{Error, Result};
use crate::primitives::Digest;

/// Writes `digest` as 64 lowercase hex characters and a newline.
pub fn write_digest<W: Write>(out: &mut W, digest: &Digest) -> Result<()> {
    writeln!(out, "{digest:x}")
        .and_then(|()| out.flush())
        .map_err(|e| Error::io("write", "digest", e))
}
