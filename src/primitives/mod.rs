//! Primitive types
//!
//! Fixed-size value types with explicit big-endian semantics.
//!
//! Current primitives include:
//! - `Digest`: the 32-byte SHA-256 output

mod digest;

pub use digest::{DIGEST_LEN, Digest};
