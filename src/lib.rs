//! SHA-256 file digests
//!
//! This crate computes the SHA-256 message digest of a byte sequence and
//! provides the small command-line tool `usha256` that prints the digest of
//! a file as 64 lowercase hexadecimal characters.
//!
//! The focus is on a **clear, straightforward reference implementation**
//! of FIPS 180-4 rather than on speed. There is no streaming API and no
//! hardware acceleration: the whole message is held in memory and hashed
//! in one pass.
//!
//! # Module overview
//!
//! - `hash`  
//!   The SHA-256 transform, split into its three stages: padding and
//!   segmentation into 64-byte blocks, message schedule expansion, and the
//!   64-round compression function folding each block into the 8-word
//!   hash state.
//!
//! - `primitives`  
//!   The `Digest` value type and its hexadecimal rendering.
//!
//! - `error`  
//!   Structured errors carrying a kind, the failed operation and the call
//!   site where the failure was detected.
//!
//! - `cli`  
//!   The I/O glue used by the binary: argument parsing, file reading,
//!   digest printing and centralized error reporting.
//!
//! # Example
//!
//! ```
//! let digest = usha256::hash::sha256(b"abc").unwrap();
//!
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod cli;
pub mod error;
pub mod hash;
pub mod primitives;
