//! Parsers for the decompressed payload.
//!
//! Parsers receive already-decompressed bytes; run them after
//! [`crate::compression`].
//!
//! | Module   | Format | Description |
//! |----------|--------|-------------|
//! | [`nnue`] | NNUE   | Neural-network evaluation weights; only the 8-byte header is read |

pub mod nnue;
