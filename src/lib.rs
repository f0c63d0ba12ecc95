//! QDPI Glyph Codec - compact encodings for multi-axis narrative moves
//!
//! A [`Glyph`] records who did what, where, and how along eight enumerated
//! axes. This crate converts glyphs to and from:
//!
//! - an 18-bit numeric code ([`encode_numeric`] / [`decode_numeric`])
//! - an eight-character base-36 string ([`encode_string`] / [`decode_string`])
//! - dense MSB-first bit-packed streams of fixed-width codes
//!   ([`pack_qdpi_glyphs`] / [`unpack_qdpi_glyphs`], [`BitPacker`])
//!
//! # Example
//!
//! ```rust
//! use qdpi_glyph::{decode_numeric, encode_numeric, encode_string, Action, Glyph, Modality};
//!
//! let glyph = Glyph { action: Action::Dream, ..Glyph::default() }.with_modality(Modality::Video);
//! let code = encode_numeric(&glyph);
//! assert_eq!(decode_numeric(code.value()).unwrap(), glyph);
//! assert_eq!(encode_string(&glyph), "90000002");
//! ```

mod types;
mod glyph;
mod numeric;
mod string;
mod packed;
mod permissions;
mod moves;
mod error;

pub use types::*;
pub use glyph::*;
pub use numeric::*;
pub use string::*;
pub use packed::*;
pub use permissions::*;
pub use moves::*;
pub use error::*;

#[cfg(test)]
mod tests;
