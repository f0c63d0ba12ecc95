//! Human-friendly base-36 glyph strings
//!
//! One base-36 digit per axis, in the order action, context, state, role,
//! relation, polarity, rotation, modality. Encoding always writes all eight
//! digits; seven-digit strings from older records decode with `Text`
//! modality.

use crate::error::*;
use crate::glyph::*;
use tracing::warn;

/// Length of an encoded glyph string
pub const GLYPH_STRING_LEN: usize = 8;

/// Length of a glyph string written before modality existed
pub const LEGACY_GLYPH_STRING_LEN: usize = 7;

const RADIX: u32 = 36;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn encode_string(g: &Glyph) -> String {
    g.digits()
        .iter()
        .map(|&d| char::from(DIGITS[usize::from(d)]))
        .collect()
}

/// Validate an untyped glyph, then encode it
pub fn encode_string_raw(raw: &RawGlyph) -> Result<String> {
    raw.validate().map(|g| encode_string(&g))
}

pub fn decode_string(code: &str) -> Result<Glyph> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != GLYPH_STRING_LEN && chars.len() != LEGACY_GLYPH_STRING_LEN {
        warn!(code, "rejected glyph string of wrong length");
        return Err(GlyphError::Decode(format!(
            "glyph string {:?} has {} characters, expected {} or {}",
            code,
            chars.len(),
            LEGACY_GLYPH_STRING_LEN,
            GLYPH_STRING_LEN
        )));
    }

    let mut digits = [0i64; GLYPH_STRING_LEN];
    for (i, c) in chars.iter().enumerate() {
        digits[i] = match c.to_digit(RADIX) {
            Some(d) => i64::from(d),
            None => {
                warn!(code, position = i, "rejected non base-36 character");
                return Err(GlyphError::Decode(format!(
                    "invalid base-36 character {:?} at position {} in {:?}",
                    c, i, code
                )));
            }
        };
    }

    let raw = RawGlyph {
        action: digits[0],
        context: digits[1],
        state: digits[2],
        role: digits[3],
        relation: digits[4],
        polarity: digits[5],
        rotation: digits[6],
        modality: (chars.len() == GLYPH_STRING_LEN).then_some(digits[7]),
    };
    raw.validate()
        .map_err(|e| GlyphError::Decode(format!("glyph string {:?}: {}", code, e)))
}
