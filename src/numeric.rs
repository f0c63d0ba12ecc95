//! Numeric glyph codes
//!
//! A glyph packs into a single 18-bit integer, most significant field first:
//!
//! ```text
//!  17   15 14    11 10  9 8   7 6   4  3   2   1  0
//! [modality][action][ctx][state][role][rel][pol][rot]
//! ```
//!
//! This is the only layout the crate reads or writes.

use crate::error::*;
use crate::glyph::*;
use crate::types::*;
use std::fmt;
use tracing::warn;

/// Total width of a numeric glyph code
pub const GLYPH_BITS: u32 = 18;

/// Largest value representable in the numeric layout
pub const MAX_GLYPH_CODE: u32 = (1 << GLYPH_BITS) - 1;

const ROTATION_SHIFT: u32 = 0;
const POLARITY_SHIFT: u32 = ROTATION_SHIFT + Rotation::BITS;
const RELATION_SHIFT: u32 = POLARITY_SHIFT + Polarity::BITS;
const ROLE_SHIFT: u32 = RELATION_SHIFT + Relation::BITS;
const STATE_SHIFT: u32 = ROLE_SHIFT + Role::BITS;
const CONTEXT_SHIFT: u32 = STATE_SHIFT + State::BITS;
const ACTION_SHIFT: u32 = CONTEXT_SHIFT + Context::BITS;
const MODALITY_SHIFT: u32 = ACTION_SHIFT + Action::BITS;

/// A glyph in numeric form, as persisted in integer columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct GlyphCode(u32);

impl GlyphCode {
    pub fn value(self) -> u32 {
        self.0
    }

    /// Wrap a raw integer, rejecting anything outside the 18-bit layout
    pub fn new(value: u32) -> Result<Self> {
        if value > MAX_GLYPH_CODE {
            return Err(GlyphError::Decode(format!(
                "numeric glyph {} exceeds {}-bit layout",
                value, GLYPH_BITS
            )));
        }
        Ok(Self(value))
    }

    pub fn decode(self) -> Result<Glyph> {
        decode_numeric(self.0)
    }
}

impl From<GlyphCode> for u32 {
    fn from(code: GlyphCode) -> u32 {
        code.0
    }
}

impl From<Glyph> for GlyphCode {
    fn from(g: Glyph) -> Self {
        encode_numeric(&g)
    }
}

/// Five hex digits, upper case, zero padded: the log viewer's rendering
impl fmt::Display for GlyphCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05X}", self.0)
    }
}

impl fmt::UpperHex for GlyphCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for GlyphCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Pack a glyph into its numeric code
pub fn encode_numeric(g: &Glyph) -> GlyphCode {
    GlyphCode(pack_fields(&g.digits()))
}

/// Pack an untyped glyph, validating every axis first
pub fn encode_numeric_raw(raw: &RawGlyph) -> Result<GlyphCode> {
    raw.validate().map(|g| encode_numeric(&g))
}

/// Unpack a numeric code, rejecting codes outside the layout or fields
/// holding values their axis does not define
pub fn decode_numeric(code: u32) -> Result<Glyph> {
    let code = GlyphCode::new(code).map_err(|e| {
        warn!(code, "rejected numeric glyph");
        e
    })?;
    decode_numeric_lossy(code.0).validate().map_err(|e| {
        warn!(code = code.0, error = %e, "numeric glyph has an undefined field");
        GlyphError::Decode(format!("numeric glyph {}: {}", code, e))
    })
}

/// Shift-and-mask decode with no validation. Bits above the layout are
/// ignored and undefined field values pass through unchanged.
pub fn decode_numeric_lossy(code: u32) -> RawGlyph {
    RawGlyph {
        action: field::<Action>(code, ACTION_SHIFT),
        context: field::<Context>(code, CONTEXT_SHIFT),
        state: field::<State>(code, STATE_SHIFT),
        role: field::<Role>(code, ROLE_SHIFT),
        relation: field::<Relation>(code, RELATION_SHIFT),
        polarity: field::<Polarity>(code, POLARITY_SHIFT),
        rotation: field::<Rotation>(code, ROTATION_SHIFT),
        modality: Some(field::<Modality>(code, MODALITY_SHIFT)),
    }
}

fn field<A: Axis>(code: u32, shift: u32) -> i64 {
    i64::from((code >> shift) & ((1 << A::BITS) - 1))
}

fn pack_fields(d: &[u8; 8]) -> u32 {
    let [action, context, state, role, relation, polarity, rotation, modality] = d.map(u32::from);
    (modality << MODALITY_SHIFT)
        | (action << ACTION_SHIFT)
        | (context << CONTEXT_SHIFT)
        | (state << STATE_SHIFT)
        | (role << ROLE_SHIFT)
        | (relation << RELATION_SHIFT)
        | (polarity << POLARITY_SHIFT)
        | (rotation << ROTATION_SHIFT)
}
