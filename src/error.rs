//! Error types for the QDPI glyph codec

use thiserror::Error;

/// Errors that can occur during glyph encoding, decoding and packing
#[derive(Error, Debug)]
pub enum GlyphError {
    /// An axis value lies outside its enumeration
    #[error("Invalid {axis} value {value}: expected 0..{cardinality}")]
    Validation {
        axis: &'static str,
        value: i64,
        cardinality: u8,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    /// A code does not fit the stream's bit width. `index` is its position in the input.
    #[error("Glyph value {value} at index {index} is out of the {width}-bit range")]
    Range { value: i64, width: u32, index: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid bit width {0}: expected 1..=32")]
    InvalidWidth(u32),

    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
