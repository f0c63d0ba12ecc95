//! Packed glyph streams
//!
//! A stream is a run of fixed-width codes concatenated MSB-first, with the
//! final byte zero-padded on its low-order bits. The stream carries no
//! header: readers must know the width out of band.

use crate::error::*;
use crate::glyph::*;
use crate::numeric::*;
use tracing::{debug, trace};

/// Code width of QDPI glyph streams
pub const QDPI_PACKED_BITS: u32 = 17;

/// Largest code a QDPI glyph stream can hold
pub const QDPI_PACKED_MAX: u32 = (1 << QDPI_PACKED_BITS) - 1;

const MAX_WIDTH: u32 = 32;

/// Fixed-width MSB-first bit packer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPacker {
    width: u32,
}

impl BitPacker {
    /// Packer for `width`-bit codes, `1..=32`
    pub fn new(width: u32) -> Result<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(GlyphError::InvalidWidth(width));
        }
        Ok(Self { width })
    }

    /// Packer for the 17-bit QDPI stream
    pub fn qdpi() -> Self {
        Self {
            width: QDPI_PACKED_BITS,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Largest code this packer accepts
    pub fn max_code(&self) -> u32 {
        ((1u64 << self.width) - 1) as u32
    }

    /// Bytes needed for `count` codes
    pub fn packed_len(&self, count: usize) -> usize {
        (count * self.width as usize).div_ceil(8)
    }

    /// Reject the first code outside `[0, 2^width - 1]`
    pub fn check(&self, codes: &[i64]) -> Result<()> {
        let max = i64::from(self.max_code());
        match codes.iter().position(|&c| c < 0 || c > max) {
            Some(index) => Err(GlyphError::Range {
                value: codes[index],
                width: self.width,
                index,
            }),
            None => Ok(()),
        }
    }

    /// Pack codes into the shortest byte buffer. Every code is checked
    /// before any byte is written.
    pub fn pack(&self, codes: &[i64]) -> Result<Vec<u8>> {
        self.check(codes)?;
        Ok(self.write_codes(codes.iter().map(|&c| c as u64), codes.len()))
    }

    /// Bit-pack codes already known to fit the width
    fn write_codes(&self, codes: impl Iterator<Item = u64>, count: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.packed_len(count));
        let mut acc: u64 = 0;
        let mut held: u32 = 0;

        for code in codes {
            acc = (acc << self.width) | code;
            held += self.width;

            while held >= 8 {
                held -= 8;
                out.push((acc >> held) as u8);
                acc &= (1u64 << held) - 1;
            }
        }

        if held > 0 {
            out.push((acc << (8 - held)) as u8);
        }

        debug!(codes = count, bytes = out.len(), width = self.width, "packed glyph stream");
        out
    }

    /// Unpack every complete code in `bytes`. Trailing bits that do not
    /// fill a whole code are padding and are dropped.
    pub fn unpack(&self, bytes: &[u8]) -> Vec<u32> {
        let mask = u64::from(self.max_code());
        let mut out = Vec::with_capacity(bytes.len() * 8 / self.width as usize);
        let mut acc: u64 = 0;
        let mut held: u32 = 0;

        for &byte in bytes {
            acc = (acc << 8) | u64::from(byte);
            held += 8;

            while held >= self.width {
                held -= self.width;
                out.push(((acc >> held) & mask) as u32);
                acc &= (1u64 << held) - 1;
            }
        }

        if held > 0 {
            trace!(bits = held, "discarded stream padding");
        }
        debug!(bytes = bytes.len(), codes = out.len(), width = self.width, "unpacked glyph stream");
        out
    }
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::qdpi()
    }
}

/// Pack codes of an arbitrary width
pub fn pack_codes(codes: &[i64], width: u32) -> Result<Vec<u8>> {
    BitPacker::new(width)?.pack(codes)
}

/// Unpack codes of an arbitrary width.
///
/// Total over any buffer for widths `1..=32`. Codes come back as `u32`, so
/// wider widths are refused with [`GlyphError::InvalidWidth`].
pub fn unpack_codes(bytes: &[u8], width: u32) -> Result<Vec<u32>> {
    Ok(BitPacker::new(width)?.unpack(bytes))
}

/// Pack a 17-bit QDPI glyph stream
pub fn pack_qdpi_glyphs(glyphs: &[i64]) -> Result<Vec<u8>> {
    BitPacker::qdpi().pack(glyphs)
}

/// Unpack a 17-bit QDPI glyph stream
pub fn unpack_qdpi_glyphs(packed: &[u8]) -> Vec<u32> {
    BitPacker::qdpi().unpack(packed)
}

/// Pack whole glyphs at the full numeric width
pub fn pack_glyphs(glyphs: &[Glyph]) -> Vec<u8> {
    let codes = glyphs.iter().map(|g| u64::from(encode_numeric(g).value()));
    BitPacker { width: GLYPH_BITS }.write_codes(codes, glyphs.len())
}

/// Unpack a stream written by [`pack_glyphs`]
pub fn unpack_glyphs(packed: &[u8]) -> Result<Vec<Glyph>> {
    BitPacker { width: GLYPH_BITS }
        .unpack(packed)
        .into_iter()
        .map(decode_numeric)
        .collect()
}
