//! Glyph axis enumerations
//!
//! Every glyph is described along eight small, closed axes. Each axis is a
//! `#[repr(u8)]` enum whose discriminants run contiguously from zero, which
//! is what the numeric and base-36 codecs rely on.

use crate::error::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common behaviour of the eight glyph axes
pub trait Axis: Copy + Eq + Sized + 'static {
    /// Axis name as used in error messages and JSON field names
    const NAME: &'static str;
    /// Width of this axis in the numeric layout
    const BITS: u32;
    /// Every value of the axis, in discriminant order
    const ALL: &'static [Self];
    /// Number of valid values
    const CARDINALITY: u8 = Self::ALL.len() as u8;

    /// Discriminant of this value
    fn index(self) -> u8;

    /// Value for a discriminant, if it is in range
    fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Checked conversion from an untyped integer (negative values included)
    fn from_value(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_index)
            .ok_or(GlyphError::Validation {
                axis: Self::NAME,
                value,
                cardinality: Self::CARDINALITY,
            })
    }
}

macro_rules! axis_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $axis:literal, bits = $bits:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl Axis for $name {
            const NAME: &'static str = $axis;
            const BITS: u32 = $bits;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn index(self) -> u8 {
                self as u8
            }
        }

        impl $name {
            /// Variant name, as shown by displays
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = GlyphError;

            /// Case-insensitive variant name lookup
            fn from_str(s: &str) -> Result<Self> {
                $(
                    if s.eq_ignore_ascii_case(stringify!($variant)) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Ok($name::$variant);
                    }
                )+
                Err(GlyphError::Decode(format!("unknown {} name: {:?}", $axis, s)))
            }
        }

        impl TryFrom<u8> for $name {
            type Error = GlyphError;

            fn try_from(v: u8) -> Result<Self> {
                Self::from_value(i64::from(v))
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }
    };
}

axis_enum! {
    /// What operation occurred
    pub enum Action: "action", bits = 4 {
        Read = 0,
        Index = 1,
        Link = 2,
        Prompt = 3,
        React = 4,
        Write = 5,
        Save = 6,
        Merge = 7,
        Forget = 8,
        Dream = 9,
    }
}

axis_enum! {
    /// Where in the narrative pipeline the move happened
    pub enum Context: "context", bits = 2 {
        Page = 0,
        Prompt = 1,
        Reaction = 2,
        Generation = 3,
    }
}

axis_enum! {
    /// Visibility or disposition of the move
    pub enum State: "state", bits = 2 {
        Public = 0,
        Private = 1,
        Sacrifice = 2,
        Gift = 3,
    }
}

axis_enum! {
    /// Actor category
    pub enum Role: "role", bits = 3 {
        Human = 0,
        AICharacter = 1 | "AI",
        /// Temporary user with minimal persistence
        Guest = 2,
        /// Narrative moderator; oversees merges
        MythicGuardian = 3,
        WholeSystem = 4,
        PartSystem = 5,
    }
}

axis_enum! {
    /// Directionality of the move
    pub enum Relation: "relation", bits = 1 {
        SubjectToObject = 0 | "S2O",
        ObjectToSubject = 1 | "O2S",
    }
}

axis_enum! {
    pub enum Polarity: "polarity", bits = 1 {
        Internal = 0,
        External = 1,
    }
}

axis_enum! {
    /// Orientation marker
    pub enum Rotation: "rotation", bits = 2 {
        N = 0,
        E = 1,
        S = 2,
        W = 3,
    }
}

axis_enum! {
    pub enum Modality: "modality", bits = 3 {
        Text = 0,
        Audio = 1,
        Video = 2,
        AR = 3,
        VR = 4,
        Tactile = 5,
    }
}

impl Default for Modality {
    fn default() -> Self {
        Modality::Text
    }
}
