//! The glyph record and its untyped boundary form

use crate::error::*;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// One discrete narrative or system event, described along eight axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Glyph {
    pub action: Action,
    pub context: Context,
    pub state: State,
    pub role: Role,
    pub relation: Relation,
    pub polarity: Polarity,
    pub rotation: Rotation,
    /// Absent in older records; normalizes to `Text`
    #[serde(default)]
    pub modality: Modality,
}

impl Glyph {
    /// Build a glyph with the default `Text` modality
    pub fn new(
        action: Action,
        context: Context,
        state: State,
        role: Role,
        relation: Relation,
        polarity: Polarity,
        rotation: Rotation,
    ) -> Self {
        Self {
            action,
            context,
            state,
            role,
            relation,
            polarity,
            rotation,
            modality: Modality::Text,
        }
    }

    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    /// Axis names joined with `/`, in string-codec order
    pub fn describe(&self) -> String {
        [
            self.action.name(),
            self.context.name(),
            self.state.name(),
            self.role.name(),
            self.relation.name(),
            self.polarity.name(),
            self.rotation.name(),
            self.modality.name(),
        ]
        .join("/")
    }

    /// Axis discriminants in string-codec order
    pub(crate) fn digits(&self) -> [u8; 8] {
        [
            self.action.index(),
            self.context.index(),
            self.state.index(),
            self.role.index(),
            self.relation.index(),
            self.polarity.index(),
            self.rotation.index(),
            self.modality.index(),
        ]
    }
}

impl Default for Glyph {
    /// The all-zero glyph: Read/Page/Public/Human/SubjectToObject/Internal/N/Text
    fn default() -> Self {
        Self::new(
            Action::Read,
            Context::Page,
            State::Public,
            Role::Human,
            Relation::SubjectToObject,
            Polarity::Internal,
            Rotation::N,
        )
    }
}

/// A glyph as it arrives from an integer column or JSON, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawGlyph {
    pub action: i64,
    pub context: i64,
    pub state: i64,
    pub role: i64,
    pub relation: i64,
    pub polarity: i64,
    pub rotation: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<i64>,
}

impl RawGlyph {
    /// Check every axis against its enumeration, reporting the first failure
    pub fn validate(&self) -> Result<Glyph> {
        Ok(Glyph {
            action: Action::from_value(self.action)?,
            context: Context::from_value(self.context)?,
            state: State::from_value(self.state)?,
            role: Role::from_value(self.role)?,
            relation: Relation::from_value(self.relation)?,
            polarity: Polarity::from_value(self.polarity)?,
            rotation: Rotation::from_value(self.rotation)?,
            modality: match self.modality {
                Some(m) => Modality::from_value(m)?,
                None => Modality::Text,
            },
        })
    }
}

impl From<Glyph> for RawGlyph {
    fn from(g: Glyph) -> Self {
        Self {
            action: g.action.index().into(),
            context: g.context.index().into(),
            state: g.state.index().into(),
            role: g.role.index().into(),
            relation: g.relation.index().into(),
            polarity: g.polarity.index().into(),
            rotation: g.rotation.index().into(),
            modality: Some(g.modality.index().into()),
        }
    }
}

impl TryFrom<RawGlyph> for Glyph {
    type Error = GlyphError;

    fn try_from(raw: RawGlyph) -> Result<Self> {
        raw.validate()
    }
}
