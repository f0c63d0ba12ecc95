//! QDPI move envelopes, vault entries and event-log rows

use crate::error::*;
use crate::glyph::*;
use crate::numeric::*;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// A free-form move as exchanged between reader and API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QdpiMove {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// `Some(Null)` for an explicit `"data": null`, `None` when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub data: Option<JsonValue>,
}

fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<JsonValue>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

impl QdpiMove {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            context: None,
            target: None,
            data: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }

    /// Interpret `action` and `context` as glyph axis names, filling the
    /// remaining axes from `base`
    pub fn to_glyph(&self, base: Glyph) -> Result<Glyph> {
        let mut g = base;
        g.action = self.action.parse()?;
        if let Some(ref context) = self.context {
            g.context = context.parse()?;
        }
        Ok(g)
    }
}

/// Base64 of the move's JSON form
pub fn encode_move(m: &QdpiMove) -> Result<String> {
    Ok(BASE64.encode(serde_json::to_vec(m)?))
}

pub fn decode_move(encoded: &str) -> Result<QdpiMove> {
    let bytes = BASE64.decode(encoded)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// A page's entry in a reader's vault
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Vec<String>>,
}

impl VaultEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }
}

/// Append a link from `from` to `to`. Only `from` has to exist.
pub fn link_pages(vault: &mut HashMap<String, VaultEntry>, from: &str, to: &str) -> Result<()> {
    let entry = vault
        .get_mut(from)
        .ok_or_else(|| GlyphError::NotFound(format!("vault entry {:?}", from)))?;
    entry.links.get_or_insert_with(Vec::new).push(to.to_string());
    Ok(())
}

/// Append contributions in order, creating the list if absent
pub fn merge_contributions(entry: &mut VaultEntry, contributions: impl IntoIterator<Item = String>) {
    entry
        .contributions
        .get_or_insert_with(Vec::new)
        .extend(contributions);
}

/// One row of the move log: the numeric code alongside its decoded axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveLogEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub numeric_glyph: GlyphCode,
    #[serde(flatten)]
    pub glyph: Glyph,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_details: Option<String>,
}

impl MoveLogEntry {
    /// Build a row, deriving the numeric code from the glyph
    pub fn new(id: i64, timestamp: DateTime<Utc>, glyph: Glyph) -> Self {
        Self {
            id,
            timestamp,
            numeric_glyph: encode_numeric(&glyph),
            glyph,
            user_id: None,
            operation_details: None,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.operation_details = Some(details.into());
        self
    }

    /// Check that the stored code and the stored axes agree
    pub fn verify(&self) -> Result<()> {
        let decoded = decode_numeric(self.numeric_glyph.value())?;
        if decoded != self.glyph {
            return Err(GlyphError::Decode(format!(
                "log entry {}: numeric glyph {} decodes to {}, row holds {}",
                self.id,
                self.numeric_glyph,
                decoded.describe(),
                self.glyph.describe()
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a row and verify it
    pub fn from_json(json: &str) -> Result<Self> {
        let entry: Self = serde_json::from_str(json)?;
        entry.verify()?;
        Ok(entry)
    }
}
