//! Capability lookup for glyph actions and roles

use crate::glyph::Glyph;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A permission string granted to roles and required by actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Read,
    React,
    Comment,
    Draft,
    Pull,
    Approve,
    Moderate,
    Orchestrate,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Read => "read",
            Capability::React => "react",
            Capability::Comment => "comment",
            Capability::Draft => "draft",
            Capability::Pull => "pull",
            Capability::Approve => "approve",
            Capability::Moderate => "moderate",
            Capability::Orchestrate => "orchestrate",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use Capability::*;

const HUMAN: &[Capability] = &[Read, React, Comment, Draft];
const AI_CHARACTER: &[Capability] = &[Read, React, Comment, Draft, Pull];
const GUEST: &[Capability] = &[Read, React];
const MYTHIC_GUARDIAN: &[Capability] = &[Read, React, Comment, Draft, Pull, Approve, Moderate];
const WHOLE_SYSTEM: &[Capability] = &[Read, React, Comment, Draft, Pull, Approve, Orchestrate];
const PART_SYSTEM: &[Capability] = &[Read, React, Comment];

impl Action {
    /// Capability a role must hold to perform this action
    pub fn required_capability(self) -> Capability {
        match self {
            Action::Read | Action::Index => Read,
            Action::Link => Comment,
            Action::Prompt | Action::React | Action::Dream => React,
            Action::Write | Action::Save => Draft,
            Action::Merge => Approve,
            Action::Forget => Moderate,
        }
    }
}

impl Role {
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Role::Human => HUMAN,
            Role::AICharacter => AI_CHARACTER,
            Role::Guest => GUEST,
            Role::MythicGuardian => MYTHIC_GUARDIAN,
            Role::WholeSystem => WHOLE_SYSTEM,
            Role::PartSystem => PART_SYSTEM,
        }
    }

    pub fn has(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Whether this role may perform `action`
    pub fn can(self, action: Action) -> bool {
        self.has(action.required_capability())
    }
}

impl Glyph {
    /// Whether the glyph's role holds the capability its action requires
    pub fn is_permitted(&self) -> bool {
        self.role.can(self.action)
    }
}
