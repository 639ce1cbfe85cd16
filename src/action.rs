//! Actions a role can perform on a module.

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// The four actions the permission matrix understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

impl Action {
    /// Every known action
    pub const ALL: [Action; 4] = [Action::View, Action::Create, Action::Edit, Action::Delete];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" => Ok(Self::View),
            "create" => Ok(Self::Create),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            _ => Err(GateError::UnknownAction(s.to_string())),
        }
    }
}

/// The subset of actions that make sense on content you authored.
///
/// Own-content checks only ever concern edit and delete; narrowing the type
/// here means a caller cannot ask "can I view my own quiz" through the
/// ownership path by mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnAction {
    Edit,
    Delete,
}

impl From<OwnAction> for Action {
    fn from(a: OwnAction) -> Self {
        match a {
            OwnAction::Edit => Action::Edit,
            OwnAction::Delete => Action::Delete,
        }
    }
}

impl std::str::FromStr for OwnAction {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            _ => Err(GateError::UnknownAction(s.to_string())),
        }
    }
}
