//! The acting user.
//!
//! The upstream session provider hands us a user id and a role; that pair is
//! everything the engine knows about a caller. Identities are passed into
//! each call and never stored, so the engine stays reentrant and
//! session-agnostic.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::matrix;
use crate::role::Role;

/// Opaque user identifier. Compared by equality only; the engine never
/// parses or interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Who is asking: an opaque user id plus the role the session provider
/// resolved for them.
///
/// The convenience wrappers below fix the role to `self.role`, standing in
/// for the "current user" context the portal UI works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: impl Into<UserId>, role: Role) -> Self {
        Self { user_id: user_id.into(), role }
    }

    /// Core predicate with this identity's role
    pub fn has_permission(&self, module: &str, action: Action) -> bool {
        matrix::has_permission(self.role, module, action)
    }

    /// May this user open the module at all?
    pub fn can_access(&self, module: &str) -> bool {
        self.has_permission(module, Action::View)
    }

    pub fn can_create(&self, module: &str) -> bool {
        self.has_permission(module, Action::Create)
    }

    pub fn can_edit(&self, module: &str) -> bool {
        self.has_permission(module, Action::Edit)
    }

    pub fn can_delete(&self, module: &str) -> bool {
        self.has_permission(module, Action::Delete)
    }
}
