//! Portal roles.

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// Role assigned to a portal user.
///
/// Kept as a closed enum so an unrecognized role can never reach the
/// decision functions; strings coming off the wire go through `FromStr`
/// and are rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Enrolled learner: views content, submits work, checks in
    Student,
    /// Instructor: authors content, grades, runs attendance
    Teacher,
    /// Operator: unrestricted access to every module
    Admin,
}

impl Role {
    /// Every known role, in display order
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            "admin" => Ok(Self::Admin),
            _ => Err(GateError::UnknownRole(s.to_string())),
        }
    }
}
