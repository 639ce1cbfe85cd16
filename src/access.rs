//! Contextual access checks.
//!
//! These predicates combine the role table with ownership facts supplied per
//! call: who authored the content, who instructs the course. Ownership is
//! never cached; a missing fact means ownership cannot be proven and the
//! check fails closed.

use serde::{Deserialize, Serialize};

use crate::action::{Action, OwnAction};
use crate::error::GateError;
use crate::identity::{Identity, UserId};
use crate::modules;
use crate::role::Role;

/// A course record's identity plus its owning instructor, if known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    pub course_id: String,
    /// `None` when the record carries no instructor; treated as unproven
    /// ownership and denied for teachers.
    pub instructor_id: Option<UserId>,
}

impl CourseRef {
    pub fn new(course_id: impl Into<String>, instructor_id: Option<UserId>) -> Self {
        Self { course_id: course_id.into(), instructor_id }
    }
}

/// How wide an analytics query reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsScope {
    /// The caller's own classes (default)
    #[default]
    Own,
    /// Every class in the school
    School,
}

impl std::str::FromStr for AnalyticsScope {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "own" => Ok(Self::Own),
            "school" => Ok(Self::School),
            _ => Err(GateError::UnknownScope(s.to_string())),
        }
    }
}

impl Identity {
    /// May this user edit or delete content they claim as theirs?
    ///
    /// Admin: always. Teacher: only when `creator` is actually them *and*
    /// the role table grants the action on the module; authorship never
    /// widens a teacher's rights beyond their table. Student: never, even
    /// for content they created.
    pub fn can_manage_own_content(&self, creator: &UserId, module: &str, action: OwnAction) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Teacher => {
                creator == &self.user_id && self.has_permission(module, Action::from(action))
            }
            Role::Student => false,
        }
    }

    /// May this user open a specific course?
    ///
    /// Teachers must instruct the course. Students get the coarse
    /// `courses`/view check: the portal does not consult enrollment here,
    /// so any student who can see the catalog can open any course page.
    pub fn can_access_course(&self, course: &CourseRef) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Teacher => course.instructor_id.as_ref() == Some(&self.user_id),
            Role::Student => self.can_access(modules::COURSES),
        }
    }

    /// May this user grade students in a course owned by
    /// `course_instructor`?
    pub fn can_grade_student(&self, course_instructor: Option<&UserId>) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Teacher => {
                course_instructor == Some(&self.user_id)
                    && self.has_permission(modules::GRADING, Action::Create)
            }
            Role::Student => false,
        }
    }

    /// May this user mint attendance QR codes?
    pub fn can_create_qr_code(&self) -> bool {
        self.has_permission(modules::QR_ATTENDANCE, Action::Create)
    }

    /// May this user submit an assignment? Submission is a student act;
    /// teachers and admins author assignments through the edit path instead.
    pub fn can_submit_assignment(&self) -> bool {
        self.role == Role::Student && self.has_permission(modules::ASSIGNMENTS, Action::Create)
    }

    /// May this user open analytics at the given scope?
    ///
    /// Teachers only ever see their own classes; school-wide analytics is
    /// admin territory.
    pub fn can_view_analytics(&self, scope: AnalyticsScope) -> bool {
        match (self.role, scope) {
            (Role::Admin, _) => true,
            (Role::Teacher, AnalyticsScope::Own) => {
                self.has_permission(modules::ANALYTICS, Action::View)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_instructor_denies_teacher() {
        let teacher = Identity::new("t1", Role::Teacher);
        let course = CourseRef::new("c1", None);
        assert!(!teacher.can_access_course(&course));
        assert!(!teacher.can_grade_student(None));
    }

    #[test]
    fn test_scope_parses() {
        assert_eq!("own".parse::<AnalyticsScope>().unwrap(), AnalyticsScope::Own);
        assert_eq!("School".parse::<AnalyticsScope>().unwrap(), AnalyticsScope::School);
        assert!("galaxy".parse::<AnalyticsScope>().is_err());
    }

    #[test]
    fn test_default_scope_is_own() {
        assert_eq!(AnalyticsScope::default(), AnalyticsScope::Own);
    }
}
