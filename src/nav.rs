//! Navigation menu derivation.
//!
//! The menu is a fixed, hand-authored candidate list filtered per role.
//! Declaration order is presentation order; filtering never reorders.

use serde::Serialize;

use crate::identity::Identity;
use crate::modules;
use crate::role::Role;

/// One candidate menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub module: &'static str,
}

const fn nav(name: &'static str, path: &'static str, module: &'static str) -> NavEntry {
    NavEntry { name, path, module }
}

/// The full candidate menu, in display order.
pub static NAV_CANDIDATES: &[NavEntry] = &[
    nav("Dashboard", "/dashboard", modules::DASHBOARD),
    nav("Courses", "/courses", modules::COURSES),
    nav("Assignments", "/assignments", modules::ASSIGNMENTS),
    nav("Quizzes", "/quizzes", modules::QUIZZES),
    nav("Attendance", "/attendance", modules::ATTENDANCE),
    nav("Grades", "/grades", modules::GRADES),
    nav("Analytics", "/analytics", modules::ANALYTICS),
    nav("User Management", "/users", modules::USER_MANAGEMENT),
];

/// The menu entries `identity` may see, in declaration order.
///
/// An entry is included when the role can view its module, with two extra
/// gates on top of the table: analytics never shows for students, and user
/// management shows only for admins.
pub fn navigation_for(identity: &Identity) -> Vec<&'static NavEntry> {
    NAV_CANDIDATES
        .iter()
        .filter(|entry| {
            if !identity.can_access(entry.module) {
                return false;
            }
            match entry.module {
                m if m == modules::ANALYTICS => identity.role != Role::Student,
                m if m == modules::USER_MANAGEMENT => identity.role == Role::Admin,
                _ => true,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(identity: &Identity) -> Vec<&'static str> {
        navigation_for(identity).iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_admin_sees_whole_menu_in_order() {
        let admin = Identity::new("a1", Role::Admin);
        let expected: Vec<_> = NAV_CANDIDATES.iter().map(|e| e.name).collect();
        assert_eq!(names(&admin), expected);
    }

    #[test]
    fn test_student_menu() {
        let student = Identity::new("s1", Role::Student);
        assert_eq!(
            names(&student),
            vec!["Dashboard", "Courses", "Assignments", "Quizzes", "Attendance", "Grades"]
        );
    }

    #[test]
    fn test_teacher_menu_has_analytics_but_not_users() {
        let teacher = Identity::new("t1", Role::Teacher);
        let menu = names(&teacher);
        assert!(menu.contains(&"Analytics"));
        assert!(!menu.contains(&"User Management"));
    }

    #[test]
    fn test_candidate_modules_are_registered() {
        for entry in NAV_CANDIDATES {
            assert!(modules::is_registered(entry.module));
        }
    }
}
