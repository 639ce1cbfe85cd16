//! Permission matrix tests.
//!
//! These pin the exact decision boundaries of the static tables: what each
//! role is granted, what absence of an entry means, and how the admin
//! override and wildcard rows interact.

use classgate::{
    accessible_modules, has_permission, modules, permissions_for, Action, Identity, Role,
};

// ============================================================================
// Admin universal override
// ============================================================================

/// Admin is granted every (module, action), registered or not.
#[test]
fn admin_is_granted_everything() {
    for m in modules::ALL {
        for action in Action::ALL {
            assert!(has_permission(Role::Admin, m, action), "admin denied {}/{}", m, action);
        }
    }
    // Even module names no table row mentions
    assert!(has_permission(Role::Admin, "made_up_module", Action::Delete));
    assert!(has_permission(Role::Admin, "", Action::View));
}

/// The wildcard rows alone would grant the same decisions; the short-circuit
/// and the table must agree so either mechanism could carry the other.
#[test]
fn admin_table_and_override_agree() {
    let wildcard_grants: Vec<_> = permissions_for(Role::Admin)
        .iter()
        .filter(|p| p.module == modules::ANY)
        .map(|p| p.action)
        .collect();
    for action in Action::ALL {
        assert!(wildcard_grants.contains(&action));
    }
}

// ============================================================================
// Non-admin boundaries
// ============================================================================

/// Absence of a table entry means denial, not an error.
#[test]
fn missing_entry_denies() {
    // Students have no user_management rows at all
    for action in Action::ALL {
        assert!(!has_permission(Role::Student, modules::USER_MANAGEMENT, action));
    }
    // Teachers may not delete courses (view/create/edit only)
    assert!(!has_permission(Role::Teacher, modules::COURSES, Action::Delete));
    // Unknown module names simply never match
    assert!(!has_permission(Role::Teacher, "cafeteria", Action::View));
    assert!(!has_permission(Role::Student, "", Action::View));
}

#[test]
fn student_grants_match_table() {
    assert!(has_permission(Role::Student, modules::DASHBOARD, Action::View));
    assert!(has_permission(Role::Student, modules::COURSES, Action::View));
    assert!(has_permission(Role::Student, modules::ASSIGNMENTS, Action::View));
    assert!(has_permission(Role::Student, modules::ASSIGNMENTS, Action::Create));
    assert!(has_permission(Role::Student, modules::ATTENDANCE, Action::Create));
    assert!(has_permission(Role::Student, modules::VIRTUAL_CURRENCY, Action::View));

    assert!(!has_permission(Role::Student, modules::COURSES, Action::Create));
    assert!(!has_permission(Role::Student, modules::ASSIGNMENTS, Action::Edit));
    assert!(!has_permission(Role::Student, modules::ASSIGNMENTS, Action::Delete));
    assert!(!has_permission(Role::Student, modules::GRADING, Action::View));
    assert!(!has_permission(Role::Student, modules::QR_ATTENDANCE, Action::Create));
    assert!(!has_permission(Role::Student, modules::ANALYTICS, Action::View));
}

#[test]
fn teacher_grants_match_table() {
    assert!(has_permission(Role::Teacher, modules::COURSES, Action::Create));
    assert!(has_permission(Role::Teacher, modules::COURSES, Action::Edit));
    assert!(has_permission(Role::Teacher, modules::ASSIGNMENTS, Action::Delete));
    assert!(has_permission(Role::Teacher, modules::QUIZZES, Action::Delete));
    assert!(has_permission(Role::Teacher, modules::QR_ATTENDANCE, Action::Create));
    assert!(has_permission(Role::Teacher, modules::GRADING, Action::Create));
    assert!(has_permission(Role::Teacher, modules::ANALYTICS, Action::View));

    assert!(!has_permission(Role::Teacher, modules::ATTENDANCE, Action::Delete));
    assert!(!has_permission(Role::Teacher, modules::GRADING, Action::Delete));
    assert!(!has_permission(Role::Teacher, modules::USER_MANAGEMENT, Action::View));
    assert!(!has_permission(Role::Teacher, modules::VIRTUAL_CURRENCY, Action::View));
}

// ============================================================================
// Ambient wrappers
// ============================================================================

/// can_access/can_create/can_edit/can_delete are exact aliases of
/// has_permission with the identity's role.
#[test]
fn wrappers_are_aliases() {
    for role in Role::ALL {
        let id = Identity::new("any-user", role);
        for m in modules::ALL {
            assert_eq!(id.can_access(m), has_permission(role, m, Action::View));
            assert_eq!(id.can_create(m), has_permission(role, m, Action::Create));
            assert_eq!(id.can_edit(m), has_permission(role, m, Action::Edit));
            assert_eq!(id.can_delete(m), has_permission(role, m, Action::Delete));
        }
    }
}

/// The wrapper set and the raw predicate must stay pure: repeated calls
/// with identical inputs give identical answers.
#[test]
fn decisions_are_idempotent() {
    for role in Role::ALL {
        for m in modules::ALL {
            for action in Action::ALL {
                let first = has_permission(role, m, action);
                for _ in 0..3 {
                    assert_eq!(has_permission(role, m, action), first);
                }
            }
        }
    }
}

// ============================================================================
// Accessible modules
// ============================================================================

/// A module appears iff some entry with that module (or the wildcard) and
/// the view action exists; set semantics, no duplicates by construction.
#[test]
fn accessible_modules_mirror_view_entries() {
    for role in Role::ALL {
        let accessible = accessible_modules(role);
        for m in modules::ALL {
            let has_view_entry = permissions_for(role)
                .iter()
                .any(|p| (p.module == *m || p.module == modules::ANY) && p.action == Action::View);
            assert_eq!(accessible.contains(m), has_view_entry, "{}/{}", role, m);
        }
    }
}

#[test]
fn student_accessible_modules() {
    let m = accessible_modules(Role::Student);
    let expected = [
        modules::DASHBOARD,
        modules::COURSES,
        modules::ASSIGNMENTS,
        modules::QUIZZES,
        modules::ATTENDANCE,
        modules::GRADES,
        modules::VIRTUAL_CURRENCY,
    ];
    assert_eq!(m.len(), expected.len());
    for e in expected {
        assert!(m.contains(e));
    }
}

#[test]
fn admin_accessible_modules_expand_wildcard() {
    let m = accessible_modules(Role::Admin);
    assert_eq!(m.len(), modules::ALL.len());
    assert!(!m.contains("*"));
}
