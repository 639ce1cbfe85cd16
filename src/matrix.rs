//! The static permission matrix and the core decision predicate.
//!
//! Each role owns exactly one table of `(module, action)` grants, fixed at
//! compile time. Nothing here is ever reloaded or mutated: role definitions
//! are a build artifact, not runtime configuration. Every query is a pure
//! function over these tables.

use std::collections::BTreeSet;

use crate::action::Action;
use crate::modules;
use crate::role::Role;

/// One granted capability: this module, this action.
///
/// A module of [`modules::ANY`] (`"*"`) matches every module name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permission {
    pub module: &'static str,
    pub action: Action,
}

const fn perm(module: &'static str, action: Action) -> Permission {
    Permission { module, action }
}

// ============================================================================
// Per-role tables
// ============================================================================

/// Students view content, submit assignments, and check themselves in.
static STUDENT_PERMISSIONS: &[Permission] = &[
    perm(modules::DASHBOARD, Action::View),
    perm(modules::COURSES, Action::View),
    perm(modules::ASSIGNMENTS, Action::View),
    perm(modules::ASSIGNMENTS, Action::Create), // submitting work
    perm(modules::QUIZZES, Action::View),
    perm(modules::ATTENDANCE, Action::View),
    perm(modules::ATTENDANCE, Action::Create), // self check-in
    perm(modules::GRADES, Action::View),
    perm(modules::VIRTUAL_CURRENCY, Action::View),
];

/// Teachers author courses, assignments, and quizzes, run attendance
/// (including QR capture), and grade.
static TEACHER_PERMISSIONS: &[Permission] = &[
    perm(modules::DASHBOARD, Action::View),
    perm(modules::COURSES, Action::View),
    perm(modules::COURSES, Action::Create),
    perm(modules::COURSES, Action::Edit),
    perm(modules::ASSIGNMENTS, Action::View),
    perm(modules::ASSIGNMENTS, Action::Create),
    perm(modules::ASSIGNMENTS, Action::Edit),
    perm(modules::ASSIGNMENTS, Action::Delete),
    perm(modules::QUIZZES, Action::View),
    perm(modules::QUIZZES, Action::Create),
    perm(modules::QUIZZES, Action::Edit),
    perm(modules::QUIZZES, Action::Delete),
    perm(modules::ATTENDANCE, Action::View),
    perm(modules::ATTENDANCE, Action::Create),
    perm(modules::ATTENDANCE, Action::Edit),
    perm(modules::QR_ATTENDANCE, Action::View),
    perm(modules::QR_ATTENDANCE, Action::Create),
    perm(modules::GRADING, Action::View),
    perm(modules::GRADING, Action::Create),
    perm(modules::GRADING, Action::Edit),
    perm(modules::GRADES, Action::View),
    perm(modules::ANALYTICS, Action::View),
];

/// Admins hold wildcard rows for every action.
///
/// `has_permission` also short-circuits on `Role::Admin` before reading this
/// table. Both stay: the early return decides even if a row ever went
/// missing, the rows document the grant surface and feed
/// [`accessible_modules`].
static ADMIN_PERMISSIONS: &[Permission] = &[
    perm(modules::ANY, Action::View),
    perm(modules::ANY, Action::Create),
    perm(modules::ANY, Action::Edit),
    perm(modules::ANY, Action::Delete),
];

/// The permission table for a role. Total: every role has one.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Student => STUDENT_PERMISSIONS,
        Role::Teacher => TEACHER_PERMISSIONS,
        Role::Admin => ADMIN_PERMISSIONS,
    }
}

// ============================================================================
// Decision predicate
// ============================================================================

/// Is `action` on `module` granted to `role`?
///
/// Admin is granted unconditionally. Everyone else gets a scan of their
/// table for an entry whose module equals `module` or `"*"` and whose
/// action matches. An unknown module name is not an error: no entry, no
/// grant.
pub fn has_permission(role: Role, module: &str, action: Action) -> bool {
    if role == Role::Admin {
        return true;
    }
    permissions_for(role)
        .iter()
        .any(|p| (p.module == module || p.module == modules::ANY) && p.action == action)
}

/// Every distinct module the role may view.
///
/// Wildcard entries expand against [`modules::ALL`], so the admin result
/// names every registered module rather than the literal `"*"`. BTreeSet
/// keeps the output deterministic; duplicates collapse.
pub fn accessible_modules(role: Role) -> BTreeSet<&'static str> {
    let mut out = BTreeSet::new();
    for p in permissions_for(role) {
        if p.action != Action::View {
            continue;
        }
        if p.module == modules::ANY {
            out.extend(modules::ALL.iter().copied());
        } else {
            out.insert(p.module);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_table() {
        for role in Role::ALL {
            assert!(!permissions_for(role).is_empty());
        }
    }

    #[test]
    fn test_tables_reference_registered_modules_only() {
        for role in Role::ALL {
            for p in permissions_for(role) {
                assert!(
                    modules::is_registered(p.module) || p.module == modules::ANY,
                    "{} grants unregistered module {}",
                    role,
                    p.module
                );
            }
        }
    }

    #[test]
    fn test_admin_short_circuit_survives_empty_table() {
        // The early return must decide without consulting the table. We
        // cannot swap the static table out, but we can verify the grant
        // holds for a module no table row names.
        assert!(has_permission(Role::Admin, "module_without_any_row", Action::Delete));
    }

    #[test]
    fn test_wildcard_expansion_covers_registry() {
        let admin = accessible_modules(Role::Admin);
        for m in modules::ALL {
            assert!(admin.contains(m));
        }
        assert!(!admin.contains(modules::ANY));
    }

    #[test]
    fn test_student_cannot_touch_user_management() {
        for action in Action::ALL {
            assert!(!has_permission(Role::Student, modules::USER_MANAGEMENT, action));
        }
    }
}
