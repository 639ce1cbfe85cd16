//! Dashboard widget keys and the flat permission summary.

use serde::Serialize;

use crate::action::Action;
use crate::identity::Identity;
use crate::matrix::has_permission;
use crate::modules;
use crate::role::Role;

// ============================================================================
// KPI widgets
// ============================================================================

static STUDENT_KPIS: &[&str] = &["attendance", "assignments", "grades", "virtual_currency"];

static TEACHER_KPIS: &[&str] = &[
    "classes",
    "students",
    "attendance_rate",
    "pending_grades",
    "quiz_analytics",
];

static ADMIN_KPIS: &[&str] = &[
    "total_users",
    "system_health",
    "active_courses",
    "financial_overview",
];

/// The dashboard widget keys for a role, in display order.
///
/// Pure lookup. The upstream portal returned an empty list for roles
/// outside the closed set; that branch is unrepresentable here, unknown
/// role strings get rejected at the parse boundary instead.
pub fn kpi_widgets(role: Role) -> &'static [&'static str] {
    match role {
        Role::Student => STUDENT_KPIS,
        Role::Teacher => TEACHER_KPIS,
        Role::Admin => ADMIN_KPIS,
    }
}

// ============================================================================
// Permission summary
// ============================================================================

/// Flat derived booleans for summary UI. Everything here restates the
/// matrix; the struct holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionSummary {
    pub role: Role,
    pub can_create_content: bool,
    pub can_grade: bool,
    pub can_manage_users: bool,
    pub can_view_analytics: bool,
    pub can_generate_qr: bool,
    pub can_take_attendance: bool,
}

impl PermissionSummary {
    pub fn for_role(role: Role) -> Self {
        let can_create_content = has_permission(role, modules::COURSES, Action::Create)
            || has_permission(role, modules::ASSIGNMENTS, Action::Create)
            || has_permission(role, modules::QUIZZES, Action::Create);
        Self {
            role,
            can_create_content,
            can_grade: has_permission(role, modules::GRADING, Action::Create),
            can_manage_users: has_permission(role, modules::USER_MANAGEMENT, Action::Edit),
            can_view_analytics: has_permission(role, modules::ANALYTICS, Action::View),
            can_generate_qr: has_permission(role, modules::QR_ATTENDANCE, Action::Create),
            can_take_attendance: has_permission(role, modules::ATTENDANCE, Action::Create),
        }
    }

    pub fn for_identity(identity: &Identity) -> Self {
        Self::for_role(identity.role)
    }
}
