//! Module name registry.
//!
//! Every functional area of the portal has one canonical identifier here.
//! The permission matrix, navigation table, and summary derivations all
//! reference these constants so spellings can never drift apart.

// ============================================================================
// Module identifiers
// ============================================================================

/// Landing dashboard
pub const DASHBOARD: &str = "dashboard";
/// Course catalog and course pages
pub const COURSES: &str = "courses";
/// Assignment listings and submissions
pub const ASSIGNMENTS: &str = "assignments";
/// Quiz authoring and taking
pub const QUIZZES: &str = "quizzes";
/// Attendance records and check-in
pub const ATTENDANCE: &str = "attendance";
/// QR-code based attendance capture
pub const QR_ATTENDANCE: &str = "qr_attendance";
/// Grade views (transcript side)
pub const GRADES: &str = "grades";
/// Grading workflows (instructor side)
pub const GRADING: &str = "grading";
/// Usage and performance analytics
pub const ANALYTICS: &str = "analytics";
/// Account administration
pub const USER_MANAGEMENT: &str = "user_management";
/// Reward points ledger
pub const VIRTUAL_CURRENCY: &str = "virtual_currency";

/// Wildcard identifier: matches any module in a permission entry
pub const ANY: &str = "*";

/// Every registered module, ordered by where it appears in the portal.
///
/// Wildcard permission entries expand against this list, so a module that
/// never gets registered here is invisible to `accessible_modules` even
/// for admins.
pub const ALL: &[&str] = &[
    DASHBOARD,
    COURSES,
    ASSIGNMENTS,
    QUIZZES,
    ATTENDANCE,
    QR_ATTENDANCE,
    GRADES,
    GRADING,
    ANALYTICS,
    USER_MANAGEMENT,
    VIRTUAL_CURRENCY,
];

/// True if `name` is a registered module identifier (the wildcard is not one)
pub fn is_registered(name: &str) -> bool {
    ALL.contains(&name)
}
