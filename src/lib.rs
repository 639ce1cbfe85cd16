//! Classgate - role-based authorization engine for school portals
//!
//! The engine answers one question: may this user perform this action on
//! this functional area? Roles come from a closed set (student, teacher,
//! admin), each with a static permission table fixed at compile time.
//! Decisions are pure functions; denial is a `false`, never an error.
//!
//! Layered on the core predicate:
//! - contextual checks that fold in ownership facts (own content, own
//!   course, own students) supplied per call
//! - derived UI artifacts: accessible module lists, the filtered
//!   navigation menu, dashboard widget keys, and a flat permission summary
//! - an in-memory bearer-token session registry so hosts can bind an
//!   authenticated `(user id, role)` pair once and query many times
//!
//! With the `server` feature, the same decisions are served over HTTP by
//! the `classgate-server` binary.
//!
//! ```
//! use classgate::{Action, Identity, Role};
//!
//! let teacher = Identity::new("t-100", Role::Teacher);
//! assert!(teacher.can_create("courses"));
//! assert!(!teacher.has_permission("user_management", Action::View));
//! ```

pub mod access;
pub mod action;
pub mod dashboard;
pub mod error;
pub mod identity;
pub mod matrix;
pub mod modules;
pub mod nav;
pub mod role;
pub mod session;

#[cfg(feature = "server")]
pub mod server;

pub use access::{AnalyticsScope, CourseRef};
pub use action::{Action, OwnAction};
pub use dashboard::{kpi_widgets, PermissionSummary};
pub use error::{GateError, Result};
pub use identity::{Identity, UserId};
pub use matrix::{accessible_modules, has_permission, permissions_for, Permission};
pub use nav::{navigation_for, NavEntry, NAV_CANDIDATES};
pub use role::Role;
pub use session::{SessionInfo, SessionStore};
