//! Classgate HTTP decision API.
//!
//! Serves the authorization engine to hosts that prefer a sidecar decision
//! service. The host mints a session for an authenticated user once
//! (`POST /sessions`), then attaches the bearer token to decision queries.
//! Permission denials are data (`{"allowed": false}`), never HTTP errors;
//! only missing/invalid tokens (401) and malformed role/action/scope names
//! (400) fail a request.
//!
//! Run with: cargo run --release --features server --bin classgate-server

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::access::{AnalyticsScope, CourseRef};
use crate::action::{Action, OwnAction};
use crate::dashboard::{kpi_widgets, PermissionSummary};
use crate::identity::{Identity, UserId};
use crate::matrix::accessible_modules;
use crate::nav::{navigation_for, NavEntry};
use crate::role::Role;
use crate::session::SessionStore;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CreateSessionRequest {
    user_id: String,
    role: String,
    ttl_secs: Option<u64>,
}

#[derive(Debug, Serialize)]
struct SessionResponse {
    token: String,
    user_id: UserId,
    role: Role,
}

#[derive(Debug, Serialize)]
struct RevokedResponse {
    revoked: bool,
}

#[derive(Debug, Deserialize)]
struct OwnContentRequest {
    creator_id: String,
    module: String,
    action: String,
}

#[derive(Debug, Deserialize)]
struct CourseAccessRequest {
    course_id: String,
    instructor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GradingRequest {
    course_instructor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyticsRequest {
    // absent scope means the caller's own classes
    scope: Option<String>,
}

#[derive(Debug, Serialize)]
struct AllowedResponse {
    allowed: bool,
}

#[derive(Debug, Serialize)]
struct ModulesResponse {
    modules: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct NavigationResponse {
    items: Vec<&'static NavEntry>,
}

#[derive(Debug, Serialize)]
struct KpiResponse {
    widgets: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn unauthorized(msg: impl Into<String>) -> ApiError {
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse { error: msg.into() }))
}

fn bad_request(msg: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg.into() }))
}

// ============================================================================
// App State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self { sessions: Arc::new(SessionStore::new()) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the caller's identity from the `Authorization: Bearer` header.
fn bearer_identity(state: &AppState, headers: &HeaderMap) -> Result<Identity, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| unauthorized("Missing bearer token"))?;
    state
        .sessions
        .validate_session(token)
        .map_err(|e| unauthorized(e.to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let role: Role = req.role.parse().map_err(|e: crate::GateError| bad_request(e.to_string()))?;
    let identity = Identity::new(req.user_id, role);
    let token = state.sessions.create_session(identity.clone(), req.ttl_secs);
    Ok(Json(SessionResponse { token, user_id: identity.user_id, role }))
}

async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Identity>, ApiError> {
    Ok(Json(bearer_identity(&state, &headers)?))
}

async fn delete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RevokedResponse>, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| unauthorized("Missing bearer token"))?;
    Ok(Json(RevokedResponse { revoked: state.sessions.revoke_session(token) }))
}

async fn check_permission(
    State(state): State<AppState>,
    Path((module, action)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<AllowedResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    let action: Action = action.parse().map_err(|e: crate::GateError| bad_request(e.to_string()))?;
    let allowed = identity.has_permission(&module, action);
    debug!(user = %identity.user_id, %module, %action, allowed, "permission check");
    Ok(Json(AllowedResponse { allowed }))
}

async fn check_own_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<OwnContentRequest>,
) -> Result<Json<AllowedResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    let action: OwnAction =
        req.action.parse().map_err(|e: crate::GateError| bad_request(e.to_string()))?;
    let creator = UserId::new(req.creator_id);
    let allowed = identity.can_manage_own_content(&creator, &req.module, action);
    Ok(Json(AllowedResponse { allowed }))
}

async fn check_course_access(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CourseAccessRequest>,
) -> Result<Json<AllowedResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    let course = CourseRef::new(req.course_id, req.instructor_id.map(UserId::new));
    Ok(Json(AllowedResponse { allowed: identity.can_access_course(&course) }))
}

async fn check_grading(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<GradingRequest>,
) -> Result<Json<AllowedResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    let instructor = req.course_instructor_id.map(UserId::new);
    Ok(Json(AllowedResponse { allowed: identity.can_grade_student(instructor.as_ref()) }))
}

async fn check_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AnalyticsRequest>,
) -> Result<Json<AllowedResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    let scope = match req.scope {
        Some(s) => s.parse().map_err(|e: crate::GateError| bad_request(e.to_string()))?,
        None => AnalyticsScope::default(),
    };
    Ok(Json(AllowedResponse { allowed: identity.can_view_analytics(scope) }))
}

async fn check_qr(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AllowedResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    Ok(Json(AllowedResponse { allowed: identity.can_create_qr_code() }))
}

async fn check_submission(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AllowedResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    Ok(Json(AllowedResponse { allowed: identity.can_submit_assignment() }))
}

async fn list_modules(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ModulesResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    let modules = accessible_modules(identity.role).into_iter().collect();
    Ok(Json(ModulesResponse { modules }))
}

async fn navigation(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<NavigationResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    Ok(Json(NavigationResponse { items: navigation_for(&identity) }))
}

async fn kpis(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<KpiResponse>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    Ok(Json(KpiResponse { widgets: kpi_widgets(identity.role) }))
}

async fn summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PermissionSummary>, ApiError> {
    let identity = bearer_identity(&state, &headers)?;
    Ok(Json(PermissionSummary::for_identity(&identity)))
}

// ============================================================================
// Router
// ============================================================================

/// Build the full decision API router. Exposed so tests can drive the
/// handlers without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        // Sessions
        .route("/sessions", post(create_session))
        .route("/session", delete(delete_session))
        .route("/me", get(me))
        // Decision checks
        .route("/check/:module/:action", get(check_permission))
        .route("/check/own", post(check_own_content))
        .route("/check/course", post(check_course_access))
        .route("/check/grading", post(check_grading))
        .route("/check/analytics", post(check_analytics))
        .route("/check/qr", get(check_qr))
        .route("/check/submission", get(check_submission))
        // Derived UI artifacts
        .route("/modules", get(list_modules))
        .route("/navigation", get(navigation))
        .route("/kpis", get(kpis))
        .route("/summary", get(summary))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
