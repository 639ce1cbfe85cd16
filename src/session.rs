//! Bearer-token session registry.
//!
//! The host application authenticates users elsewhere; this registry only
//! binds an already-resolved [`Identity`] to a bearer token so the decision
//! API can recover "who is asking" per request. Tokens are random 32-byte
//! values, stored only as SHA-256 hashes. Sessions live in memory and die
//! with the process; expired records are swept on every create, and hosts
//! can call [`SessionStore::purge_expired`] on their own schedule as well.

use std::collections::HashMap;
use std::sync::RwLock;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{GateError, Result};
use crate::identity::{Identity, UserId};

/// One live session: the identity it resolves to plus its lifetime.
#[derive(Debug, Clone)]
struct SessionRecord {
    identity: Identity,
    created_at: u64,
    expires_at: u64, // 0 = never
}

/// Session metadata returned by [`SessionStore::sessions_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub user_id: UserId,
    pub created_at: u64,
    pub expires_at: u64, // 0 = never
}

/// In-memory token-to-identity registry. Internally synchronized; share it
/// with `Arc`.
#[derive(Debug, Default)]
pub struct SessionStore {
    // token hash (hex) -> record
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

/// Generate a cryptographically secure token (32 bytes, base64url encoded)
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).expect("Failed to generate random bytes");
    base64url_encode(&bytes)
}

/// Hash token with SHA-256 for storage
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex_encode(hasher.finalize())
}

/// Base64url encode without padding
fn base64url_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
    let mut result = String::with_capacity((data.len() * 4 + 2) / 3);
    for chunk in data.chunks(3) {
        let n = match chunk.len() {
            3 => ((chunk[0] as u32) << 16) | ((chunk[1] as u32) << 8) | (chunk[2] as u32),
            2 => ((chunk[0] as u32) << 16) | ((chunk[1] as u32) << 8),
            1 => (chunk[0] as u32) << 16,
            _ => unreachable!(),
        };
        result.push(ALPHABET[((n >> 18) & 0x3F) as usize] as char);
        result.push(ALPHABET[((n >> 12) & 0x3F) as usize] as char);
        if chunk.len() > 1 { result.push(ALPHABET[((n >> 6) & 0x3F) as usize] as char); }
        if chunk.len() > 2 { result.push(ALPHABET[(n & 0x3F) as usize] as char); }
    }
    result
}

fn hex_encode(data: impl AsRef<[u8]>) -> String {
    data.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
}

/// Milliseconds since the Unix epoch
fn current_epoch() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, SessionRecord>> {
        self.sessions.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, SessionRecord>> {
        self.sessions.write().unwrap_or_else(|p| p.into_inner())
    }

    /// Bind `identity` to a fresh token. The raw token is returned exactly
    /// once; only its hash is kept. Records that have already expired are
    /// swept out on the way in.
    pub fn create_session(&self, identity: Identity, ttl_secs: Option<u64>) -> String {
        self.purge_expired();

        let token = generate_token();
        let hash = hash_token(&token);
        let now = current_epoch();
        // ttl_secs is caller-supplied and unbounded; saturate the millis
        // conversion so an oversized ttl clamps to the far future
        let expires = ttl_secs
            .map(|t| now.saturating_add(t.saturating_mul(1000)))
            .unwrap_or(0);

        info!(user = %identity.user_id, role = %identity.role, ttl_secs, "session created");
        self.write().insert(
            hash,
            SessionRecord { identity, created_at: now, expires_at: expires },
        );
        token
    }

    /// Resolve a token back to the identity that created it.
    pub fn validate_session(&self, token: &str) -> Result<Identity> {
        let hash = hash_token(token);
        let sessions = self.read();
        let record = sessions.get(&hash).ok_or(GateError::InvalidToken)?;

        // 0 = never expires
        if record.expires_at > 0 && record.expires_at < current_epoch() {
            return Err(GateError::TokenExpired);
        }
        Ok(record.identity.clone())
    }

    /// Drop the session behind `token`. Returns whether one existed.
    pub fn revoke_session(&self, token: &str) -> bool {
        let hash = hash_token(token);
        let removed = self.write().remove(&hash).is_some();
        if removed {
            debug!("session revoked");
        }
        removed
    }

    /// Drop every session bound to `user_id`. Returns how many went away.
    pub fn revoke_all_for(&self, user_id: &UserId) -> usize {
        let mut sessions = self.write();
        let before = sessions.len();
        sessions.retain(|_, r| &r.identity.user_id != user_id);
        let removed = before - sessions.len();
        if removed > 0 {
            info!(user = %user_id, removed, "all sessions revoked");
        }
        removed
    }

    /// Live (non-expired) sessions for `user_id`.
    pub fn sessions_for(&self, user_id: &UserId) -> Vec<SessionInfo> {
        let now = current_epoch();
        self.read()
            .values()
            .filter(|r| &r.identity.user_id == user_id)
            .filter(|r| r.expires_at == 0 || r.expires_at >= now)
            .map(|r| SessionInfo {
                user_id: r.identity.user_id.clone(),
                created_at: r.created_at,
                expires_at: r.expires_at,
            })
            .collect()
    }

    /// Drop every expired session. Returns how many were purged.
    pub fn purge_expired(&self) -> usize {
        let now = current_epoch();
        let mut sessions = self.write();
        let before = sessions.len();
        sessions.retain(|_, r| r.expires_at == 0 || r.expires_at >= now);
        let purged = before - sessions.len();
        if purged > 0 {
            debug!(purged, "expired sessions purged");
        }
        purged
    }

    /// Number of sessions currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_is_random() {
        let t1 = generate_token();
        let t2 = generate_token();
        assert_ne!(t1, t2);
        assert!(t1.len() >= 32); // At least 256 bits entropy
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = generate_token();
        // Base64url uses only alphanumeric, -, _
        assert!(token.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_base64url_known_vector() {
        // "Man" -> "TWFu" in any base64 variant
        assert_eq!(base64url_encode(b"Man"), "TWFu");
        assert_eq!(base64url_encode(b"Ma"), "TWE");
        assert_eq!(base64url_encode(b"M"), "TQ");
    }
}
