//! Short link entity returned by a successful allocation.

use super::ShortCode;
use chrono::{DateTime, Duration, Utc};

/// Longest lifetime a link may be given: ten years.
///
/// Keeps `SET ... EX` within what Redis accepts and makes both stores expire
/// the same records.
pub const MAX_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// A freshly allocated `code → URL` mapping.
///
/// The store owns the expiration clock. `expires_at` is the wall-clock time the
/// record is expected to disappear, computed at allocation.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: ShortCode,
    pub target_url: String,
    pub ttl_seconds: u64,
    pub expires_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a link that expires `ttl_seconds` after `created_at`.
    pub fn new(
        code: ShortCode,
        target_url: String,
        ttl_seconds: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        let expires_at = Duration::try_seconds(ttl)
            .and_then(|d| created_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            code,
            target_url,
            ttl_seconds,
            expires_at,
        }
    }
}
