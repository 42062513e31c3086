//! Collision-avoiding short link allocation.

use std::sync::Arc;

use chrono::Utc;
use metrics::counter;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{MAX_TTL_SECONDS, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::domain::{Deadline, LinkError, StoreError};
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_target_url;

/// Allocates fresh short codes for target URLs.
///
/// Each attempt generates a candidate, checks it against the store and then
/// claims it with an atomic set-if-absent. A candidate that turns out to be
/// taken, either at the check or at the write, is a collision and costs one
/// attempt from the retry budget.
pub struct LinkAllocator<S: LinkStore + ?Sized> {
    store: Arc<S>,
    code_length: usize,
}

impl<S: LinkStore + ?Sized> LinkAllocator<S> {
    /// Creates an allocator that issues codes of `code_length` characters.
    pub fn new(store: Arc<S>, code_length: usize) -> Self {
        Self { store, code_length }
    }

    /// Shortens `target_url` into a new code that lives for `ttl_seconds`.
    ///
    /// `ttl_seconds` is taken as final: any default is applied by the caller.
    ///
    /// # Retry Policy
    ///
    /// - Generation failures and existence-check errors consume an attempt and
    ///   the loop continues
    /// - A lost conditional write counts as a collision
    /// - A conditional write that errors ends the allocation immediately
    /// - The deadline is checked before every attempt and bounds every store call
    ///
    /// # Errors
    ///
    /// - [`LinkError::Validation`] for a non-http(s) URL or a TTL outside
    ///   `1..=MAX_TTL_SECONDS`, before any store call
    /// - [`LinkError::CollisionExhausted`] when the budget ran out and at least
    ///   one collision was seen
    /// - [`LinkError::Storage`] when the write failed, the deadline passed, or
    ///   the budget ran out on store errors alone
    pub async fn shorten(
        &self,
        target_url: &str,
        ttl_seconds: u64,
        retry_budget: u32,
        deadline: Deadline,
    ) -> Result<ShortLink, LinkError> {
        validate_target_url(target_url).map_err(|e| LinkError::validation(e.to_string()))?;

        if ttl_seconds == 0 {
            return Err(LinkError::validation("TTL must be at least 1 second"));
        }

        if ttl_seconds > MAX_TTL_SECONDS {
            return Err(LinkError::validation(format!(
                "TTL must not exceed {} seconds",
                MAX_TTL_SECONDS
            )));
        }

        let mut collisions = 0u32;
        let mut last_store_error: Option<StoreError> = None;

        for attempt in 1..=retry_budget {
            if deadline.is_expired() {
                warn!(attempt, "Deadline reached before a free short code was found");
                return Err(record_failure(LinkError::Storage(StoreError::Timeout)));
            }

            let code = match generate_code(self.code_length) {
                Ok(code) => code,
                Err(e) => {
                    warn!(attempt, error = %e, "Short code generation failed");
                    continue;
                }
            };

            match deadline.run(self.store.exists(code.as_str())).await {
                Ok(false) => {}
                Ok(true) => {
                    collisions += 1;
                    counter!("shortlink_collisions_total").increment(1);
                    debug!(attempt, %code, "Short code already taken");
                    continue;
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Existence check failed");
                    last_store_error = Some(e);
                    continue;
                }
            }

            match deadline
                .run(
                    self.store
                        .set_if_absent(code.as_str(), target_url, ttl_seconds),
                )
                .await
            {
                Ok(true) => {
                    counter!("shortlink_allocations_total").increment(1);
                    info!(%code, ttl_seconds, attempt, "Short link created");
                    return Ok(ShortLink::new(
                        code,
                        target_url.to_string(),
                        ttl_seconds,
                        Utc::now(),
                    ));
                }
                Ok(false) => {
                    collisions += 1;
                    counter!("shortlink_collisions_total").increment(1);
                    debug!(attempt, %code, "Short code claimed concurrently");
                }
                Err(e) => {
                    error!(%code, error = %e, "Conditional write failed");
                    return Err(record_failure(LinkError::Storage(e)));
                }
            }
        }

        let err = match last_store_error {
            Some(e) if collisions == 0 => LinkError::Storage(e),
            _ => LinkError::CollisionExhausted {
                attempts: retry_budget,
            },
        };

        warn!(retry_budget, collisions, kind = err.kind(), "Short code allocation gave up");
        Err(record_failure(err))
    }
}

fn record_failure(err: LinkError) -> LinkError {
    counter!("shortlink_allocation_failures_total", "reason" => err.kind()).increment(1);
    err
}
