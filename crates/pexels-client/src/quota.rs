// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU32, Ordering};
use std::sync::Arc;

pub const LIMIT_HEADER: &str = "x-ratelimit-limit";
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate-limit state reported by the Pexels API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuotaSnapshot {
    /// Total requests allowed in the current window.
    pub limit: Option<u32>,
    /// Requests left in the current window. Zero until a response carried the header.
    pub remaining: u32,
    /// When the current window resets.
    pub reset: Option<DateTime<Utc>>,
}

/// Tracks the last rate-limit values seen on responses.
///
/// Each header is applied independently: a missing or unparseable header
/// leaves its previous value in place. Concurrent writers race and the last
/// one wins, which matches the "most recent response" semantics of the headers.
#[derive(Debug, Clone, Default)]
pub struct QuotaTracker {
    inner: Arc<QuotaState>,
}

#[derive(Debug, Default)]
struct QuotaState {
    remaining: AtomicU32,
    limit: AtomicU32,
    has_limit: AtomicBool,
    reset: AtomicI64,
    has_reset: AtomicBool,
}

impl QuotaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from response headers. Returns true when a remaining count was recorded.
    pub fn observe(&self, headers: &HeaderMap) -> bool {
        if let Some(limit) = header_number::<u32>(headers, LIMIT_HEADER) {
            self.inner.limit.store(limit, Ordering::Relaxed);
            self.inner.has_limit.store(true, Ordering::Release);
        }

        if let Some(reset) = header_number::<i64>(headers, RESET_HEADER) {
            if DateTime::from_timestamp(reset, 0).is_some() {
                self.inner.reset.store(reset, Ordering::Relaxed);
                self.inner.has_reset.store(true, Ordering::Release);
            }
        }

        match header_number::<u32>(headers, REMAINING_HEADER) {
            Some(remaining) => {
                self.inner.remaining.store(remaining, Ordering::Relaxed);
                true
            }
            None => {
                tracing::trace!(target: "pexels", "no usable {} header", REMAINING_HEADER);
                false
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        self.inner.remaining.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> QuotaSnapshot {
        let limit = self
            .inner
            .has_limit
            .load(Ordering::Acquire)
            .then(|| self.inner.limit.load(Ordering::Relaxed));
        let reset = if self.inner.has_reset.load(Ordering::Acquire) {
            DateTime::from_timestamp(self.inner.reset.load(Ordering::Relaxed), 0)
        } else {
            None
        };

        QuotaSnapshot {
            limit,
            remaining: self.remaining(),
            reset,
        }
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse::<T>().ok()
}
