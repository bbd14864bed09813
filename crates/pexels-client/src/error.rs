// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PexelsError>;

#[derive(Debug, Error)]
pub enum PexelsError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response from Pexels API: {0}")]
    InvalidResponse(String),

    /// A random pick landed on a page that did not hold exactly one item.
    #[error("No single result on sampled page {page} (got {count} items)")]
    NoResult { page: u32, count: usize },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API token is not a valid header value")]
    InvalidToken,
}

/// Coarse failure families callers usually branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request did not complete or the service answered with a non-2xx status.
    Transport,
    /// The body was not JSON matching the expected schema.
    Decode,
    /// A random pick found zero or several items on the sampled page.
    NoResult,
    /// The client was built with an unusable token or base URL.
    Config,
}

impl PexelsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PexelsError::RequestFailed(e) if e.is_decode() => ErrorKind::Decode,
            PexelsError::RequestFailed(_)
            | PexelsError::NotFound(_)
            | PexelsError::RateLimitExceeded
            | PexelsError::ApiError { .. } => ErrorKind::Transport,
            PexelsError::InvalidResponse(_) => ErrorKind::Decode,
            PexelsError::NoResult { .. } => ErrorKind::NoResult,
            PexelsError::InvalidUrl(_) | PexelsError::InvalidToken => ErrorKind::Config,
        }
    }

    /// HTTP status reported by the service, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PexelsError::NotFound(_) => Some(404),
            PexelsError::RateLimitExceeded => Some(429),
            PexelsError::ApiError { status, .. } => Some(*status),
            PexelsError::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
