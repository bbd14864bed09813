// SPDX-License-Identifier: GPL-3.0-or-later

//! Pexels API client for searching and fetching photos and videos.
//!
//! This crate provides a client for the Pexels photo and video catalogs,
//! including search, curated/popular listings, single-item lookups and
//! "random item" helpers, and tracks the request quota the API reports on
//! every response.

pub mod client;
pub mod error;
pub mod models;
pub mod quota;
pub mod random;

pub use client::{PexelsClient, PexelsClientBuilder};
pub use error::{ErrorKind, PexelsError, Result};
pub use models::{
    CuratedResult, MediaSize, Orientation, Photo, PhotoResult, PhotoSource, PopularVideosResult,
    SearchQuery, Video, VideoFile, VideoPicture, VideoSearchResult, VideoUser,
};
pub use quota::QuotaSnapshot;
pub use random::{ClockSeededSampler, PageSampler};
