// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{PexelsError, Result};
use crate::models::{
    CuratedResult, Photo, PhotoResult, PopularVideosResult, SearchQuery, Video,
    VideoSearchResult,
};
use crate::quota::{QuotaSnapshot, QuotaTracker};
use crate::random::{ClockSeededSampler, PageSampler, MAX_RANDOM_PAGE};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace};
use url::Url;

pub const PHOTO_API_BASE: &str = "https://api.pexels.com/v1";
pub const VIDEO_API_BASE: &str = "https://api.pexels.com/videos";
const USER_AGENT: &str = concat!("pexels-client/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pexels API client for the photo and video catalogs.
///
/// Cloning is cheap; clones share the HTTP connection pool and the quota tracker.
#[derive(Debug, Clone)]
pub struct PexelsClient {
    client: Client,
    token: HeaderValue,
    photo_base_url: String,
    video_base_url: String,
    quota: QuotaTracker,
    sampler: Arc<dyn PageSampler>,
}

impl PexelsClient {
    /// Create a client with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder(token: impl Into<String>) -> PexelsClientBuilder {
        PexelsClientBuilder::new(token)
    }

    /// Search photos by keyword.
    ///
    /// `per_page` and `page` are sent as given; the API owns range validation.
    ///
    /// # Example
    /// ```no_run
    /// # use pexels_client::PexelsClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = PexelsClient::new("your-api-key")?;
    /// let result = client.search_photos("waves", 15, 1).await?;
    /// println!("{} photos", result.total_results);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<PhotoResult> {
        self.search_photos_with(SearchQuery::new(query).per_page(per_page).page(page))
            .await
    }

    /// Search photos with orientation, size or locale filters.
    #[instrument(skip(self, query), fields(query = %query.query))]
    pub async fn search_photos_with(&self, query: SearchQuery) -> Result<PhotoResult> {
        let mut url = endpoint(&self.photo_base_url, "/search")?;
        append_search_params(&mut url, &query);
        self.get(url).await
    }

    /// Fetch a page of editorially curated photos.
    #[instrument(skip(self))]
    pub async fn curated_photos(&self, per_page: u32, page: u32) -> Result<CuratedResult> {
        let mut url = endpoint(&self.photo_base_url, "/curated")?;
        append_paging(&mut url, per_page, page);
        self.get(url).await
    }

    /// Look up a single photo by ID.
    ///
    /// # Example
    /// ```no_run
    /// # use pexels_client::PexelsClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = PexelsClient::new("your-api-key")?;
    /// let photo = client.get_photo(3573351).await?;
    /// println!("{} by {}", photo.src.original, photo.photographer);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn get_photo(&self, id: u64) -> Result<Photo> {
        let url = endpoint(&self.photo_base_url, &format!("/photos/{}", id))?;
        self.get(url).await
    }

    /// Pick a photo from a random page of the curated listing.
    ///
    /// Fails with [`PexelsError::NoResult`] unless the sampled page holds exactly one photo.
    #[instrument(skip(self))]
    pub async fn get_random_photo(&self) -> Result<Photo> {
        let page = self.sampler.sample_page(MAX_RANDOM_PAGE);
        debug!(target: "pexels", page, "sampled curated page");
        let result = self.curated_photos(1, page).await?;
        single_item(result.photos, page)
    }

    /// Search videos by keyword.
    pub async fn search_videos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<VideoSearchResult> {
        self.search_videos_with(SearchQuery::new(query).per_page(per_page).page(page))
            .await
    }

    /// Search videos with orientation, size or locale filters.
    #[instrument(skip(self, query), fields(query = %query.query))]
    pub async fn search_videos_with(&self, query: SearchQuery) -> Result<VideoSearchResult> {
        let mut url = endpoint(&self.video_base_url, "/search")?;
        append_search_params(&mut url, &query);
        self.get(url).await
    }

    /// Fetch a page of popular videos.
    #[instrument(skip(self))]
    pub async fn popular_videos(&self, per_page: u32, page: u32) -> Result<PopularVideosResult> {
        let mut url = endpoint(&self.video_base_url, "/popular")?;
        append_paging(&mut url, per_page, page);
        self.get(url).await
    }

    /// Look up a single video by ID.
    #[instrument(skip(self))]
    pub async fn get_video(&self, id: u64) -> Result<Video> {
        let url = endpoint(&self.video_base_url, &format!("/videos/{}", id))?;
        self.get(url).await
    }

    /// Pick a video from a random page of the popular listing.
    #[instrument(skip(self))]
    pub async fn get_random_video(&self) -> Result<Video> {
        let page = self.sampler.sample_page(MAX_RANDOM_PAGE);
        debug!(target: "pexels", page, "sampled popular page");
        let result = self.popular_videos(1, page).await?;
        single_item(result.videos, page)
    }

    /// Remaining requests in the current rate-limit window, as of the last response.
    pub fn remaining_quota(&self) -> u32 {
        self.quota.remaining()
    }

    /// Full rate-limit state from the last responses.
    pub fn quota(&self) -> QuotaSnapshot {
        self.quota.snapshot()
    }

    /// Authenticated GET. Rate-limit headers are read before the status is
    /// checked so failed calls still update the quota.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        trace!(target: "pexels", "GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, self.token.clone())
            .send()
            .await?;

        self.quota.observe(response.headers());

        let status = response.status();
        debug!(
            target: "pexels",
            "response status: {}, remaining quota: {}",
            status,
            self.quota.remaining()
        );

        if status == StatusCode::NOT_FOUND {
            return Err(PexelsError::NotFound(url.to_string()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(PexelsError::RateLimitExceeded);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PexelsError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        trace!(target: "pexels", "response body: {}", body);

        serde_json::from_str(&body).map_err(|e| {
            PexelsError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }
}

fn endpoint(base: &str, path: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{}{}", base, path))?)
}

fn append_paging(url: &mut Url, per_page: u32, page: u32) {
    url.query_pairs_mut()
        .append_pair("per_page", &per_page.to_string())
        .append_pair("page", &page.to_string());
}

fn append_search_params(url: &mut Url, query: &SearchQuery) {
    url.query_pairs_mut().append_pair("query", &query.query);
    append_paging(url, query.per_page, query.page);

    if let Some(orientation) = query.orientation {
        url.query_pairs_mut()
            .append_pair("orientation", orientation.as_str());
    }

    if let Some(size) = query.size {
        url.query_pairs_mut().append_pair("size", size.as_str());
    }

    if let Some(locale) = &query.locale {
        url.query_pairs_mut().append_pair("locale", locale);
    }
}

fn single_item<T>(items: Vec<T>, page: u32) -> Result<T> {
    let count = items.len();
    <[T; 1]>::try_from(items)
        .map(|[item]| item)
        .map_err(|_| PexelsError::NoResult { page, count })
}

/// Builder for configuring a Pexels client.
#[derive(Debug)]
pub struct PexelsClientBuilder {
    token: String,
    photo_base_url: String,
    video_base_url: String,
    timeout: Duration,
    user_agent: String,
    sampler: Option<Arc<dyn PageSampler>>,
}

impl PexelsClientBuilder {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            photo_base_url: PHOTO_API_BASE.to_string(),
            video_base_url: VIDEO_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
            sampler: None,
        }
    }

    /// Set the photo catalog base URL (useful for testing with mock servers).
    pub fn photo_base_url(mut self, url: impl Into<String>) -> Self {
        self.photo_base_url = url.into();
        self
    }

    /// Set the video catalog base URL (useful for testing with mock servers).
    pub fn video_base_url(mut self, url: impl Into<String>) -> Self {
        self.video_base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replace the page source used by the random helpers.
    pub fn page_sampler(mut self, sampler: Arc<dyn PageSampler>) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Build the Pexels client.
    pub fn build(self) -> Result<PexelsClient> {
        let mut token =
            HeaderValue::from_str(self.token.trim()).map_err(|_| PexelsError::InvalidToken)?;
        token.set_sensitive(true);

        let photo_base_url = normalize_base(&self.photo_base_url)?;
        let video_base_url = normalize_base(&self.video_base_url)?;

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;

        let sampler = self
            .sampler
            .unwrap_or_else(|| Arc::new(ClockSeededSampler::new()));

        Ok(PexelsClient {
            client,
            token,
            photo_base_url,
            video_base_url,
            quota: QuotaTracker::new(),
            sampler,
        })
    }
}

fn normalize_base(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/');
    Url::parse(trimmed)?;
    Ok(trimmed.to_string())
}
