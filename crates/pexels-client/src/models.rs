// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// A single photo from the Pexels catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    /// Pexels photo ID.
    pub id: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Photo page on pexels.com.
    pub url: String,
    /// Photographer name.
    pub photographer: String,
    /// Photographer profile page.
    pub photographer_url: String,
    /// Photographer ID (not present on older payloads).
    #[serde(default)]
    pub photographer_id: Option<u64>,
    /// Average color as a hex string (e.g. "#978E82").
    #[serde(default)]
    pub avg_color: Option<String>,
    /// Rendition URLs.
    pub src: PhotoSource,
    /// Alt text describing the photo.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Named image renditions of a photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoSource {
    pub original: String,
    pub large: String,
    pub large2x: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub square: String,
    pub landscape: String,
    pub tiny: String,
}

/// Photo search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoResult {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u32,
    /// Cursor URL for the next page; absent on the last page.
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Curated photo listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CuratedResult {
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// A single video from the Pexels catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    /// Pexels video ID.
    pub id: u64,
    pub width: u32,
    pub height: u32,
    /// Video page on pexels.com.
    pub url: String,
    /// Screenshot of the video.
    pub image: String,
    /// Duration in seconds.
    pub duration: f64,
    /// Undocumented field; kept as raw JSON.
    #[serde(default)]
    pub full_res: Option<serde_json::Value>,
    /// Uploader of the video.
    #[serde(default)]
    pub user: Option<VideoUser>,
    #[serde(default)]
    pub video_files: Vec<VideoFile>,
    #[serde(default)]
    pub video_pictures: Vec<VideoPicture>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoUser {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// A downloadable rendition of a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoFile {
    pub id: u64,
    /// Quality label ("hd", "sd", "uhd"); null for streaming playlists.
    #[serde(default)]
    pub quality: Option<String>,
    /// MIME type, e.g. "video/mp4".
    pub file_type: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    /// Direct link to the file.
    pub link: String,
}

/// Preview image taken from a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    /// Position of the picture in the preview sequence.
    pub nr: u32,
}

/// Video search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoSearchResult {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u32,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// Popular video listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopularVideosResult {
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub total_results: u32,
    /// Request URL echoed by the service.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        }
    }
}

/// Minimum size filter. For photos: large = 24MP, medium = 12MP, small = 4MP.
/// For videos: large = 4K, medium = Full HD, small = HD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSize {
    Large,
    Medium,
    Small,
}

impl MediaSize {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaSize::Large => "large",
            MediaSize::Medium => "medium",
            MediaSize::Small => "small",
        }
    }
}

/// Search query parameters shared by the photo and video search endpoints.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free-text search term.
    pub query: String,
    /// Results per page (API default 15, max 80).
    pub per_page: u32,
    /// 1-based page number.
    pub page: u32,
    pub orientation: Option<Orientation>,
    pub size: Option<MediaSize>,
    /// Search locale, e.g. "en-US".
    pub locale: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            per_page: 15,
            page: 1,
            orientation: None,
            size: None,
            locale: None,
        }
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn size(mut self, size: MediaSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_photo() -> Photo {
        Photo {
            id: 3573351,
            width: 3066,
            height: 3968,
            url: "https://www.pexels.com/photo/trees-during-day-3573351/".to_string(),
            photographer: "Lukas Rodriguez".to_string(),
            photographer_url: "https://www.pexels.com/@lukas-rodriguez-1845331".to_string(),
            photographer_id: Some(1845331),
            avg_color: Some("#374824".to_string()),
            src: PhotoSource {
                original: "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png"
                    .to_string(),
                large: "https://images.pexels.com/photos/3573351/large.png".to_string(),
                large2x: "https://images.pexels.com/photos/3573351/large2x.png".to_string(),
                medium: "https://images.pexels.com/photos/3573351/medium.png".to_string(),
                small: "https://images.pexels.com/photos/3573351/small.png".to_string(),
                portrait: "https://images.pexels.com/photos/3573351/portrait.png".to_string(),
                square: "https://images.pexels.com/photos/3573351/square.png".to_string(),
                landscape: "https://images.pexels.com/photos/3573351/landscape.png".to_string(),
                tiny: "https://images.pexels.com/photos/3573351/tiny.png".to_string(),
            },
            alt: Some("Brown Rocks During Golden Hour".to_string()),
        }
    }

    #[test]
    fn test_photo_json_round_trip() {
        let photo = sample_photo();
        let encoded = serde_json::to_value(&photo).unwrap();

        assert_eq!(encoded["photographer_url"], photo.photographer_url);
        for rendition in [
            "original",
            "large",
            "large2x",
            "medium",
            "small",
            "portrait",
            "square",
            "landscape",
            "tiny",
        ] {
            assert!(
                encoded["src"][rendition].is_string(),
                "missing rendition {rendition}"
            );
        }

        let decoded: Photo = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, photo);
    }

    #[test]
    fn test_photo_decodes_without_optional_fields() {
        let photo: Photo = serde_json::from_value(json!({
            "id": 1,
            "width": 10,
            "height": 20,
            "url": "u",
            "photographer": "p",
            "photographer_url": "pu",
            "src": {
                "original": "o", "large": "l", "large2x": "l2", "medium": "m",
                "small": "s", "portrait": "p", "square": "sq",
                "landscape": "ls", "tiny": "t"
            }
        }))
        .unwrap();

        assert_eq!(photo.id, 1);
        assert_eq!(photo.photographer_id, None);
        assert_eq!(photo.src.large2x, "l2");
    }

    #[test]
    fn test_missing_photo_list_decodes_empty() {
        let result: CuratedResult = serde_json::from_value(json!({
            "page": 4,
            "per_page": 1
        }))
        .unwrap();

        assert!(result.photos.is_empty());
        assert_eq!(result.next_page, None);
    }

    #[test]
    fn test_video_keeps_full_res_opaque() {
        let video: Video = serde_json::from_value(json!({
            "id": 2499611,
            "width": 1080,
            "height": 1920,
            "url": "https://www.pexels.com/video/2499611/",
            "image": "https://images.pexels.com/videos/2499611/free-video-2499611.jpg",
            "full_res": {"anything": [1, 2, 3]},
            "duration": 22,
            "user": {"id": 680589, "name": "Joey", "url": "https://www.pexels.com/@joey"},
            "video_files": [{
                "id": 125004,
                "quality": null,
                "file_type": "video/mp4",
                "width": null,
                "height": null,
                "link": "https://player.vimeo.com/external/342571552.hls"
            }],
            "video_pictures": [{"id": 308178, "picture": "https://static-videos.pexels.com/0.jpg", "nr": 0}]
        }))
        .unwrap();

        assert_eq!(video.duration, 22.0);
        assert_eq!(video.full_res, Some(json!({"anything": [1, 2, 3]})));
        assert_eq!(video.video_files[0].quality, None);
        assert_eq!(video.video_files[0].width, None);
        assert_eq!(video.video_pictures[0].nr, 0);
        assert_eq!(video.user.as_ref().map(|u| u.id), Some(680589));
    }

    #[test]
    fn test_search_query_defaults_and_builders() {
        let query = SearchQuery::new("ocean waves")
            .per_page(40)
            .page(3)
            .orientation(Orientation::Portrait)
            .size(MediaSize::Small)
            .locale("de-DE");

        assert_eq!(query.query, "ocean waves");
        assert_eq!(query.per_page, 40);
        assert_eq!(query.page, 3);
        assert_eq!(query.orientation.map(Orientation::as_str), Some("portrait"));
        assert_eq!(query.size.map(MediaSize::as_str), Some("small"));
        assert_eq!(query.locale.as_deref(), Some("de-DE"));

        let default = SearchQuery::new("x");
        assert_eq!((default.per_page, default.page), (15, 1));
    }
}
