// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pexels_client::PexelsClient;
use pexels_config::{load as load_config, ApiConfig};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Search and fetch photos and videos from Pexels.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(long, env = "PEXELS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Search photos by keyword.
    SearchPhotos {
        query: String,
        #[arg(long, default_value_t = 15)]
        per_page: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List curated photos.
    Curated {
        #[arg(long, default_value_t = 15)]
        per_page: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Fetch a photo by ID.
    Photo { id: u64 },
    /// Fetch a photo from a random curated page.
    RandomPhoto,
    /// Search videos by keyword.
    SearchVideos {
        query: String,
        #[arg(long, default_value_t = 15)]
        per_page: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List popular videos.
    PopularVideos {
        #[arg(long, default_value_t = 15)]
        per_page: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Fetch a video by ID.
    Video { id: u64 },
    /// Fetch a video from a random popular page.
    RandomVideo,
    /// Make a cheap request and report the rate-limit quota.
    Quota,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    init_tracing(&config.telemetry.log_level);

    let client = build_client(&config.api)?;
    run(&client, args.command).await?;

    let quota = client.quota();
    info!(target: "cli", remaining = quota.remaining, limit = ?quota.limit, "request complete");
    println!("Remaining requests: {}", quota.remaining);
    if let Some(reset) = quota.reset {
        println!("Quota resets at: {}", reset.to_rfc3339());
    }

    Ok(())
}

async fn run(client: &PexelsClient, command: Command) -> Result<()> {
    match command {
        Command::SearchPhotos {
            query,
            per_page,
            page,
        } => print_json(&client.search_photos(&query, per_page, page).await?),
        Command::Curated { per_page, page } => {
            print_json(&client.curated_photos(per_page, page).await?)
        }
        Command::Photo { id } => print_json(&client.get_photo(id).await?),
        Command::RandomPhoto => print_json(&client.get_random_photo().await?),
        Command::SearchVideos {
            query,
            per_page,
            page,
        } => print_json(&client.search_videos(&query, per_page, page).await?),
        Command::PopularVideos { per_page, page } => {
            print_json(&client.popular_videos(per_page, page).await?)
        }
        Command::Video { id } => print_json(&client.get_video(id).await?),
        Command::RandomVideo => print_json(&client.get_random_video().await?),
        Command::Quota => {
            client.curated_photos(1, 1).await?;
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn build_client(api: &ApiConfig) -> Result<PexelsClient> {
    let mut builder = PexelsClient::builder(api.require_token()?)
        .photo_base_url(&api.photo_base_url)
        .video_base_url(&api.video_base_url)
        .timeout(api.timeout());

    if let Some(user_agent) = &api.user_agent {
        builder = builder.user_agent(user_agent);
    }

    Ok(builder.build()?)
}

fn init_tracing(default_level: &str) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_photos() {
        let args = Args::try_parse_from([
            "pexels",
            "search-photos",
            "ocean waves",
            "--per-page",
            "5",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Command::SearchPhotos {
                query: "ocean waves".to_string(),
                per_page: 5,
                page: 2,
            }
        );
    }

    #[test]
    fn test_parse_defaults_and_ids() {
        let args = Args::try_parse_from(["pexels", "popular-videos"]).unwrap();
        assert_eq!(
            args.command,
            Command::PopularVideos {
                per_page: 15,
                page: 1
            }
        );

        let args = Args::try_parse_from(["pexels", "photo", "3573351"]).unwrap();
        assert_eq!(args.command, Command::Photo { id: 3573351 });

        assert!(Args::try_parse_from(["pexels", "photo", "abc"]).is_err());
    }

    #[test]
    fn test_build_client_requires_token() {
        let api = ApiConfig::default();
        assert!(build_client(&api).is_err());

        let api = ApiConfig {
            token: Some("secret".to_string()),
            user_agent: Some("pexels-cli-test".to_string()),
            ..ApiConfig::default()
        };
        let client = build_client(&api).unwrap();
        assert_eq!(client.remaining_quota(), 0);
    }
}
