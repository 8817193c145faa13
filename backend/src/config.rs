use crate::services::credentials::CredentialRotator;
use crate::services::trending_service::{ShortsOptions, DEFAULT_SHORTS_SAMPLE_SIZE};
use crate::services::youtube_client::YouTubeClient;
use crate::AppState;
use anyhow::Result;
use env_logger::{Builder, Env};
use lazy_static::lazy_static;
use log::{info, warn};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;
use std::time::Duration;

lazy_static! {
    /// Comma separated YouTube Data API keys, rotated per request
    pub static ref YOUTUBE_API_KEYS: String = env::var("YOUTUBE_API_KEYS")
        .or_else(|_| env::var("YOUTUBE_API_KEY"))
        .unwrap_or_default();
    pub static ref YOUTUBE_API_BASE_URL: String = env::var("YOUTUBE_API_BASE_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3/".to_string());
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
    pub static ref SHORTS_SAMPLE_SIZE: usize = env::var("SHORTS_SAMPLE_SIZE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_SHORTS_SAMPLE_SIZE);
    pub static ref UPSTREAM_TIMEOUT_SECS: u64 = env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(10);
}

pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_youtube_client() -> Result<YouTubeClient> {
    let base_url = &*YOUTUBE_API_BASE_URL;
    info!("Using YouTube Data API at: {base_url}");
    YouTubeClient::new(base_url, Duration::from_secs(*UPSTREAM_TIMEOUT_SECS))
}

pub fn create_app_state() -> Result<AppState> {
    let credentials = CredentialRotator::from_csv(&YOUTUBE_API_KEYS);
    if credentials.is_empty() {
        // Requests will answer 500 until a key is configured
        warn!("No YouTube API key configured (YOUTUBE_API_KEYS / YOUTUBE_API_KEY)");
    } else {
        info!("Loaded {} YouTube API key(s)", credentials.len());
    }

    let source = create_youtube_client()?;

    Ok(AppState {
        source: Arc::new(source),
        credentials,
        shorts: ShortsOptions {
            sample_size: *SHORTS_SAMPLE_SIZE,
        },
    })
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(false)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
