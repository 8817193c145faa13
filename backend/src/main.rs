mod api;
mod config;
mod models;
mod services;
mod utils;

use crate::config::{create_app_state, create_cors, init_logger, load_environment};
use crate::services::credentials::CredentialRotator;
use crate::services::trending_service::ShortsOptions;
use crate::services::youtube_client::VideoSource;
use log::error;
use rocket::{routes, Build, Rocket};
use std::sync::Arc;

pub struct AppState {
    pub source: Arc<dyn VideoSource>,
    pub credentials: CredentialRotator,
    pub shorts: ShortsOptions,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![api::health_check])
        .mount("/api", routes![api::trending_videos])
}

#[rocket::main]
async fn main() {
    load_environment();
    init_logger();

    let state = match create_app_state() {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialise application state: {e:?}");
            std::process::exit(1);
        }
    };
    let cors = match create_cors() {
        Ok(cors) => cors,
        Err(e) => {
            error!("{e:?}");
            std::process::exit(1);
        }
    };

    if let Err(e) = build_rocket(state).attach(cors).launch().await {
        error!("Rocket failed: {e}");
        std::process::exit(1);
    }
}
