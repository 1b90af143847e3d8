//! `mymoodai-dashboard` -- terminal front-end for the MyMoodAI demo flows.
//!
//! Without arguments it prints every model on the account with its
//! avatars. `train <image-path>` first runs the training workflow with the
//! demo payload, then prints the dashboard. `styles` prints the style
//! catalog.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default                             | Description                         |
//! |---------------------|----------|-------------------------------------|-------------------------------------|
//! | `MYMOODAI_API_KEY`  | yes      | --                                  | Account key sent as a bearer token  |
//! | `MYMOODAI_BASE_URL` | no       | `https://api.mymoodai.app/rest/api` | API endpoint                        |

use std::path::Path;

use mymoodai_client::api::MyMoodAIClient;
use mymoodai_client::models::{CreateModelRequest, StyleId};
use mymoodai_dashboard::render;
use mymoodai_workflows::{browse, styles, training};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BASE_URL: &str = "https://api.mymoodai.app/rest/api";

/// Styles submitted by the demo training payload.
const DEMO_STYLES: &[StyleId] = &[112, 5, 2572, 1421, 2214, 947, 2570, 94, 356, 43];

/// Gender code submitted by the demo training payload.
const DEMO_GENDER: i32 = 1;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mymoodai_dashboard=info,mymoodai_workflows=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("MYMOODAI_API_KEY").unwrap_or_else(|_| {
        tracing::error!("MYMOODAI_API_KEY environment variable is required");
        std::process::exit(1);
    });

    let base_url =
        std::env::var("MYMOODAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    tracing::info!(base_url = %base_url, "Starting mymoodai-dashboard");

    let client = MyMoodAIClient::new(base_url, api_key);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => show_dashboard(&client).await,
        Some("train") => {
            let Some(image) = args.get(1) else {
                eprintln!("usage: mymoodai-dashboard train <image-path>");
                std::process::exit(2);
            };
            let trained = train(&client, Path::new(image)).await;
            // The demo page shows the dashboard below the training outcome
            // either way.
            show_dashboard(&client).await;
            if !trained {
                std::process::exit(1);
            }
        }
        Some("styles") => show_styles(&client).await,
        Some(other) => {
            eprintln!("unknown mode `{other}`; expected `train <image-path>` or `styles`");
            std::process::exit(2);
        }
    }
}

/// Print the dashboard page: every model with its avatars.
async fn show_dashboard(client: &MyMoodAIClient) {
    match browse::browse_models(client).await {
        Ok(cards) => print!("{}", render::dashboard(&cards)),
        Err(e) => {
            eprintln!("Error retrieving models: {e}");
            std::process::exit(1);
        }
    }
}

/// Run the training workflow with the demo payload; reports success.
async fn train(client: &MyMoodAIClient, image: &Path) -> bool {
    let request = CreateModelRequest {
        styles: DEMO_STYLES.to_vec(),
        gender: DEMO_GENDER,
        parent: 0,
    };

    match training::run_training(client, &request, image).await {
        Ok(order_id) => {
            println!("Model training started successfully for model ID: {order_id}");
            true
        }
        Err(e) => {
            eprintln!("Error: {e}");
            false
        }
    }
}

/// Print the style catalog page.
async fn show_styles(client: &MyMoodAIClient) {
    match styles::browse_styles(client).await {
        Ok(cards) => print!("{}", render::styles(&cards)),
        Err(e) => {
            eprintln!("Error fetching styles: {e}");
            std::process::exit(1);
        }
    }
}
