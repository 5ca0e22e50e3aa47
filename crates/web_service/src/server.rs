use std::sync::Arc;

use actix_web::{http::header, middleware::DefaultHeaders, web, App, HttpServer};
use ai_gateway::{AiGateway, GatewayClient, GatewayConfig};
use log::{error, info, warn};

use crate::controllers::{system_controller, thumbnail_controller, title_controller};
use crate::error::AppError;
use crate::middleware::TracingMiddleware;
use crate::services::GenerationService;

pub const FUNCTIONS_SCOPE: &str = "/functions/v1";
pub const CORS_ALLOWED_HEADERS: [&str; 4] =
    ["authorization", "x-client-info", "apikey", "content-type"];

const DEFAULT_WORKER_COUNT: usize = 10;

pub struct AppState {
    pub generation: GenerationService,
}

impl AppState {
    pub fn new(gateway: Arc<dyn AiGateway>, config: &GatewayConfig) -> Self {
        Self {
            generation: GenerationService::from_config(gateway, config),
        }
    }

    /// Wire a reqwest-backed gateway client for `config`.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(Arc::new(GatewayClient::new(config.clone())), config)
    }
}

/// Permissive CORS headers for any origin, added to every response in the scope.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            CORS_ALLOWED_HEADERS.join(", "),
        ))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::InvalidRequestBody(err.to_string()).into())
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(FUNCTIONS_SCOPE)
            .app_data(json_config())
            .configure(title_controller::config)
            .configure(thumbnail_controller::config)
            .configure(system_controller::config)
            .wrap(cors_headers())
            .wrap(TracingMiddleware),
    );
}

pub async fn run(config: GatewayConfig, host: &str, port: u16) -> Result<(), String> {
    info!("Starting web service...");

    if config.api_key().is_none() {
        warn!("AI gateway API key is not set; generation requests will fail until it is configured");
    }

    let app_state = web::Data::new(AppState::from_config(&config));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind((host, port))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Starting web service on http://{host}:{port}{FUNCTIONS_SCOPE}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
