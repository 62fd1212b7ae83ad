use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use amora_ai::config::Settings;
use amora_ai::core::AiEngine;
use amora_ai::routes::chat::GatewayState;
use amora_ai::routes::{self, AppState};
use amora_ai::services::{
    AzureOpenAiClient, BridgeTransport, GenerationTransport, HttpTransport, ProfileStore,
};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Amora AI generation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the Azure OpenAI client when endpoint + credential are
    // present; the gateway runs degraded (fixed 500) without them.
    let azure = match (settings.azure.endpoint.clone(), settings.azure.api_key.clone()) {
        (Some(endpoint), Some(api_key)) => {
            let client = AzureOpenAiClient::new(
                endpoint,
                api_key,
                settings.azure.api_version.clone(),
                settings.azure.default_deployment.clone(),
                settings.azure.temperature,
            );
            info!(
                "Azure OpenAI client initialized (default deployment: {})",
                settings.azure.default_deployment
            );
            Some(Arc::new(client))
        }
        _ => {
            error!("Azure OpenAI endpoint/key not configured - gateway will reject all requests");
            None
        }
    };

    // Select the generation transport once at startup
    let transport: Arc<dyn GenerationTransport> = match settings.generation.transport.as_str() {
        "http" => {
            info!(
                "Using HTTP transport via gateway: {}",
                settings.generation.gateway_url
            );
            Arc::new(HttpTransport::new(settings.generation.gateway_url.clone()))
        }
        "bridge" => {
            let azure = azure.clone().unwrap_or_else(|| {
                error!("Bridge transport requires Azure OpenAI configuration");
                panic!("Configuration error: bridge transport without Azure OpenAI credentials");
            });
            info!("Using in-process bridge transport");
            Arc::new(BridgeTransport::new(azure))
        }
        other => {
            error!("Unknown transport '{}', expected 'bridge' or 'http'", other);
            panic!("Configuration error: unknown transport '{}'", other);
        }
    };

    let engine = Arc::new(AiEngine::new(
        transport,
        settings.azure.default_deployment.clone(),
        settings.generation.scoring_deployment.clone(),
    ));

    info!(
        "Generation engine initialized (scoring deployment: {})",
        settings.generation.scoring_deployment
    );

    // Initialize profile store
    let l1_size = settings.store.l1_cache_size.unwrap_or(1000);
    let l1_ttl = settings.store.l1_ttl_secs.unwrap_or(300);

    let store = match ProfileStore::new(&settings.store.redis_url, l1_size, l1_ttl).await {
        Ok(store) => {
            info!("Profile store initialized (L1: {} entries, TTL: {}s)", l1_size, l1_ttl);
            Arc::new(store)
        }
        Err(e) => {
            error!("Failed to connect to Redis ({})", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "Redis connection required"));
        }
    };

    // Build application state
    let app_state = AppState {
        engine,
        store,
    };
    let gateway_state = GatewayState { azure };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(gateway_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
