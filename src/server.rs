use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{error, info};

use crate::config::Config;
use crate::controllers::{modes_controller, static_controller, system_controller, translate_controller};
use crate::error::{Result, TranslatorError};
use crate::translate::TranslationDispatcher;

pub struct AppState {
    pub dispatcher: Arc<TranslationDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: TranslationDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Malformed or non-JSON bodies are client errors carrying the extractor's reason
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {}", err);
        TranslatorError::InvalidInput(format!("Invalid request body: {}", err)).into()
    })
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api")
                .configure(modes_controller::config)
                .configure(translate_controller::config)
                .configure(system_controller::config),
        )
        .configure(static_controller::config);
}

pub async fn run(config: Config) -> Result<()> {
    let dispatcher = TranslationDispatcher::from_config(&config)?;
    let app_state = web::Data::new(AppState::new(dispatcher));

    if config.translate.api_key.is_empty() {
        info!("No primary API key configured; translations will fail with AuthError until one is set");
    }

    let host = config.server.host.clone();
    let port = config.server.port;

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(app_config)
    });
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind((host.as_str(), port))
        .map_err(|e| TranslatorError::Config(format!("Failed to bind {}:{}: {}", host, port, e)))?
        .run();

    info!("Translation server listening on http://{}:{}", host, port);

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(TranslatorError::Io(e));
    }

    info!("Translation server stopped");
    Ok(())
}
