use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{HttpModelClient, ModelClient},
        quiz_generation_service::QuizGenerationService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<QuizGenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model_client: Arc<dyn ModelClient> = Arc::new(HttpModelClient::new(&config));
        Self::with_model_client(config, model_client)
    }

    /// Builds state around an arbitrary model backend.
    pub fn with_model_client(config: Config, model_client: Arc<dyn ModelClient>) -> Self {
        let generation_service = Arc::new(QuizGenerationService::new(model_client));

        Self {
            generation_service,
            config: Arc::new(config),
        }
    }
}
