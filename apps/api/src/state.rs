use std::sync::Arc;

use crate::composer::{Composer, GenerationDesk};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Strategy, redaction mode and rng are fixed at startup from config.
    pub composer: Arc<Composer>,
    pub desk: Arc<GenerationDesk>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let composer = Composer::new(
            config.strategy.build(),
            config.redaction,
            config.composer_seed,
        );
        let desk = GenerationDesk::new(config.generation_delay);

        Self {
            composer: Arc::new(composer),
            desk: Arc::new(desk),
        }
    }
}
