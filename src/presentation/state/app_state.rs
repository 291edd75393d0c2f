use std::sync::Arc;

use crate::application::services::{AudioProcessingService, AuthService, NarrativeService};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub audio_service: Arc<AudioProcessingService>,
    pub narrative_service: Arc<NarrativeService>,
}
