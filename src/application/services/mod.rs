mod audio_processing_service;
mod auth_service;
mod narrative_service;
mod pipeline_error;
pub mod prompts;
mod text_preview;

pub use audio_processing_service::{AudioProcessingRequest, AudioProcessingService};
pub use auth_service::{AuthError, AuthService, DEFAULT_TOKEN_TTL};
pub use narrative_service::{ENTRY_SEPARATOR, NarrativeRequest, NarrativeService, join_entries};
pub use pipeline_error::{ExternalError, PipelineError};
pub use text_preview::preview_text;
