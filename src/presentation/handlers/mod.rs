mod audio;
mod health;
mod narrative;
mod token;
mod users;

pub use audio::{AudioProcessingInput, AudioProcessingOutput, process_audio_handler};
pub use health::health_handler;
pub use narrative::{NarrativeInput, NarrativeOutput, combine_narrative_handler};
pub use token::{LoginForm, token_handler};
pub use users::read_users_me_handler;
