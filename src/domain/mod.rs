mod access_token;
mod audio_processing_record;
mod audio_source;
mod narrative_record;
mod process_id;
mod record_status;
mod user;

pub use access_token::{AccessToken, TOKEN_TYPE_BEARER};
pub use audio_processing_record::{AudioProcessingRecord, NewAudioProcessingRecord};
pub use audio_source::{AudioSource, FALLBACK_AUDIO_LABEL};
pub use narrative_record::{NarrativeRecord, NewNarrativeRecord};
pub use process_id::ProcessId;
pub use record_status::RecordStatus;
pub use user::{Credential, User};
