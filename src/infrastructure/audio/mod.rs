mod http_audio_fetcher;
mod openai_whisper_engine;

pub use http_audio_fetcher::HttpAudioFetcher;
pub use openai_whisper_engine::{DEFAULT_OPENAI_BASE_URL, OpenAiWhisperEngine};
