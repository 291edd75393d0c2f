pub const FALLBACK_AUDIO_LABEL: &str = "default_audio";

/// Where the transcribed audio actually came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    Remote(String),
    Fallback,
}

impl AudioSource {
    /// Value stored in `audio_link`: the original link, or a marker for the fallback asset.
    pub fn label(&self) -> &str {
        match self {
            AudioSource::Remote(link) => link,
            AudioSource::Fallback => FALLBACK_AUDIO_LABEL,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AudioSource::Fallback)
    }
}
