mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, AuthSettings, DatabaseSettings, LoggingSettings, OpenAiSettings,
    ServerSettings, Settings, SettingsError, UserSettings,
};
