use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use carescribe::application::services::{AudioProcessingService, AuthService, NarrativeService};
use carescribe::infrastructure::audio::{HttpAudioFetcher, OpenAiWhisperEngine};
use carescribe::infrastructure::auth::{
    BcryptPasswordHasher, InMemoryCredentialStore, JwtTokenService,
};
use carescribe::infrastructure::llm::OpenAiChatClient;
use carescribe::infrastructure::observability::{TracingConfig, init_tracing};
use carescribe::infrastructure::persistence::{
    PgAudioRecordRepository, PgNarrativeRecordRepository, create_pool, run_migrations,
};
use carescribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig {
        environment: environment.to_string(),
        json_format: settings.logging.json_format,
        log_directory: settings.logging.directory.clone(),
    };
    let _log_guards = init_tracing(&tracing_config, settings.server.port);

    let hasher = Arc::new(BcryptPasswordHasher::default());
    let credentials = InMemoryCredentialStore::new(settings.auth.credentials(hasher.as_ref())?);
    if credentials.is_empty() {
        tracing::warn!("No users provisioned; every login will be rejected");
    } else {
        tracing::info!(users = credentials.len(), "Credential store loaded");
    }

    let auth_service = Arc::new(AuthService::new(
        Arc::new(credentials),
        hasher,
        Arc::new(JwtTokenService::new(&settings.auth.jwt_secret)),
        settings.auth.token_ttl(),
    ));

    let pool = create_pool(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.acquire_timeout(),
    )
    .await?;
    run_migrations(&pool).await?;

    let openai = &settings.openai;
    let transcriber = Arc::new(OpenAiWhisperEngine::new(
        openai.api_key.clone(),
        openai.base_url.clone(),
        Some(openai.transcription_model.clone()),
        openai.request_timeout(),
    )?);
    let llm_client = Arc::new(OpenAiChatClient::new(
        openai.api_key.clone(),
        openai.base_url.clone(),
        openai.chat_model.clone(),
        openai.request_timeout(),
    )?);
    let fetcher = Arc::new(HttpAudioFetcher::new(
        settings.audio.staging_dir.clone(),
        settings.audio.fetch_timeout(),
    )?);

    if !settings.audio.fallback_audio_path.exists() {
        tracing::warn!(
            path = %settings.audio.fallback_audio_path.display(),
            "Fallback audio asset missing; failed downloads will be rejected"
        );
    }

    let audio_service = Arc::new(AudioProcessingService::new(
        fetcher,
        transcriber,
        llm_client.clone(),
        Arc::new(PgAudioRecordRepository::new(pool.clone())),
        settings.audio.fallback_audio_path.clone(),
    ));
    let narrative_service = Arc::new(NarrativeService::new(
        llm_client,
        Arc::new(PgNarrativeRecordRepository::new(pool)),
    ));

    let state = AppState {
        auth_service,
        audio_service,
        narrative_service,
    };

    let router = create_router(state);

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server.host: {}", settings.server.host))?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
