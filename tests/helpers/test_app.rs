use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use carescribe::application::ports::{AudioFetcher, PasswordHasher, TokenService};
use carescribe::application::services::{AudioProcessingService, AuthService, NarrativeService};
use carescribe::domain::Credential;
use carescribe::infrastructure::auth::{
    BcryptPasswordHasher, InMemoryCredentialStore, JwtTokenService,
};
use carescribe::presentation::{AppState, create_router};

use super::mocks::{
    BytesFetcher, FailingFetcher, InMemoryAudioRecords, InMemoryNarrativeRecords,
    RecordingLlmClient, StubTranscriber,
};

pub const TEST_PASSWORD: &str = "testpass";
pub const ACTIVE_USER: &str = "testuser";
pub const DISABLED_USER: &str = "retired";
const TEST_SECRET: &str = "test-secret-key-12345";
pub const DOWNLOADED_AUDIO: &[u8] = b"downloaded audio bytes";

pub struct TestApp {
    pub router: Router,
    pub tokens: Arc<JwtTokenService>,
    pub transcriber: Arc<StubTranscriber>,
    pub llm: Arc<RecordingLlmClient>,
    pub audio_records: Arc<InMemoryAudioRecords>,
    pub narrative_records: Arc<InMemoryNarrativeRecords>,
    pub staging: TempDir,
    _assets: TempDir,
}

pub struct TestAppBuilder {
    staging: TempDir,
    assets: TempDir,
    fetcher: Option<Arc<dyn AudioFetcher>>,
    fallback_audio_path: PathBuf,
    transcriber: Arc<StubTranscriber>,
    llm: Arc<RecordingLlmClient>,
    audio_records: Arc<InMemoryAudioRecords>,
    narrative_records: Arc<InMemoryNarrativeRecords>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        let assets = TempDir::new().unwrap();
        Self {
            staging: TempDir::new().unwrap(),
            fallback_audio_path: assets.path().join("missing.mp3"),
            assets,
            fetcher: None,
            transcriber: Arc::new(StubTranscriber::returning("Patient is stable.")),
            llm: Arc::new(RecordingLlmClient::returning("Generated text")),
            audio_records: Arc::new(InMemoryAudioRecords::default()),
            narrative_records: Arc::new(InMemoryNarrativeRecords::default()),
        }
    }

    pub fn unreachable_audio_link(mut self) -> Self {
        self.fetcher = Some(Arc::new(FailingFetcher));
        self
    }

    pub fn fallback_audio(mut self, bytes: &[u8]) -> Self {
        let path = self.assets.path().join("audio.mp3");
        std::fs::write(&path, bytes).unwrap();
        self.fallback_audio_path = path;
        self
    }

    pub fn transcriber(mut self, transcriber: StubTranscriber) -> Self {
        self.transcriber = Arc::new(transcriber);
        self
    }

    pub fn llm(mut self, llm: RecordingLlmClient) -> Self {
        self.llm = Arc::new(llm);
        self
    }

    pub fn audio_records(mut self, records: InMemoryAudioRecords) -> Self {
        self.audio_records = Arc::new(records);
        self
    }

    pub fn narrative_records(mut self, records: InMemoryNarrativeRecords) -> Self {
        self.narrative_records = Arc::new(records);
        self
    }

    pub fn build(self) -> TestApp {
        let hasher = BcryptPasswordHasher::new(4);
        let hashed = hasher.hash(TEST_PASSWORD).unwrap();
        let credentials = InMemoryCredentialStore::new([
            Credential::new(ACTIVE_USER.to_string(), hashed.clone(), false),
            Credential::new(DISABLED_USER.to_string(), hashed, true),
        ]);

        let tokens = Arc::new(JwtTokenService::new(TEST_SECRET));
        let auth_service = Arc::new(AuthService::new(
            Arc::new(credentials),
            Arc::new(hasher),
            tokens.clone(),
            Duration::from_secs(30 * 60),
        ));

        let fetcher = self.fetcher.unwrap_or_else(|| {
            Arc::new(BytesFetcher {
                dir: self.staging.path().to_path_buf(),
                bytes: DOWNLOADED_AUDIO.to_vec(),
            })
        });

        let audio_service = Arc::new(AudioProcessingService::new(
            fetcher,
            self.transcriber.clone(),
            self.llm.clone(),
            self.audio_records.clone(),
            self.fallback_audio_path,
        ));
        let narrative_service = Arc::new(NarrativeService::new(
            self.llm.clone(),
            self.narrative_records.clone(),
        ));

        let router = create_router(AppState {
            auth_service,
            audio_service,
            narrative_service,
        });

        TestApp {
            router,
            tokens,
            transcriber: self.transcriber,
            llm: self.llm,
            audio_records: self.audio_records,
            narrative_records: self.narrative_records,
            staging: self.staging,
            _assets: self.assets,
        }
    }
}

impl TestApp {
    pub fn new() -> Self {
        TestAppBuilder::new().build()
    }

    pub fn token_for(&self, username: &str) -> String {
        self.tokens
            .issue(username, Duration::from_secs(30 * 60))
            .unwrap()
            .access_token
    }

    pub fn staged_files(&self) -> usize {
        std::fs::read_dir(self.staging.path()).unwrap().count()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form_request(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}
