#![allow(dead_code, unused_imports)]

mod mock_server;
mod mocks;
mod test_app;
mod test_postgres;

pub use mock_server::start_mock_server;
pub use mocks::{
    BytesFetcher, FailingFetcher, InMemoryAudioRecords, InMemoryNarrativeRecords,
    RecordingLlmClient, StubTranscriber,
};
pub use test_app::{
    ACTIVE_USER, DISABLED_USER, DOWNLOADED_AUDIO, TEST_PASSWORD, TestApp, TestAppBuilder,
    form_request, get_request, json_request,
};
pub use test_postgres::TestPostgres;
