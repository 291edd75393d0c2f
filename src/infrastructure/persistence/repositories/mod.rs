mod pg_audio_record_repository;
mod pg_narrative_record_repository;

pub use pg_audio_record_repository::PgAudioRecordRepository;
pub use pg_narrative_record_repository::PgNarrativeRecordRepository;
