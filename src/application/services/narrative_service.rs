use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ports::{LlmClient, NarrativeRecordRepository};
use crate::application::services::prompts::NARRATIVE_TEMPLATE;
use crate::domain::{NarrativeRecord, NewNarrativeRecord};

use super::{ExternalError, PipelineError, preview_text};

pub const ENTRY_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone)]
pub struct NarrativeRequest {
    pub visit_id: String,
    pub chat_id: String,
    pub user_id: String,
    pub entries: Vec<String>,
}

pub fn join_entries(entries: &[String]) -> String {
    entries.join(ENTRY_SEPARATOR)
}

pub struct NarrativeService {
    llm_client: Arc<dyn LlmClient>,
    repository: Arc<dyn NarrativeRecordRepository>,
}

impl NarrativeService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        repository: Arc<dyn NarrativeRecordRepository>,
    ) -> Self {
        Self {
            llm_client,
            repository,
        }
    }

    #[instrument(skip(self, request), fields(visit_id = %request.visit_id, entries = request.entries.len()))]
    pub async fn combine(&self, request: NarrativeRequest) -> Result<NarrativeRecord, PipelineError> {
        let combined = join_entries(&request.entries);
        debug!(input = %preview_text(&combined), "Combined narrative entries");

        info!("Generating narrative");
        let narrative = self
            .llm_client
            .complete(NARRATIVE_TEMPLATE, Some(&combined))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Narrative generation failed");
                ExternalError::NarrativeFailed(e.to_string())
            })?;
        debug!(narrative = %preview_text(&narrative), "Narrative generated");

        let record = NewNarrativeRecord::success(
            request.visit_id,
            request.chat_id,
            request.user_id,
            narrative,
        );

        let saved = self.repository.insert(&record).await.map_err(|e| {
            tracing::error!(error = %e, "Database error");
            PipelineError::Persistence(e)
        })?;

        info!(id = saved.id, "Narrative combination completed");
        Ok(saved)
    }
}
