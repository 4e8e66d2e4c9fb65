//! In-memory `QuestionnaireRepository` implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{QuestionnaireRepository, QuestionnaireRepositoryError};
use crate::domain::{Questionnaire, QuestionnaireId, SubscriptionTier};

/// Questionnaire store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryQuestionnaireRepository {
    records: RwLock<Vec<Questionnaire>>,
}

impl InMemoryQuestionnaireRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionnaireRepository for InMemoryQuestionnaireRepository {
    async fn create(
        &self,
        questionnaire: &Questionnaire,
    ) -> Result<(), QuestionnaireRepositoryError> {
        let mut records = self.records.write().await;
        if records.iter().any(|record| record.id == questionnaire.id) {
            debug!(questionnaire_id = %questionnaire.id, "duplicate questionnaire id");
            return Err(QuestionnaireRepositoryError::query(format!(
                "questionnaire {} already exists",
                questionnaire.id
            )));
        }
        records.push(questionnaire.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &QuestionnaireId,
    ) -> Result<Option<Questionnaire>, QuestionnaireRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| &record.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Questionnaire>, QuestionnaireRepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn update_plan(
        &self,
        id: &QuestionnaireId,
        plan: SubscriptionTier,
    ) -> Result<Option<Questionnaire>, QuestionnaireRepositoryError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|record| &record.id == id) else {
            return Ok(None);
        };
        record.plan = Some(plan);
        Ok(Some(record.clone()))
    }
}
