//! Port for questionnaire persistence.
//!
//! Records are handed over once validated; the repository owns them from
//! then on. Only the subscription tier is ever updated.

use async_trait::async_trait;

use crate::domain::{Questionnaire, QuestionnaireId, SubscriptionTier};

use super::define_port_error;

define_port_error! {
    /// Errors raised by questionnaire repository adapters.
    pub enum QuestionnaireRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "questionnaire repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "questionnaire repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionnaireRepository: Send + Sync {
    /// Store a newly created questionnaire.
    async fn create(
        &self,
        questionnaire: &Questionnaire,
    ) -> Result<(), QuestionnaireRepositoryError>;

    /// Fetch a questionnaire by identifier.
    async fn find_by_id(
        &self,
        id: &QuestionnaireId,
    ) -> Result<Option<Questionnaire>, QuestionnaireRepositoryError>;

    /// Fetch every stored questionnaire.
    async fn list(&self) -> Result<Vec<Questionnaire>, QuestionnaireRepositoryError>;

    /// Replace the subscription tier and return the updated record.
    ///
    /// Returns `None` when no questionnaire has the given identifier.
    async fn update_plan(
        &self,
        id: &QuestionnaireId,
        plan: SubscriptionTier,
    ) -> Result<Option<Questionnaire>, QuestionnaireRepositoryError>;
}
