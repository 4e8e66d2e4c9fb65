//! Driving port for questionnaire reads.

use async_trait::async_trait;

use crate::domain::{Error, Questionnaire};

#[async_trait]
pub trait QuestionnaireQuery: Send + Sync {
    /// Fetch one questionnaire on behalf of an authenticated caller.
    async fn get_by_id(&self, id: &str, token: Option<&str>) -> Result<Questionnaire, Error>;

    /// List every questionnaire. No token is required.
    async fn list(&self) -> Result<Vec<Questionnaire>, Error>;
}
