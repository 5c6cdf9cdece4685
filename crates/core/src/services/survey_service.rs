use crate::errors::CoreError;
use crate::models::survey::SurveySubmission;
use crate::providers::traits::SurveyBackend;

/// Posts the investor survey.
pub struct SurveyService;

impl SurveyService {
    pub fn new() -> Self {
        Self
    }

    /// Post the survey and return the backend's JSON status.
    pub async fn submit(
        &self,
        backend: &dyn SurveyBackend,
        survey: &SurveySubmission,
    ) -> Result<serde_json::Value, CoreError> {
        let status = backend.submit_survey(survey).await?;
        tracing::info!(themes = survey.themes.len(), "survey submitted");
        Ok(status)
    }
}

impl Default for SurveyService {
    fn default() -> Self {
        Self::new()
    }
}
