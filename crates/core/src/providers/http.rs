use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::config::DashboardSettings;
use crate::errors::{FetchError, FetchResult};
use crate::models::chart::ChartQuery;
use crate::models::dropdown::DropdownOptions;
use crate::models::form::FormParameters;
use crate::models::survey::SurveySubmission;
use super::traits::{ChartSource, ChatBackend, OptionsSource, SubmitBackend, SurveyBackend};

/// HTTP client for every remote resource the dashboard talks to.
///
/// - `GET  {dropdown_data_url}`: static dropdown options
/// - `GET  {backend}/token_price?symbol=&period=&limit=`: chart body as text
/// - `POST {backend}/chat?user_input=`: `{"answer": ...}`
/// - `POST {submit_url}`: form parameters, any JSON back
/// - `POST {backend}/submit_survey`: investor profile
pub struct HttpBackend {
    client: Client,
    settings: DashboardSettings,
}

impl HttpBackend {
    pub fn new(settings: DashboardSettings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match settings.request_timeout_secs {
            Some(secs) => builder.timeout(Duration::from_secs(secs)),
            None => builder,
        };
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }
}

// ── Wire types ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    user_input: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    answer: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        if let Some(m) = self.message.or(self.error) {
            return Some(m);
        }
        // FastAPI puts validation failures in `detail`, often as a list
        self.detail.map(|d| match d {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
    }
}

/// Turn a non-2xx response into `FetchError::Http`, keeping whatever
/// message the body carries.
async fn ensure_success(resp: Response) -> FetchResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| "Unknown error".to_string());
    Err(FetchError::Http {
        status: status.as_u16(),
        message,
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl OptionsSource for HttpBackend {
    async fn load_options(&self) -> FetchResult<DropdownOptions> {
        tracing::debug!(url = %self.settings.dropdown_data_url, "loading dropdown options");
        let resp = self
            .client
            .get(&self.settings.dropdown_data_url)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let text = resp.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| FetchError::Decode(format!("Failed to parse dropdown data: {e}")))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChartSource for HttpBackend {
    async fn fetch_chart(&self, query: &ChartQuery) -> FetchResult<String> {
        let url = self.settings.backend_endpoint("token_price");
        tracing::debug!(
            symbol = %query.symbol,
            period = query.period.granularity(),
            limit = %query.limit,
            "fetching chart"
        );
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("symbol", query.symbol.as_str()),
                ("period", query.period.granularity()),
                ("limit", query.limit.as_str()),
            ])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        Ok(resp.text().await?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatBackend for HttpBackend {
    async fn ask(&self, user_input: &str) -> FetchResult<String> {
        let url = self.settings.backend_endpoint("chat");
        tracing::debug!(chars = user_input.chars().count(), "sending chat message");
        let resp = self
            .client
            .post(&url)
            .query(&[("user_input", user_input)])
            .json(&ChatRequest { user_input })
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let text = resp.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| FetchError::Decode(format!("Failed to parse chat answer: {e}")))?;
        Ok(parsed.answer)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SubmitBackend for HttpBackend {
    async fn submit(&self, params: &FormParameters) -> FetchResult<serde_json::Value> {
        tracing::debug!(url = %self.settings.submit_url, ?params, "submitting form");
        let resp = self
            .client
            .post(&self.settings.submit_url)
            .json(params)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let text = resp.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| FetchError::Decode(format!("Failed to parse submit response: {e}")))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SurveyBackend for HttpBackend {
    async fn submit_survey(&self, survey: &SurveySubmission) -> FetchResult<serde_json::Value> {
        let url = self.settings.backend_endpoint("submit_survey");
        let resp = self.client.post(&url).json(survey).send().await?;
        let resp = ensure_success(resp).await?;
        let text = resp.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| FetchError::Decode(format!("Failed to parse survey response: {e}")))
    }
}
