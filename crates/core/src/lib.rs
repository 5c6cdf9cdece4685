pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use config::{DashboardSettings, SurveyWindow};
use models::{
    chart::ChartQuery,
    form::{FormField, Period},
    survey::SurveySubmission,
    view::{ChartPanelView, ChartTab, ChatView, DashboardView},
};
use providers::{
    http::HttpBackend,
    traits::{ChartSource, ChatBackend, OptionsSource, ProviderDetector, SubmitBackend, SurveyBackend},
};
use services::{
    chart_store::ChartStore,
    chat_session::ChatSession,
    dropdown_loader::DropdownLoader,
    form_state::{FieldUpdate, FormEvent, FormState},
    submission::Submission,
    survey_service::SurveyService,
    wallet_connector::WalletConnector,
};

use errors::CoreError;

/// Remote endpoints the dashboard depends on.
///
/// Usually all five are the same [`HttpBackend`]; tests swap in mocks.
#[derive(Clone)]
pub struct Backends {
    pub options: Arc<dyn OptionsSource>,
    pub charts: Arc<dyn ChartSource>,
    pub chat: Arc<dyn ChatBackend>,
    pub submit: Arc<dyn SubmitBackend>,
    pub survey: Arc<dyn SurveyBackend>,
}

impl Backends {
    /// Route every concern to one HTTP client.
    pub fn http(settings: &DashboardSettings) -> Self {
        let http = Arc::new(HttpBackend::new(settings.clone()));
        Self {
            options: http.clone(),
            charts: http.clone(),
            chat: http.clone(),
            submit: http.clone(),
            survey: http,
        }
    }
}

/// Main entry point: the dashboard screen's state, minus the pixels.
///
/// Wires the form, chart, chat, wallet and submit stores together and
/// composes them into a [`DashboardView`] for the frontend to draw. The three
/// remote flows (submit, chart, chat) are independent of each other.
#[must_use]
pub struct Dashboard {
    settings: DashboardSettings,
    backends: Backends,
    form: FormState,
    dropdown: DropdownLoader,
    charts: ChartStore,
    chat: ChatSession,
    wallet: WalletConnector,
    submission: Submission,
    survey_service: SurveyService,
    /// Symbol picked in the symbol dropdown
    symbol: String,
    /// Chart query parameters, kept in sync with the form's period/limit
    chart_period: Period,
    chart_limit: String,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("symbol", &self.symbol)
            .field("chart_period", &self.chart_period)
            .field("chart_limit", &self.chart_limit)
            .field("charts", &self.charts.charts().len())
            .field("messages", &self.chat.messages().len())
            .field("wallet", &self.wallet)
            .finish()
    }
}

impl Dashboard {
    /// Dashboard talking HTTP to the endpoints in `settings`.
    pub fn new(settings: DashboardSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        let backends = Backends::http(&settings);
        Ok(Self::with_backends(settings, backends))
    }

    /// Dashboard with caller-supplied endpoints.
    pub fn with_backends(settings: DashboardSettings, backends: Backends) -> Self {
        let chat = ChatSession::new(settings.chat_failure_policy, settings.clear_chat_on_close);
        Self {
            symbol: settings.default_symbol.clone(),
            chart_period: settings.default_chart_period,
            chart_limit: settings.default_chart_limit.clone(),
            settings,
            backends,
            form: FormState::new(),
            dropdown: DropdownLoader::new(),
            charts: ChartStore::new(),
            chat,
            wallet: WalletConnector::new(),
            submission: Submission::new(),
            survey_service: SurveyService::new(),
        }
    }

    /// Startup work: detect the wallet and load the dropdown options once.
    pub async fn mount(&mut self, detector: &dyn ProviderDetector) {
        self.wallet.mount(detector);
        let options = Arc::clone(&self.backends.options);
        self.dropdown.load(options.as_ref()).await;
    }

    // ── Form ────────────────────────────────────────────────────────

    /// Feed one input into the form. Period and limit changes also retarget
    /// the chart query.
    pub fn set_form_field(&mut self, field: FormField, value: &str) -> Result<FieldUpdate, CoreError> {
        let update = self.form.set_field(field, value)?;
        if let FieldUpdate::Notify(event) = &update {
            match event {
                FormEvent::PeriodChanged(period) => self.chart_period = *period,
                FormEvent::LimitChanged(limit) => self.chart_limit = limit.clone(),
            }
        }
        Ok(update)
    }

    /// Post the whole form to the submit endpoint.
    pub async fn submit_form(&mut self) {
        let params = self.form.snapshot();
        let backend = Arc::clone(&self.backends.submit);
        self.submission.submit(backend.as_ref(), &params).await;
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    // ── Symbol & Charts ─────────────────────────────────────────────

    /// Pick the symbol used by the next chart fetch. Does not fetch.
    pub fn select_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    #[must_use]
    pub fn selected_symbol(&self) -> &str {
        &self.symbol
    }

    /// Query the next chart fetch will send.
    #[must_use]
    pub fn chart_query(&self) -> ChartQuery {
        ChartQuery::new(self.symbol.clone(), self.chart_period, self.chart_limit.clone())
    }

    /// Fetch the chart for the selected symbol, period and limit.
    pub async fn fetch_chart(&mut self) {
        let query = self.chart_query();
        let source = Arc::clone(&self.backends.charts);
        self.charts.fetch(source.as_ref(), query).await;
    }

    pub fn set_active_chart(&mut self, id: &str) -> Result<(), CoreError> {
        self.charts.set_active_chart(id)
    }

    #[must_use]
    pub fn charts(&self) -> &ChartStore {
        &self.charts
    }

    /// Direct access for hosts that drive overlapping fetches themselves.
    pub fn charts_mut(&mut self) -> &mut ChartStore {
        &mut self.charts
    }

    #[must_use]
    pub fn dropdown(&self) -> &DropdownLoader {
        &self.dropdown
    }

    // ── Wallet ──────────────────────────────────────────────────────

    pub async fn connect_wallet(&mut self) {
        self.wallet.connect().await;
    }

    #[must_use]
    pub fn wallet(&self) -> &WalletConnector {
        &self.wallet
    }

    // ── Chat ────────────────────────────────────────────────────────

    pub fn open_chat(&mut self) {
        self.chat.open();
    }

    pub fn close_chat(&mut self) {
        self.chat.close();
    }

    pub fn set_chat_draft(&mut self, text: impl Into<String>) {
        self.chat.set_draft(text);
    }

    /// Send the chat draft. Blank drafts are ignored.
    pub async fn send_chat(&mut self) {
        let backend = Arc::clone(&self.backends.chat);
        self.chat.send(backend.as_ref()).await;
    }

    #[must_use]
    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// Direct access for hosts that drive overlapping sends themselves.
    pub fn chat_mut(&mut self) -> &mut ChatSession {
        &mut self.chat
    }

    // ── Survey ──────────────────────────────────────────────────────

    /// Window the frontend should open for the survey.
    #[must_use]
    pub fn open_survey(&self) -> SurveyWindow {
        self.settings.survey_window.clone()
    }

    pub async fn submit_survey(&self, survey: &SurveySubmission) -> Result<serde_json::Value, CoreError> {
        self.survey_service
            .submit(self.backends.survey.as_ref(), survey)
            .await
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    // ── View ────────────────────────────────────────────────────────

    /// Compose the current state of every store into one frame.
    #[must_use]
    pub fn render(&self) -> DashboardView {
        DashboardView {
            wallet: self.wallet.view(),
            chart: self.render_chart_panel(),
            form: self.form.snapshot(),
            symbol_options: self
                .dropdown
                .options()
                .map(|o| o.symbols().to_vec())
                .unwrap_or_default(),
            selected_symbol: self.symbol.clone(),
            submit: self.submission.view(),
            chat: self.render_chat(),
        }
    }

    fn render_chart_panel(&self) -> ChartPanelView {
        if self.charts.is_loading() {
            return ChartPanelView::Loading;
        }
        if let Some(err) = self.charts.error() {
            return ChartPanelView::Error(err.to_string());
        }
        if self.charts.charts().is_empty() {
            return ChartPanelView::Empty;
        }
        let active = self.charts.active_chart().cloned();
        let active_id = active.as_ref().map(|c| c.id.as_str());
        let tabs = self
            .charts
            .charts()
            .iter()
            .map(|c| ChartTab {
                id: c.id.clone(),
                title: c.title.clone(),
                active: Some(c.id.as_str()) == active_id,
            })
            .collect();
        ChartPanelView::Tabs { tabs, active }
    }

    fn render_chat(&self) -> ChatView {
        if !self.chat.is_open() {
            return ChatView::Closed;
        }
        ChatView::Open {
            messages: self.chat.messages().to_vec(),
            draft: self.chat.draft().to_string(),
            loading: self.chat.is_loading(),
        }
    }
}
