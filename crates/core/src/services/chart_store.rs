use crate::errors::{CoreError, FetchResult};
use crate::models::chart::{ChartPayload, ChartQuery, ChartRecord};
use crate::providers::traits::ChartSource;

/// Ticket for one in-flight chart request.
///
/// Returned by [`ChartStore::begin_fetch`] and handed back, together with the
/// response, to [`ChartStore::complete`].
#[derive(Debug)]
#[must_use = "a pending chart request must be completed"]
pub struct PendingChart {
    query: ChartQuery,
    seq: u64,
}

impl PendingChart {
    #[must_use]
    pub fn query(&self) -> &ChartQuery {
        &self.query
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Holds the fetched chart records and which one is displayed.
///
/// Each successful response replaces the whole list. Requests are not
/// de-duplicated or ordered: whichever response is applied last wins, so two
/// overlapping fetches for different symbols may leave the older symbol on
/// screen. The list always comes from exactly one response.
#[derive(Debug, Default)]
pub struct ChartStore {
    charts: Vec<ChartRecord>,
    active: Option<String>,
    error: Option<String>,
    in_flight: usize,
    next_seq: u64,
    displayed_seq: Option<u64>,
}

impl ChartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request: clears the error and marks the store loading.
    pub fn begin_fetch(&mut self, query: ChartQuery) -> PendingChart {
        self.next_seq += 1;
        self.in_flight += 1;
        self.error = None;
        tracing::debug!(seq = self.next_seq, symbol = %query.symbol, "chart fetch started");
        PendingChart {
            query,
            seq: self.next_seq,
        }
    }

    /// Apply a response. Errors leave the previous charts in place.
    pub fn complete(&mut self, pending: PendingChart, result: FetchResult<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result.and_then(|body| ChartPayload::decode(&body)) {
            Ok(payload) => {
                let record = ChartRecord::for_symbol(&pending.query.symbol, payload);
                tracing::info!(seq = pending.seq, id = %record.id, "chart data replaced");
                self.charts = vec![record];
                self.error = None;
                self.displayed_seq = Some(pending.seq);
            }
            Err(e) => {
                tracing::warn!(seq = pending.seq, symbol = %pending.query.symbol, error = %e, "chart fetch failed");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Issue one request and apply its response.
    pub async fn fetch(&mut self, source: &dyn ChartSource, query: ChartQuery) {
        let pending = self.begin_fetch(query);
        let result = source.fetch_chart(pending.query()).await;
        self.complete(pending, result);
    }

    /// Switch the displayed record. Does not fetch anything.
    pub fn set_active_chart(&mut self, id: &str) -> Result<(), CoreError> {
        if !self.charts.iter().any(|c| c.id == id) {
            return Err(CoreError::ChartNotFound(id.to_string()));
        }
        self.active = Some(id.to_string());
        Ok(())
    }

    /// The selected record, or the first one when nothing valid is selected.
    #[must_use]
    pub fn active_chart(&self) -> Option<&ChartRecord> {
        self.active
            .as_deref()
            .and_then(|id| self.charts.iter().find(|c| c.id == id))
            .or_else(|| self.charts.first())
    }

    #[must_use]
    pub fn charts(&self) -> &[ChartRecord] {
        &self.charts
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Sequence number of the request whose response is on screen.
    #[must_use]
    pub fn displayed_seq(&self) -> Option<u64> {
        self.displayed_seq
    }
}
