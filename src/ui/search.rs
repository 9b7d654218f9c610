use crate::models::{BookRecord, SearchKind};
use crate::openlibrary::{self, CatalogClient, CatalogError};

use super::{Alert, FieldState, KindPicker};

pub const MISSING_KIND_MESSAGE: &str = "Select a search type.";
pub const MISSING_TERM_MESSAGE: &str = "Enter a search term.";
pub const SEARCH_FAILED_MESSAGE: &str = "Error searching books. Try again.";

/// A validated search, ready to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Sequence number; only the latest one may update the screen
    pub seq: u64,
    pub kind: SearchKind,
    pub url: String,
}

/// Catalog search screen state.
///
/// `loading` is true from `begin_search` until the latest request settles.
/// Outcomes of superseded requests are dropped.
#[derive(Debug, Clone)]
pub struct SearchScreen {
    base_url: String,
    kind: Option<SearchKind>,
    query: FieldState,
    picker: KindPicker,
    loading: bool,
    results: Vec<BookRecord>,
    results_seq: u64,
    latest_seq: u64,
}

impl SearchScreen {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            kind: None,
            query: FieldState::default(),
            picker: KindPicker::default(),
            loading: false,
            results: Vec::new(),
            results_seq: 0,
            latest_seq: 0,
        }
    }

    pub fn kind(&self) -> Option<SearchKind> {
        self.kind
    }

    pub fn query(&self) -> &FieldState {
        &self.query
    }

    pub fn picker(&self) -> &KindPicker {
        &self.picker
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> &[BookRecord] {
        &self.results
    }

    /// Sequence number of the request that produced the current results.
    pub fn results_seq(&self) -> u64 {
        self.results_seq
    }

    pub fn set_query(&mut self, value: impl Into<String>) {
        self.query.set(value);
    }

    pub fn open_picker(&mut self) {
        self.picker.open();
    }

    pub fn choose_kind(&mut self, kind: SearchKind) {
        self.kind = Some(kind);
        self.picker.dismiss();
    }

    pub fn dismiss_picker(&mut self) {
        self.picker.dismiss();
    }

    /// Validate input, build the URL and enter the loading state.
    pub fn begin_search(&mut self) -> Result<SearchRequest, Alert> {
        let kind = self.kind.ok_or_else(|| Alert::new(MISSING_KIND_MESSAGE))?;
        if self.query.is_empty() {
            return Err(Alert::new(MISSING_TERM_MESSAGE));
        }

        let url = openlibrary::build_search_url(&self.base_url, kind, &self.query.value);
        self.latest_seq += 1;
        self.loading = true;

        tracing::info!(
            seq = self.latest_seq,
            %kind,
            "Searching catalog for '{}'",
            self.query.value
        );

        Ok(SearchRequest {
            seq: self.latest_seq,
            kind,
            url,
        })
    }

    /// Apply the outcome of request `seq`.
    ///
    /// Returns the alert to show, if any. A stale outcome changes nothing.
    pub fn complete_search(
        &mut self,
        seq: u64,
        outcome: Result<Vec<BookRecord>, CatalogError>,
    ) -> Option<Alert> {
        if seq != self.latest_seq {
            tracing::warn!(seq, latest = self.latest_seq, "Discarding stale search result");
            return None;
        }

        self.loading = false;
        match outcome {
            Ok(records) => {
                tracing::info!(seq, count = records.len(), "Search completed");
                self.results = records;
                self.results_seq = seq;
                None
            }
            Err(e) => {
                tracing::warn!(seq, "Search failed: {}", e);
                Some(Alert::new(SEARCH_FAILED_MESSAGE))
            }
        }
    }

    /// Run a whole search against `client` in place.
    pub async fn search_with(&mut self, client: &dyn CatalogClient) -> Option<Alert> {
        let request = match self.begin_search() {
            Ok(request) => request,
            Err(alert) => return Some(alert),
        };
        let outcome = client.fetch_records(request.kind, &request.url).await;
        self.complete_search(request.seq, outcome)
    }
}
