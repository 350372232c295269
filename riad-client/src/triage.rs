//! Triage View: client-side state of one kind's admin list page
//!
//! ```text
//! Loading ──load ok──▶ Loaded
//!    └─────load err──▶ Failed ──load──▶ Loading ...
//! ```
//!
//! The visible rows are always `records ∩ search ∩ status filter`. Commands
//! (`change_status`, `delete`, ...) go to the backend first and only touch
//! local state once the server has accepted them.

use async_trait::async_trait;
use shared::models::{Kind, RequestPatch, RequestStatus, ServiceRecord};
use shared::triage::{self, StatusFilter};
use shared::util::now_millis;

use crate::{ClientError, ClientResult, HttpClient};

/// Server operations the Triage View depends on
#[async_trait]
pub trait TriageBackend: Send + Sync {
    async fn list<R: ServiceRecord>(&self) -> ClientResult<Vec<R>>;

    async fn patch(&self, kind: Kind, patch: &RequestPatch) -> ClientResult<()>;

    async fn delete(&self, kind: Kind, id: i64) -> ClientResult<()>;
}

#[async_trait]
impl TriageBackend for HttpClient {
    async fn list<R: ServiceRecord>(&self) -> ClientResult<Vec<R>> {
        HttpClient::list::<R>(self).await
    }

    async fn patch(&self, kind: Kind, patch: &RequestPatch) -> ClientResult<()> {
        HttpClient::patch(self, kind, patch).await
    }

    async fn delete(&self, kind: Kind, id: i64) -> ClientResult<()> {
        HttpClient::delete(self, kind, id).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded,
    Failed,
}

/// Explicit answer to "delete this request?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Result of a triage command
#[derive(Debug)]
pub enum TriageOutcome {
    /// The server accepted the command and local state follows
    Applied,
    /// Nothing was sent (declined confirmation)
    Skipped,
    Failed(ClientError),
}

impl TriageOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TriageOutcome::Applied)
    }
}

pub struct TriageView<R, B> {
    backend: B,
    state: ViewState,
    records: Vec<R>,
    search: String,
    status_filter: StatusFilter,
    last_error: Option<String>,
}

impl<R: ServiceRecord, B: TriageBackend> TriageView<R, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ViewState::Loading,
            records: Vec::new(),
            search: String::new(),
            status_filter: StatusFilter::All,
            last_error: None,
        }
    }

    pub fn kind(&self) -> Kind {
        R::KIND
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Message of the most recent failed command, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Fetch the listing once. No retry: call again to reload.
    pub async fn load(&mut self) -> TriageOutcome {
        self.state = ViewState::Loading;
        match self.backend.list::<R>().await {
            Ok(records) => {
                tracing::debug!(kind = %R::KIND, count = records.len(), "Triage view loaded");
                self.records = records;
                self.state = ViewState::Loaded;
                self.last_error = None;
                TriageOutcome::Applied
            }
            Err(e) => {
                self.records.clear();
                self.state = ViewState::Failed;
                self.fail("load", e)
            }
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Rows currently visible, in listing order
    pub fn filtered(&self) -> Vec<&R> {
        triage::filter_records(&self.records, &self.search, self.status_filter)
    }

    pub async fn change_status(&mut self, id: i64, status: RequestStatus) -> TriageOutcome {
        if !R::KIND.allows(status) {
            return self.fail(
                "change status",
                ClientError::Validation(format!(
                    "Invalid status '{}' for {}",
                    status,
                    R::KIND.label()
                )),
            );
        }

        let outcome = self.apply(RequestPatch::new(id).status(status)).await;
        if outcome.is_applied()
            && let Some(record) = self.find_mut(id)
        {
            record.meta_mut().status = Some(status);
        }
        outcome
    }

    pub async fn set_priority(&mut self, id: i64, priority: bool) -> TriageOutcome {
        let outcome = self.apply(RequestPatch::new(id).priority(priority)).await;
        if outcome.is_applied()
            && let Some(record) = self.find_mut(id)
        {
            record.meta_mut().priority = Some(priority);
        }
        outcome
    }

    pub async fn set_notes(&mut self, id: i64, notes: impl Into<String>) -> TriageOutcome {
        let notes = notes.into();
        let outcome = self.apply(RequestPatch::new(id).notes(notes.clone())).await;
        if outcome.is_applied()
            && let Some(record) = self.find_mut(id)
        {
            record.meta_mut().notes = Some(notes);
        }
        outcome
    }

    /// Delete one record. Only a [`Confirmation::Confirmed`] reaches the server.
    pub async fn delete(&mut self, id: i64, confirmation: Confirmation) -> TriageOutcome {
        if confirmation == Confirmation::Declined {
            return TriageOutcome::Skipped;
        }

        match self.backend.delete(R::KIND, id).await {
            Ok(()) => {
                self.records.retain(|r| r.id() != id);
                self.last_error = None;
                TriageOutcome::Applied
            }
            Err(e) => self.fail("delete", e),
        }
    }

    /// CSV of the visible rows
    pub fn export_csv(&self) -> ClientResult<String> {
        Ok(triage::to_csv(self.filtered())?)
    }

    /// Download name for [`Self::export_csv`]
    pub fn export_filename(&self) -> String {
        triage::export_filename(R::KIND, now_millis())
    }

    /// Reply link for one loaded record
    pub fn mailto_link(&self, id: i64) -> Option<String> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .map(|r| triage::mailto_link(&r.meta().email))
    }

    /// BCC link for the given loaded records, `None` if none of them is loaded
    pub fn bulk_mailto(&self, ids: &[i64]) -> Option<String> {
        triage::bulk_mailto(
            self.records
                .iter()
                .filter(|r| ids.contains(&r.id()))
                .map(|r| r.meta().email.as_str()),
        )
    }

    async fn apply(&mut self, patch: RequestPatch) -> TriageOutcome {
        match self.backend.patch(R::KIND, &patch).await {
            Ok(()) => {
                self.last_error = None;
                TriageOutcome::Applied
            }
            Err(e) => self.fail("update", e),
        }
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    fn fail(&mut self, action: &str, error: ClientError) -> TriageOutcome {
        tracing::warn!(kind = %R::KIND, "Triage {action} failed: {error}");
        self.last_error = Some(error.to_string());
        TriageOutcome::Failed(error)
    }
}
