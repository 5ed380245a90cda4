//! The synchronous core of a list controller.
//!
//! Holds the view's state and performs every transition in one place; no
//! method here suspends. The async half ([`crate::handle`]) snapshots an
//! epoch before fetching and hands the result back, which is how a
//! response that outlived its parameters gets discarded instead of
//! rendered.

use shopfront_catalog::{CartTotals, ListPayload, ReviewStats};
use shopfront_core::{ClientError, ClientResult, Listable, SortKey, StatusFilter};
use shopfront_views::{
    ActionConfig, ListReport, RowSource, build_report, build_view_model, project, renderer_for,
};

use crate::config::{EndpointKind, Endpoints};
use crate::mutation::MutationPhase;
use crate::ports::{Notifier, ViewSink};
use crate::query::{RequestDescriptor, list_request};
use crate::state::ControllerState;

pub struct ListController<E> {
    label: &'static str,
    endpoints: Endpoints,
    actions: ActionConfig,
    state: ControllerState<E>,
    /// Bumped whenever fetch parameters change; stale responses carry an
    /// older value and are dropped.
    epoch: u64,
    phase: MutationPhase,
    /// Row locked by the pending mutation.
    busy: Option<String>,
    /// Destructive target awaiting its confirmation click.
    staged_delete: Option<String>,
    config_notified: bool,
    stats: Option<ReviewStats>,
    totals: Option<CartTotals>,
    sink: Box<dyn ViewSink>,
    notifier: Box<dyn Notifier>,
}

impl<E> ListController<E>
where
    E: Listable + RowSource + Clone,
{
    pub fn new(
        label: &'static str,
        endpoints: Endpoints,
        actions: ActionConfig,
        state: ControllerState<E>,
        sink: Box<dyn ViewSink>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            label,
            endpoints,
            actions,
            state,
            epoch: 0,
            phase: MutationPhase::Idle,
            busy: None,
            staged_delete: None,
            config_notified: false,
            stats: None,
            totals: None,
            sink,
            notifier,
        }
    }

    pub fn state(&self) -> &ControllerState<E> {
        &self.state
    }

    pub fn mutation_phase(&self) -> MutationPhase {
        self.phase
    }

    pub fn busy(&self) -> Option<&str> {
        self.busy.as_deref()
    }

    /// Review statistics side-car of the last fetch, if the view has one.
    pub fn review_stats(&self) -> Option<&ReviewStats> {
        self.stats.as_ref()
    }

    /// Cart totals side-car of the last fetch, falling back to a local
    /// recomputation is the caller's choice.
    pub fn cart_totals(&self) -> Option<&CartTotals> {
        self.totals.as_ref()
    }

    /// Item count for the header badge. Transient UI state, not entity
    /// state; it tracks the last totals side-car.
    pub fn badge_count(&self) -> Option<u32> {
        self.totals.as_ref().map(|totals| totals.total_items)
    }

    // ---- fetch pipeline -------------------------------------------------

    /// Start a fetch cycle: advance the epoch and build the canonical
    /// request for the current state.
    pub fn begin_fetch(&mut self) -> ClientResult<(u64, RequestDescriptor)> {
        let list_url = self.require_endpoint(EndpointKind::List)?;
        self.epoch += 1;

        let request = list_request(
            &list_url,
            self.state.page,
            self.state.page_size,
            &self.state.search_text,
            self.state.category_id,
        );
        tracing::debug!(view = self.label, epoch = self.epoch, url = %request.url, "fetch started");
        Ok((self.epoch, request))
    }

    /// Apply a fetch outcome, unless the state has moved on since the
    /// request was issued.
    pub fn apply_fetch(&mut self, epoch: u64, result: ClientResult<ListPayload<E>>) {
        if epoch != self.epoch {
            tracing::warn!(
                view = self.label,
                response_epoch = epoch,
                current_epoch = self.epoch,
                "discarding stale response"
            );
            return;
        }

        match result {
            Ok(payload) => {
                self.state.items = payload.items;
                self.state.total = payload.total;
                self.stats = payload.stats;
                self.totals = payload.totals;
                tracing::info!(
                    view = self.label,
                    items = self.state.items.len(),
                    total = self.state.total,
                    "fetch applied"
                );
                self.render();
            }
            // Prior rendered state stays on screen; the user may retry.
            Err(err) => self.report_error(&err),
        }
    }

    // ---- state transitions ----------------------------------------------

    /// Returns whether the text changed (and a debounced fetch is due).
    /// Any change resets to the first page.
    pub fn set_search_text(&mut self, text: &str) -> bool {
        if self.state.search_text == text {
            return false;
        }
        self.state.search_text = text.to_string();
        self.state.page = 1;
        true
    }

    /// Returns whether the page changed (and a fetch is due).
    pub fn set_page(&mut self, page: u32) -> bool {
        if page < 1 || page == self.state.page {
            return false;
        }
        self.state.page = page;
        true
    }

    /// Returns whether the category changed (and a fetch is due).
    pub fn set_category(&mut self, category_id: Option<i64>) -> bool {
        if self.state.category_id == category_id {
            return false;
        }
        self.state.category_id = category_id;
        self.state.page = 1;
        true
    }

    /// Client-side refinement: re-projects the page already in hand.
    pub fn set_status_filter(&mut self, status_filter: StatusFilter) {
        if self.state.status_filter == status_filter {
            return;
        }
        self.state.status_filter = status_filter;
        self.render();
    }

    /// Client-side refinement: re-projects the page already in hand.
    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        if self.state.sort_key == sort_key {
            return;
        }
        self.state.sort_key = sort_key;
        self.render();
    }

    /// Swap render targets and re-render from the same fetched data.
    pub fn toggle_view_mode(&mut self) {
        self.state.view_mode = self.state.view_mode.toggled();
        self.render();
    }

    // ---- mutation lifecycle ---------------------------------------------

    /// First call stages the destructive mutation and prompts for
    /// confirmation; the matching second call returns true and proceeds.
    pub fn stage_destructive(&mut self, target: &str) -> bool {
        if self.staged_delete.as_deref() == Some(target) {
            self.staged_delete = None;
            return true;
        }
        self.staged_delete = Some(target.to_string());
        self.notifier
            .confirm("Confirm to delete. This cannot be undone.");
        false
    }

    /// `idle -> pending`: lock the target's affordance and re-render so
    /// it shows as busy. Refuses while another mutation is in flight.
    pub fn begin_mutation(&mut self, target: &str) -> bool {
        if self.busy.is_some() {
            tracing::warn!(view = self.label, target, "mutation already pending");
            return false;
        }
        self.phase = MutationPhase::Pending;
        self.busy = Some(target.to_string());
        self.render();
        true
    }

    /// `pending -> resolved`. The caller follows up with a full refresh.
    pub fn settle_success(&mut self, message: &str) {
        self.phase = MutationPhase::Resolved;
        self.busy = None;
        self.render();
        self.notifier.success(message);
    }

    /// `pending -> rejected`: unlock, restore the affordance with its
    /// original label, surface the failure. State is otherwise unchanged.
    pub fn settle_failure(&mut self, err: &ClientError) {
        self.phase = MutationPhase::Rejected;
        self.busy = None;
        self.render();
        self.report_error(err);
    }

    // ---- shared plumbing ------------------------------------------------

    /// Resolve a binding, converting absence into the fatal-once
    /// configuration path.
    pub fn require_endpoint(&mut self, kind: EndpointKind) -> ClientResult<String> {
        let resolved = self.endpoints.require(kind).map(str::to_string);
        match resolved {
            Ok(url) => Ok(url),
            Err(err) => {
                self.report_error(&err);
                Err(err)
            }
        }
    }

    /// Resolve a templated binding for a concrete identifier.
    pub fn require_expanded(&mut self, kind: EndpointKind, id: &str) -> ClientResult<String> {
        Ok(self.require_endpoint(kind)?.replace("{id}", id))
    }

    /// Convert a failure into its notification. Configuration failures
    /// block once; everything else is a transient error toast.
    pub fn report_error(&mut self, err: &ClientError) {
        tracing::warn!(view = self.label, error = %err, "operation failed");
        match err {
            ClientError::NotConfigured(_) => {
                if !self.config_notified {
                    self.config_notified = true;
                    self.notifier.fatal(&err.user_message());
                }
            }
            _ => self.notifier.error(&err.user_message()),
        }
    }

    /// Run projector and renderer over the current state and hand the
    /// result to the sink. Safe to call any number of times.
    pub fn render(&mut self) {
        let projection = project(
            &self.state.items,
            self.state.status_filter,
            self.state.sort_key,
        );
        let view_model = build_view_model(
            &projection,
            &self.actions,
            self.state.pagination(),
            self.state.view_mode,
            self.busy.as_deref(),
        );
        let rendered = renderer_for(self.state.view_mode).render(&view_model);
        self.sink.apply(&rendered);
    }

    /// Assemble the payload for the external document collaborator from
    /// the current projection.
    pub fn report(&self, title: &str) -> ListReport {
        let projection = project(
            &self.state.items,
            self.state.status_filter,
            self.state.sort_key,
        );
        build_report(title, &projection, self.state.total)
    }
}
