//! Async orchestration around the controller core.
//!
//! The handle is what UI event wiring talks to. It is cheap to clone,
//! locks the controller only for synchronous transitions, and performs
//! every network call outside the lock so overlapping operations resolve
//! against the epoch guard instead of serializing behind each other.

use std::sync::{Arc, Mutex as StdMutex};

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use shopfront_core::Listable;
use shopfront_views::{ListReport, RowSource};

use crate::config::EndpointKind;
use crate::controller::ListController;
use crate::debounce::Debouncer;
use crate::fetch::fetch_list;
use crate::mutation;
use crate::transport::Transport;

/// Busy-lock target for the review submission form, which is not a row.
const REVIEW_FORM_TARGET: &str = "review-form";

/// Busy-lock target for whole-cart operations.
const CART_TARGET: &str = "cart";

pub struct ControllerHandle<E> {
    inner: Arc<Mutex<ListController<E>>>,
    transport: Arc<dyn Transport>,
    debouncer: Arc<StdMutex<Debouncer>>,
}

impl<E> Clone for ControllerHandle<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            transport: Arc::clone(&self.transport),
            debouncer: Arc::clone(&self.debouncer),
        }
    }
}

impl<E> ControllerHandle<E>
where
    E: Listable + RowSource + DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(controller: ListController<E>, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
            transport,
            debouncer: Arc::new(StdMutex::new(Debouncer::new(Debouncer::DEFAULT_WINDOW))),
        }
    }

    /// Replace the search debounce window (tests use a short one).
    pub fn set_debounce_window(&self, window: std::time::Duration) {
        *self.debouncer.lock().unwrap() = Debouncer::new(window);
    }

    /// Direct access to the controller core, for hosts that need to read
    /// state or for tests that drive transitions synchronously.
    pub fn controller(&self) -> Arc<Mutex<ListController<E>>> {
        Arc::clone(&self.inner)
    }

    /// View mount: run the pipeline once with the defaults.
    pub async fn mount(&self) {
        self.refresh().await;
    }

    /// Query builder, fetcher, projector, renderer, in that order. The
    /// epoch snapshot travels with the request; a response arriving after
    /// the state has moved to different parameters is discarded.
    pub async fn refresh(&self) {
        let (epoch, request) = match self.inner.lock().await.begin_fetch() {
            Ok(started) => started,
            Err(_) => return,
        };
        let result = fetch_list::<E>(self.transport.as_ref(), &request).await;
        self.inner.lock().await.apply_fetch(epoch, result);
    }

    /// Keystroke entry point: state updates immediately, the fetch fires
    /// once the debounce window closes.
    pub async fn on_search_input(&self, text: &str) {
        if !self.inner.lock().await.set_search_text(text) {
            return;
        }
        let handle = self.clone();
        self.debouncer
            .lock()
            .unwrap()
            .schedule(move || async move { handle.refresh().await });
    }

    pub async fn go_to_page(&self, page: u32) {
        if self.inner.lock().await.set_page(page) {
            self.refresh().await;
        }
    }

    pub async fn select_category(&self, category_id: Option<i64>) {
        if self.inner.lock().await.set_category(category_id) {
            self.refresh().await;
        }
    }

    /// Client-side only; no fetch.
    pub async fn set_status_filter(&self, status_filter: shopfront_core::StatusFilter) {
        self.inner.lock().await.set_status_filter(status_filter);
    }

    /// Client-side only; no fetch.
    pub async fn set_sort_key(&self, sort_key: shopfront_core::SortKey) {
        self.inner.lock().await.set_sort_key(sort_key);
    }

    /// Re-render the data already in hand under the other target.
    pub async fn toggle_view_mode(&self) {
        self.inner.lock().await.toggle_view_mode();
    }

    /// Delete an entity. The first call for a target only stages it and
    /// prompts; the confirming call locks the row and fires the request.
    pub async fn delete_item(&self, id: &str) {
        let url = {
            let mut inner = self.inner.lock().await;
            if !inner.stage_destructive(id) {
                return;
            }
            let Ok(url) = inner.require_expanded(EndpointKind::Delete, id) else {
                return;
            };
            if !inner.begin_mutation(id) {
                return;
            }
            url
        };
        let result = mutation::delete_entity(self.transport.as_ref(), &url).await;
        self.settle(result, "Item deleted.").await;
    }

    /// Change a line's quantity. Zero means removal.
    pub async fn set_quantity(&self, id: &str, quantity: u32) {
        if quantity == 0 {
            tracing::info!(line = id, "quantity zero, removing line");
            self.remove_line(id).await;
            return;
        }
        let url = {
            let mut inner = self.inner.lock().await;
            let Ok(url) = inner.require_expanded(EndpointKind::Update, id) else {
                return;
            };
            if !inner.begin_mutation(id) {
                return;
            }
            url
        };
        let result = mutation::update_quantity(self.transport.as_ref(), &url, quantity).await;
        self.settle(result, "Quantity updated.").await;
    }

    /// Removal reached through the quantity path; no confirmation step,
    /// the quantity gesture already was one.
    async fn remove_line(&self, id: &str) {
        let url = {
            let mut inner = self.inner.lock().await;
            let Ok(url) = inner.require_expanded(EndpointKind::Delete, id) else {
                return;
            };
            if !inner.begin_mutation(id) {
                return;
            }
            url
        };
        let result = mutation::delete_entity(self.transport.as_ref(), &url).await;
        self.settle(result, "Item removed.").await;
    }

    pub async fn add_to_cart(&self, product_id: i64, quantity: u32) {
        let target = product_id.to_string();
        let url = {
            let mut inner = self.inner.lock().await;
            let Ok(url) = inner.require_endpoint(EndpointKind::Submit) else {
                return;
            };
            if !inner.begin_mutation(&target) {
                return;
            }
            url
        };
        let result =
            mutation::add_to_cart(self.transport.as_ref(), &url, product_id, quantity).await;
        self.settle(result, "Added to cart.").await;
    }

    /// Empty the cart. Destructive, so it takes the staged confirmation.
    pub async fn clear_cart(&self) {
        let url = {
            let mut inner = self.inner.lock().await;
            if !inner.stage_destructive(CART_TARGET) {
                return;
            }
            let Ok(url) = inner.require_endpoint(EndpointKind::Clear) else {
                return;
            };
            if !inner.begin_mutation(CART_TARGET) {
                return;
            }
            url
        };
        let result = mutation::clear_cart(self.transport.as_ref(), &url).await;
        self.settle(result, "Cart cleared.").await;
    }

    /// Publish a review. Validation failures surface without locking
    /// anything.
    pub async fn submit_review(&self, rating: u8, comment: &str) {
        if let Err(err) = shopfront_catalog::validate_review(rating, comment) {
            self.inner.lock().await.report_error(&err);
            return;
        }
        let url = {
            let mut inner = self.inner.lock().await;
            let Ok(url) = inner.require_endpoint(EndpointKind::Submit) else {
                return;
            };
            if !inner.begin_mutation(REVIEW_FORM_TARGET) {
                return;
            }
            url
        };
        let result =
            mutation::submit_review(self.transport.as_ref(), &url, rating, comment).await;
        self.settle(result, "Review published.").await;
    }

    /// Payload for the external document collaborator.
    pub async fn report(&self, title: &str) -> ListReport {
        self.inner.lock().await.report(title)
    }

    async fn settle(
        &self,
        result: shopfront_core::ClientResult<shopfront_catalog::MutationResponse>,
        success_message: &str,
    ) {
        match result {
            Ok(_) => {
                self.inner.lock().await.settle_success(success_message);
                self.refresh().await;
            }
            Err(err) => self.inner.lock().await.settle_failure(&err),
        }
    }
}
