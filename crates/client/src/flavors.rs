//! Ready-made controllers for the three storefront views.

use std::sync::Arc;

use shopfront_catalog::{CartLine, ProductRecord, ReviewRecord};
use shopfront_core::{ClientResult, SortKey, ViewMode};
use shopfront_views::ActionConfig;

use crate::config::{EndpointKind, Endpoints};
use crate::controller::ListController;
use crate::handle::ControllerHandle;
use crate::ports::{Notifier, ViewSink};
use crate::state::ControllerState;
use crate::transport::Transport;

pub const PRODUCT_PAGE_SIZE: u32 = 20;
pub const CART_PAGE_SIZE: u32 = 100;
pub const REVIEW_PAGE_SIZE: u32 = 10;

/// The inventory admin list.
///
/// Admin flows need their full binding set; a hole in it is a fatal
/// configuration error raised here, at mount, rather than a degraded
/// view.
pub fn product_admin(
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
    sink: Box<dyn ViewSink>,
    notifier: Box<dyn Notifier>,
) -> ClientResult<ControllerHandle<ProductRecord>> {
    endpoints.require(EndpointKind::List)?;
    endpoints.require(EndpointKind::Delete)?;
    let edit_url = endpoints.require(EndpointKind::Edit)?.to_string();

    let actions = ActionConfig {
        detail: true,
        edit_url: Some(edit_url),
        delete: true,
        quantity: false,
    };
    let state = ControllerState::new(PRODUCT_PAGE_SIZE, SortKey::Name, ViewMode::Table);
    let controller = ListController::new("products", endpoints, actions, state, sink, notifier);
    Ok(ControllerHandle::new(controller, transport))
}

/// The shopping cart. One page in practice; the page size just bounds the
/// request.
pub fn cart_view(
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
    sink: Box<dyn ViewSink>,
    notifier: Box<dyn Notifier>,
) -> ControllerHandle<CartLine> {
    let actions = ActionConfig {
        detail: true,
        edit_url: None,
        delete: true,
        quantity: true,
    };
    let state = ControllerState::new(CART_PAGE_SIZE, SortKey::Date, ViewMode::Table);
    let controller = ListController::new("cart", endpoints, actions, state, sink, notifier);
    ControllerHandle::new(controller, transport)
}

/// Reviews under a product detail page. Read-only listing; a missing
/// submit binding degrades to no review form instead of failing.
pub fn product_reviews(
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
    sink: Box<dyn ViewSink>,
    notifier: Box<dyn Notifier>,
) -> ControllerHandle<ReviewRecord> {
    let actions = ActionConfig {
        detail: false,
        edit_url: None,
        delete: false,
        quantity: false,
    };
    let state = ControllerState::new(REVIEW_PAGE_SIZE, SortKey::Date, ViewMode::Grid);
    let controller = ListController::new("reviews", endpoints, actions, state, sink, notifier);
    ControllerHandle::new(controller, transport)
}

/// How many related products a detail page shows.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Products sharing a category with the one on display, for the detail
/// page rail. The product itself is excluded client-side; the backend
/// only filters by category.
pub async fn fetch_related_products(
    transport: &dyn Transport,
    list_url: &str,
    category_id: i64,
    exclude_product_id: i64,
) -> ClientResult<Vec<ProductRecord>> {
    let request = crate::query::list_request(
        list_url,
        1,
        RELATED_PRODUCTS_LIMIT as u32,
        "",
        Some(category_id),
    );
    let payload = crate::fetch::fetch_list::<ProductRecord>(transport, &request).await?;
    Ok(payload
        .items
        .into_iter()
        .filter(|product| product.id != exclude_product_id)
        .take(RELATED_PRODUCTS_LIMIT)
        .collect())
}
